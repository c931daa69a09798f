#![allow(dead_code)]

pub mod provider;
