//! Fixed prompt and sampling settings for journal summaries.

/// Longest journal entry accepted, counted in UTF-16 code units of the raw
/// text.
pub const MAX_TEXT_CHARS: usize = 8000;

/// Output cap. Bounds cost and latency, not correctness.
pub const MAX_SUMMARY_TOKENS: u32 = 150;

pub const SUMMARY_TEMPERATURE: f64 = 0.7;

pub const SYSTEM_PROMPT: &str = "You are an AI assistant that creates thoughtful, concise summaries of personal journal entries.\n\
    Your summaries should:\n\
    - Be 2-3 sentences long\n\
    - Capture the main themes, emotions, and insights\n\
    - Be supportive and non-judgmental in tone\n\
    - Help the user reflect on their thoughts\n\
    - Use warm, empathetic language";

/// Wraps the journal text in the user turn. The text is embedded verbatim.
#[must_use]
pub fn build_user_prompt(text: &str) -> String {
    format!("Please summarize this journal entry in 2-3 sentences:\n\n{text}")
}
