pub mod summarize;

// Re-exports for thin bins
pub use summarize::SummarizationService;
