mod analyzer;

pub use analyzer::{BannedWords, ContentAnalysis, ContentAnalyzer};
