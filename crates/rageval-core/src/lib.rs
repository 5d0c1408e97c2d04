//! Scores RAG chatbot answers against ground truth with an LLM judge (or a
//! deterministic mock judge) and rolls low scores up into a failure report.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod judge;
pub mod model;
pub mod providers;
pub mod report;
