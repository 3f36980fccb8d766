//! On-page SEO scoring for editorial content.
//!
//! The heart of the crate is [`scoring::Analyzer`]: a pure function from the
//! fields an author edits (title, description, keyphrase, slug, HTML content,
//! keywords) to a weighted 0-100 score, per-check diagnostics and an ordered
//! feedback list. The other modules feed it (`editor`, `document`, `config`)
//! or render its output (`output`).

pub mod config;
pub mod content;
pub mod document;
pub mod editor;
pub mod output;
pub mod scoring;

pub use scoring::{analyze, AnalysisInput, AnalysisResult, Analyzer};
