//! Terjemah - Indonesian to English Translation
//!
//! Translates text through online providers tried in order (MyMemory, then
//! LibreTranslate) and falls back to an offline phrase dictionary when none
//! of them answers.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod samples;
pub mod session;
pub mod translate;
