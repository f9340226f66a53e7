//! Core library for readscore.
//!
//! Estimates the reading age needed to understand a text with four classic
//! readability formulas: Automated Readability Index, Flesch–Kincaid, SMOG
//! and Coleman–Liau.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word segmentation
//! - [`syllables`] - Heuristic syllable counting
//! - [`aggregate`] - Whole-document counts
//! - [`readability`] - Formulas, age mapping and reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{Aggregates, Formula, compute_score};
//!
//! let aggregates = Aggregates::from_text("The cat sat. It was happy!");
//! let result = compute_score(Formula::FleschKincaid, &aggregates).unwrap();
//! println!("{}: {:.2} (about {}-year-olds)", result.formula.name(), result.score, result.age);
//! ```
#![deny(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod readability;
pub mod syllables;
pub mod text;

pub use aggregate::{Aggregates, aggregate};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{
    Formula, ReadabilityReport, ReadingAge, ScoreResult, Selection, average_age,
    check_readability, compute_all, compute_score, compute_selection, truncate_2dp,
};
pub use syllables::count_syllables;
pub use text::segment;
