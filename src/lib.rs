#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation
)]

pub mod classify;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod remote;
pub mod render;
pub mod scoring;
pub mod verdict;

pub use classify::{ClassificationRequest, ImageUpload, Orchestrator};
pub use config::Config;
pub use error::{Result, ScamLensError};
pub use verdict::{MeterColor, RiskTier, RiskVerdict, SourceKind};
