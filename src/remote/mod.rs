pub mod client;
pub mod interpreter;

pub use client::AnalysisClient;
pub use interpreter::{AnalysisReport, RemoteLabel, interpret};
