//! Interprets a remote analysis response into the shared verdict contract.
//!
//! The remote services label their findings with free-form verdict strings;
//! those are parsed once into [`RemoteLabel`] here so downstream logic never
//! re-parses strings. Confidence and meter percent are taken from the
//! response (clamped into the verdict ranges) rather than recomputed — the
//! one path where confidence is not derived locally.

use serde::Deserialize;

use crate::error::AnalysisError;
use crate::verdict::{MeterColor, RiskTier, RiskVerdict, SourceKind};

/// Placeholder rendered when a successful response carries no reasons.
pub const NO_REMOTE_SIGNAL_MESSAGE: &str = "No signals reported by the analysis engine.";

/// Wire shape returned by both analysis services.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub verdict: String,
    /// Already expressed as a percentage by the service.
    #[serde(default)]
    pub confidence: u8,
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Services signal internal failure with `{"error": true}`.
    #[serde(default)]
    pub error: bool,
}

/// Categorical reading of a remote verdict string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteLabel {
    Danger,
    Suspicious,
    Safe,
}

impl RemoteLabel {
    /// Categorize a raw verdict label. "PHISHING" and "FAKE" both mean the
    /// service is sure; anything it did not flag reads as safe.
    #[must_use]
    pub fn from_verdict(verdict: &str) -> Self {
        let upper = verdict.to_uppercase();
        if upper.contains("PHISHING") || upper.contains("FAKE") {
            Self::Danger
        } else if upper.contains("SUSPICIOUS") {
            Self::Suspicious
        } else {
            Self::Safe
        }
    }

    fn tier(self) -> RiskTier {
        match self {
            Self::Danger => RiskTier::Scam,
            Self::Suspicious => RiskTier::Suspicious,
            Self::Safe => RiskTier::Safe,
        }
    }

    fn meter_color(self) -> MeterColor {
        match self {
            Self::Danger => MeterColor::Red,
            Self::Suspicious => MeterColor::Orange,
            Self::Safe => MeterColor::Green,
        }
    }
}

/// Map a remote call outcome onto the verdict contract.
///
/// Any transport failure or explicit service error is terminal
/// `BackendError`; there is no retry.
#[must_use]
pub fn interpret(
    outcome: Result<AnalysisReport, AnalysisError>,
    source: SourceKind,
) -> RiskVerdict {
    let report = match outcome {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(%source, error = %err, "analysis call failed");
            return RiskVerdict::backend_error(source);
        }
    };

    if report.error {
        tracing::warn!(%source, error = %AnalysisError::ServiceError, "analysis rejected");
        return RiskVerdict::backend_error(source);
    }

    let label = RemoteLabel::from_verdict(&report.verdict);
    tracing::debug!(%source, verdict = %report.verdict, confidence = report.confidence, "remote verdict received");

    let reasons = if report.reasons.is_empty() {
        vec![NO_REMOTE_SIGNAL_MESSAGE.to_string()]
    } else {
        report.reasons
    };

    RiskVerdict {
        tier: label.tier(),
        confidence: report.confidence.min(95),
        meter_percent: report.confidence.min(100),
        meter_color: Some(label.meter_color()),
        reasons,
        source: Some(source),
    }
}
