use serde::Serialize;
use strum::Display;

/// Fixed message rendered for every backend failure, regardless of cause.
pub const BACKEND_ERROR_MESSAGE: &str = "Backend connection failed.";

/// Fixed message rendered when a well-formed input matches nothing.
pub const NO_SIGNAL_MESSAGE: &str = "No suspicious patterns detected.";

/// Discrete risk bucket assigned to one classification.
///
/// `Invalid` through `Scam` are ordered by severity; `BackendError` is a
/// distinct terminal state (the input was well-formed, the analysis service
/// failed) and deliberately sorts outside the severity ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    #[strum(serialize = "INVALID INPUT")]
    Invalid,
    #[strum(serialize = "SAFE")]
    Safe,
    #[strum(serialize = "SUSPICIOUS")]
    Suspicious,
    #[strum(serialize = "SCAM DETECTED")]
    Scam,
    #[strum(serialize = "ANALYSIS UNAVAILABLE")]
    BackendError,
}

impl RiskTier {
    /// Style category consumed by the presentation surface.
    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Safe => "safe",
            Self::Suspicious => "warning",
            Self::Scam => "danger",
            Self::BackendError => "error",
        }
    }
}

/// Fill color of the threat meter. Invalid and backend-error verdicts carry
/// no fill at all (the meter is cleared, not painted green).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MeterColor {
    Green,
    Orange,
    Red,
}

/// Which classification path produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    Text,
    Image,
    Link,
}

/// The single output type every classification path converges on.
///
/// Constructed fresh per request and never mutated afterwards; it has no
/// identity beyond the request that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RiskVerdict {
    pub tier: RiskTier,
    /// 0–95 inclusive. Zero for tiers that show no confidence.
    pub confidence: u8,
    /// 0–100, drives the visual threat gauge.
    pub meter_percent: u8,
    /// `None` clears the meter (invalid input, backend failure).
    pub meter_color: Option<MeterColor>,
    /// Detection reasons in detection order. May be empty only for `Safe`.
    pub reasons: Vec<String>,
    /// `None` only when the request carried no input kind at all.
    pub source: Option<SourceKind>,
}

impl RiskVerdict {
    /// Invalid-input terminal verdict with a kind-specific message.
    #[must_use]
    pub fn invalid(source: Option<SourceKind>, message: impl Into<String>) -> Self {
        Self {
            tier: RiskTier::Invalid,
            confidence: 0,
            meter_percent: 0,
            meter_color: None,
            reasons: vec![message.into()],
            source,
        }
    }

    /// Backend-failure terminal verdict: confidence 0, meter cleared,
    /// fixed message.
    #[must_use]
    pub fn backend_error(source: SourceKind) -> Self {
        Self {
            tier: RiskTier::BackendError,
            confidence: 0,
            meter_percent: 0,
            meter_color: None,
            reasons: vec![BACKEND_ERROR_MESSAGE.to_string()],
            source: Some(source),
        }
    }
}
