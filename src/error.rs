use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `scamlens`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains. Note that classification
/// outcomes — invalid input, backend failure — are verdict values, not
/// errors: these variants cover local faults only.
#[derive(Debug, Error)]
pub enum ScamLensError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Remote analysis transport ───────────────────────────────────────
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Remote analysis errors ─────────────────────────────────────────────────

/// Transport-level failures talking to an analysis service. Every variant
/// funnels into the `BackendError` verdict tier; none is retried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("analysis service reported an internal error")]
    ServiceError,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ScamLensError>;
