//! Local text scoring against the keyword lexicon.
//!
//! Scoring is a pure function of the normalized input: identical text
//! (case and surrounding whitespace aside) always produces the same score,
//! tier and reason ordering. Repeated matches within one category are
//! counted and reported once per phrase, not deduplicated.

use crate::lexicon::LEXICON;
use crate::verdict::{MeterColor, RiskTier, RiskVerdict, SourceKind};

/// Scam tier floor. Scores at or above this are `Scam`.
const SCAM_THRESHOLD: u32 = 7;
/// Suspicious tier floor. Scores in `SUSPICIOUS_THRESHOLD..SCAM_THRESHOLD`
/// are `Suspicious`; below that, `Safe`.
const SUSPICIOUS_THRESHOLD: u32 = 4;
/// Confidence never exceeds this, whatever the raw score.
const CONFIDENCE_CAP: u32 = 95;
/// Meter fill shown for a safe result (no confidence is shown).
const SAFE_METER_PERCENT: u8 = 20;

/// Lower-case and trim input before scoring. Callers must not hand the
/// scorer an empty normalized string; that case is invalid input, not safe.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Scan normalized text against every lexicon category.
///
/// Each phrase hit adds the category weight and appends the category's
/// reason label, walking categories and phrases in declared order.
#[must_use]
pub fn score_text(normalized: &str) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    for category in &LEXICON {
        for phrase in category.phrases {
            if normalized.contains(phrase) {
                score += category.weight;
                reasons.push(category.reason.to_string());
            }
        }
    }

    (score, reasons)
}

/// Score normalized text and map the result onto the verdict contract.
#[must_use]
pub fn classify_text(normalized: &str) -> RiskVerdict {
    let (score, reasons) = score_text(normalized);
    tracing::debug!(score, matches = reasons.len(), "text scored");

    if score >= SCAM_THRESHOLD {
        let confidence = CONFIDENCE_CAP.min(70 + 3 * score) as u8;
        RiskVerdict {
            tier: RiskTier::Scam,
            confidence,
            meter_percent: confidence,
            meter_color: Some(MeterColor::Red),
            reasons,
            source: Some(SourceKind::Text),
        }
    } else if score >= SUSPICIOUS_THRESHOLD {
        let confidence = (60 + 3 * score) as u8;
        RiskVerdict {
            tier: RiskTier::Suspicious,
            confidence,
            meter_percent: confidence,
            meter_color: Some(MeterColor::Orange),
            reasons,
            source: Some(SourceKind::Text),
        }
    } else {
        RiskVerdict {
            tier: RiskTier::Safe,
            confidence: 0,
            meter_percent: SAFE_METER_PERCENT,
            meter_color: Some(MeterColor::Green),
            reasons,
            source: Some(SourceKind::Text),
        }
    }
}
