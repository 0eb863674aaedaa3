//! Thin presentation adapter: turns a verdict into styled terminal output.
//!
//! This is the only place anything is rendered; the classification core
//! never touches the terminal. Every verdict, including error tiers,
//! produces a complete block — no path leaves the surface pending.

use console::style;
use std::fmt::Write;

use crate::verdict::{MeterColor, RiskTier, RiskVerdict, NO_SIGNAL_MESSAGE};

const METER_WIDTH: usize = 25;

/// Render the full verdict block.
#[must_use]
pub fn render(verdict: &RiskVerdict) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", status_line(verdict.tier));

    if verdict.confidence > 0 {
        let _ = writeln!(
            out,
            "{} {}%",
            style("Confidence:").bold(),
            verdict.confidence
        );
    }

    let _ = writeln!(out, "{}", style("Detection reasons:").bold());
    if verdict.reasons.is_empty() {
        let _ = writeln!(out, "  • {NO_SIGNAL_MESSAGE}");
    } else {
        for reason in &verdict.reasons {
            let _ = writeln!(out, "  • {reason}");
        }
    }

    let _ = writeln!(
        out,
        "{} {}",
        style("Threat level:").bold(),
        meter_bar(verdict.meter_percent, verdict.meter_color)
    );

    out
}

fn status_line(tier: RiskTier) -> String {
    let label = tier.to_string();
    match tier {
        RiskTier::Safe => style(label).green().bold().to_string(),
        RiskTier::Suspicious => style(label).yellow().bold().to_string(),
        RiskTier::Scam => style(label).red().bold().to_string(),
        RiskTier::Invalid | RiskTier::BackendError => style(label).dim().bold().to_string(),
    }
}

/// Fixed-width gauge, e.g. `[#####····················] 20%`.
fn meter_bar(percent: u8, color: Option<MeterColor>) -> String {
    let filled = (usize::from(percent) * METER_WIDTH) / 100;
    let bar: String = "#".repeat(filled) + &"·".repeat(METER_WIDTH - filled);

    let painted = match color {
        Some(MeterColor::Green) => style(bar).green().to_string(),
        Some(MeterColor::Orange) => style(bar).yellow().to_string(),
        Some(MeterColor::Red) => style(bar).red().to_string(),
        None => style(bar).dim().to_string(),
    };

    format!("[{painted}] {percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{RiskVerdict, SourceKind};

    #[test]
    fn safe_verdict_without_reasons_shows_no_signal_message() {
        let v = RiskVerdict {
            tier: RiskTier::Safe,
            confidence: 0,
            meter_percent: 20,
            meter_color: Some(MeterColor::Green),
            reasons: vec![],
            source: Some(SourceKind::Text),
        };
        let out = render(&v);
        assert!(out.contains("SAFE"));
        assert!(out.contains(NO_SIGNAL_MESSAGE));
        assert!(out.contains("20%"));
        assert!(!out.contains("Confidence:"));
    }

    #[test]
    fn scam_verdict_lists_every_reason_in_order() {
        let v = RiskVerdict {
            tier: RiskTier::Scam,
            confidence: 91,
            meter_percent: 91,
            meter_color: Some(MeterColor::Red),
            reasons: vec!["first".into(), "second".into()],
            source: Some(SourceKind::Text),
        };
        let out = render(&v);
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        assert!(first < second);
        assert!(out.contains("91%"));
    }

    #[test]
    fn backend_error_still_renders_a_complete_block() {
        let v = RiskVerdict::backend_error(SourceKind::Link);
        let out = render(&v);
        assert!(out.contains("ANALYSIS UNAVAILABLE"));
        assert!(out.contains("0%"));
    }

    #[test]
    fn meter_bar_is_fixed_width() {
        for percent in [0_u8, 20, 50, 95, 100] {
            let bar = meter_bar(percent, None);
            let hashes = bar.matches('#').count();
            let dots = bar.matches('·').count();
            assert_eq!(hashes + dots, METER_WIDTH, "at {percent}%");
        }
    }
}
