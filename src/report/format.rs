//! Formatted terminal output for rankings and swing events.
//!
//! We keep formatting code in one place so:
//! - the analysis code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The layout is load-bearing: downstream scripts parse these lines, so the
//! formatting tests below pin it byte for byte.

use crate::domain::{CagrEntry, SwingEvent};

/// Format the top/worst ranking tables.
///
/// The input must already be sorted best-first. Both sides are sliced the
/// forgiving way: with fewer funds than `top_n` each side shows what exists,
/// and a fund can appear on both sides when the list is short.
pub fn format_rankings(rankings: &[CagrEntry], top_n: usize) -> String {
    let top = &rankings[..top_n.min(rankings.len())];
    let worst = &rankings[rankings.len().saturating_sub(top_n)..];

    let mut lines = Vec::new();
    lines.push(format!("Top {top_n} funds:"));
    for entry in top {
        lines.push(rate_line(entry));
    }
    lines.push(String::new());
    lines.push(format!("Worst {top_n} funds:"));
    for entry in worst {
        lines.push(rate_line(entry));
    }
    lines.join("\n")
}

/// Format the swing event list.
///
/// The threshold is printed with `Display`, so a whole-number threshold
/// renders without a decimal point (`5`, not `5.0`). The change sign is a
/// literal `+`: only upward moves can qualify.
pub fn format_swings(swings: &[SwingEvent], threshold_pct: f64) -> String {
    let mut lines = Vec::new();
    lines.push(format!("NAV swings > {threshold_pct}%:"));
    for event in swings {
        lines.push(format!(
            "{} | {} | {:.2} -> {:.2} | +{:.2}%",
            event.fund, event.date, event.prev_nav, event.curr_nav, event.change_pct
        ));
    }
    lines.join("\n")
}

fn rate_line(entry: &CagrEntry) -> String {
    format!("{}: {:.2}%", entry.fund, entry.rate * 100.0)
}
