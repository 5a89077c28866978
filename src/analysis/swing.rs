//! Day-over-day swing detection.

use rayon::prelude::*;

use crate::domain::{Observation, SwingEvent};

use super::fund_series;

/// Collect upward jumps strictly above `threshold_pct` between adjacent rows
/// of each fund's series.
///
/// "Adjacent" means neighboring rows in date order; a publishing gap between
/// the two dates does not disqualify the pair. The change is
/// `(curr - prev) / prev * 100`, so drops come out negative and never
/// qualify. A pair whose earlier NAV is zero is skipped outright since the
/// change is undefined.
///
/// Events arrive in fund, then date order (the table's order); there is no
/// global re-sort by magnitude or date.
pub fn detect_swings(rows: &[Observation], threshold_pct: f64) -> Vec<SwingEvent> {
    let series = fund_series(rows);

    // Scan each fund independently (parallel); flattening the per-fund
    // results afterwards preserves table order.
    let per_fund: Vec<Vec<SwingEvent>> = series
        .par_iter()
        .map(|series| scan_series(series.rows, threshold_pct))
        .collect();

    per_fund.into_iter().flatten().collect()
}

fn scan_series(rows: &[Observation], threshold_pct: f64) -> Vec<SwingEvent> {
    let mut events = Vec::new();
    for pair in rows.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev.nav == 0.0 {
            continue;
        }
        let change_pct = (curr.nav - prev.nav) / prev.nav * 100.0;
        if change_pct > threshold_pct {
            events.push(SwingEvent {
                fund: curr.fund.clone(),
                date: curr.date,
                prev_nav: prev.nav,
                curr_nav: curr.nav,
                change_pct,
            });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn obs(fund: &str, day: u32, nav: f64) -> Observation {
        Observation {
            fund: fund.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            nav,
        }
    }

    #[test]
    fn threshold_is_strict() {
        // Exactly 5% is not an event; a hair above is.
        let at = vec![obs("A", 1, 100.0), obs("A", 2, 105.0)];
        assert!(detect_swings(&at, 5.0).is_empty());

        let above = vec![obs("A", 1, 100.0), obs("A", 2, 105.01)];
        let events = detect_swings(&above, 5.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!((events[0].change_pct - 5.01).abs() < 1e-9);
    }

    #[test]
    fn drops_never_qualify() {
        let rows = vec![obs("A", 1, 100.0), obs("A", 2, 80.0)];
        assert!(detect_swings(&rows, 5.0).is_empty());
    }

    #[test]
    fn zero_previous_nav_is_skipped() {
        let rows = vec![obs("A", 1, 0.0), obs("A", 2, 50.0), obs("A", 3, 60.0)];
        let events = detect_swings(&rows, 5.0);
        // Only the 50 -> 60 pair is well defined.
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].prev_nav, 50.0);
        assert_eq!(events[0].curr_nav, 60.0);
        assert!((events[0].change_pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn publishing_gaps_do_not_split_pairs() {
        let rows = vec![
            obs("A", 1, 100.0),
            // Two weeks later, still an adjacent pair.
            obs("A", 15, 110.0),
        ];
        let events = detect_swings(&rows, 5.0);
        assert_eq!(events.len(), 1);
        assert!((events[0].change_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn pairs_never_span_funds() {
        // Alpha ends at 100, Beta starts at 200; that boundary is not a pair.
        let rows = vec![
            obs("Alpha", 1, 100.0),
            obs("Alpha", 2, 100.0),
            obs("Beta", 1, 200.0),
            obs("Beta", 2, 200.0),
        ];
        assert!(detect_swings(&rows, 5.0).is_empty());
    }

    #[test]
    fn events_keep_fund_then_date_order() {
        let rows = vec![
            obs("Alpha", 1, 100.0),
            obs("Alpha", 2, 110.0),
            obs("Alpha", 3, 125.0),
            obs("Beta", 1, 10.0),
            obs("Beta", 2, 11.0),
        ];

        let events = detect_swings(&rows, 5.0);
        let order: Vec<(&str, u32)> = events
            .iter()
            .map(|e| (e.fund.as_str(), e.date.day()))
            .collect();
        assert_eq!(order, vec![("Alpha", 2), ("Alpha", 3), ("Beta", 2)]);
    }

    #[test]
    fn event_carries_both_navs() {
        let rows = vec![obs("A", 1, 40.0), obs("A", 2, 44.0)];
        let events = detect_swings(&rows, 5.0);
        assert_eq!(events.len(), 1);
        let e = &events[0];
        assert_eq!(e.fund, "A");
        assert_eq!(e.prev_nav, 40.0);
        assert_eq!(e.curr_nav, 44.0);
    }
}
