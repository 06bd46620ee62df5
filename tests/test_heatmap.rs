//! Tests for the activity heatmap deriver.
//!
//! Tests cover:
//! - Grid shape (53 week columns, 365 day cells, generation order)
//! - Intensity level thresholds
//! - Month label placement
//! - Determinism and input immutability
//! - The tooltip read projection

mod common;

use common::*;
use dsa_sheet::heatmap::{WEEK_COLUMNS, WINDOW_DAYS, derive_heatmap, iso_date, level};
use time::macros::date;

fn activity_of(entries: &[(&str, u32)]) -> ActivityRecord {
    entries
        .iter()
        .map(|(date, count)| (date.to_string(), *count))
        .collect()
}

#[test]
fn test_grid_shape() {
    let heatmap = derive_heatmap(&ActivityRecord::new(), date!(2024 - 06 - 02));

    // 1. Always 53 week columns and 365 cells in total
    assert_eq!(heatmap.weeks.len(), WEEK_COLUMNS);
    let total: usize = heatmap.weeks.iter().map(Vec::len).sum();
    assert_eq!(total, WINDOW_DAYS);

    // 2. Full weeks of 7 except the trailing remainder column
    for week in &heatmap.weeks[..WEEK_COLUMNS - 1] {
        assert_eq!(week.len(), 7);
    }
    assert_eq!(heatmap.weeks[WEEK_COLUMNS - 1].len(), 1);

    // 3. Oldest first, ending at `today` inclusive
    assert_eq!(heatmap.weeks[0][0].date, date!(2023 - 06 - 04));
    assert_eq!(heatmap.weeks[WEEK_COLUMNS - 1][0].date, date!(2024 - 06 - 02));
    let mut previous = None;
    for cell in heatmap.weeks.iter().flatten() {
        if let Some(previous) = previous {
            assert_eq!(cell.date, previous + time::Duration::DAY);
        }
        previous = Some(cell.date);
    }

    // One label slot per week column
    assert_eq!(heatmap.month_labels.len(), WEEK_COLUMNS);
}

#[test]
fn test_level_thresholds() {
    assert_eq!(level(0), 0);
    assert_eq!(level(1), 1);
    assert_eq!(level(2), 2);
    assert_eq!(level(3), 3);
    assert_eq!(level(4), 3);
    assert_eq!(level(5), 4);
    assert_eq!(level(120), 4);
}

#[test]
fn test_recent_activity_scenario() {
    let activity = activity_of(&[("2024-06-01", 3), ("2024-06-02", 6)]);
    let heatmap = derive_heatmap(&activity, date!(2024 - 06 - 02));

    let cells: Vec<_> = heatmap.weeks.iter().flatten().collect();
    assert_eq!(cells.len(), WINDOW_DAYS);

    // The two most recent cells carry the recorded counts
    assert_eq!(cells[WINDOW_DAYS - 2].date, date!(2024 - 06 - 01));
    assert_eq!(cells[WINDOW_DAYS - 2].count, 3);
    assert_eq!(cells[WINDOW_DAYS - 2].level, 3);
    assert_eq!(cells[WINDOW_DAYS - 1].date, date!(2024 - 06 - 02));
    assert_eq!(cells[WINDOW_DAYS - 1].count, 6);
    assert_eq!(cells[WINDOW_DAYS - 1].level, 4);

    // Every other day has no entry and stays at level 0
    for cell in &cells[..WINDOW_DAYS - 2] {
        assert_eq!(cell.count, 0);
        assert_eq!(cell.level, 0);
    }
}

#[test]
fn test_month_labels() {
    let heatmap = derive_heatmap(&ActivityRecord::new(), date!(2024 - 06 - 02));

    // The very first column is always labeled, here with its start month
    assert_eq!(heatmap.month_labels[0], "Jun");
    // Week 1 starts 2023-06-11, past the first seven days of June
    assert_eq!(heatmap.month_labels[1], "");
    // Week 4 starts 2023-07-02, within the first seven days of July
    assert_eq!(heatmap.weeks[4][0].date, date!(2023 - 07 - 02));
    assert_eq!(heatmap.month_labels[4], "Jul");

    // Labels only ever appear on columns whose first day is early in its
    // month (or on the first column)
    for (index, label) in heatmap.month_labels.iter().enumerate() {
        let first = &heatmap.weeks[index][0];
        if !label.is_empty() {
            assert!(first.date.day() <= 7 || index == 0);
        }
    }
}

#[test]
fn test_deterministic_and_non_mutating() {
    let activity = activity_of(&[("2024-05-30", 1), ("2024-06-02", 9)]);
    let before = activity.clone();

    let first = derive_heatmap(&activity, date!(2024 - 06 - 02));
    let second = derive_heatmap(&activity, date!(2024 - 06 - 02));

    assert_eq!(first, second);
    assert_eq!(activity, before);
}

#[test]
fn test_tooltip_projection() {
    let activity = activity_of(&[("2024-06-01", 1), ("2024-06-02", 6)]);
    let heatmap = derive_heatmap(&activity, date!(2024 - 06 - 02));
    let cells: Vec<_> = heatmap.weeks.iter().flatten().collect();

    assert_eq!(cells[WINDOW_DAYS - 2].tooltip(), "2024-06-01: 1 question");
    assert_eq!(cells[WINDOW_DAYS - 1].tooltip(), "2024-06-02: 6 questions");
    assert_eq!(iso_date(date!(2024 - 01 - 09)), "2024-01-09");
}
