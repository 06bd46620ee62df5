use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::models::ActivityRecord;

/// Days covered by the graph, ending today inclusive.
pub const WINDOW_DAYS: usize = 365;

/// Week columns in the rendered grid; the last column holds the remainder.
pub const WEEK_COLUMNS: usize = WINDOW_DAYS.div_ceil(7);

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: Date,
    pub count: u32,
    /// Intensity bucket, 0 through 4.
    pub level: u8,
}

impl HeatmapCell {
    /// Read projection for the hover tooltip; no state is touched.
    pub fn tooltip(&self) -> String {
        let noun = if self.count == 1 { "question" } else { "questions" };
        format!("{}: {} {}", iso_date(self.date), self.count, noun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    /// Oldest week first, oldest day first within each week.
    pub weeks: Vec<Vec<HeatmapCell>>,
    /// One label slot per week column; empty string when unlabeled.
    pub month_labels: Vec<String>,
}

/// Intensity bucket for a daily count.
pub fn level(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2 => 2,
        3 | 4 => 3,
        _ => 4,
    }
}

pub fn iso_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// Today according to the local clock, falling back to UTC when the local
/// offset cannot be determined.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Derives the renderable grid from a sparse activity record.
///
/// Generates exactly 365 consecutive days ending at `today` inclusive,
/// oldest first, and chunks them into weeks of 7 in generation order. The
/// first week intentionally need not align to a calendar week boundary;
/// rendered output depends on this ordering, so it must not change.
pub fn derive_heatmap(activity: &ActivityRecord, today: Date) -> Heatmap {
    let start = today.saturating_sub(Duration::days(WINDOW_DAYS as i64 - 1));

    let mut weeks: Vec<Vec<HeatmapCell>> = Vec::with_capacity(WEEK_COLUMNS);
    let mut day = start;
    for i in 0..WINDOW_DAYS {
        if i % 7 == 0 {
            weeks.push(Vec::with_capacity(7));
        }
        let count = activity.get(&iso_date(day)).copied().unwrap_or(0);
        if let Some(week) = weeks.last_mut() {
            week.push(HeatmapCell {
                date: day,
                count,
                level: level(count),
            });
        }
        day = day.saturating_add(Duration::DAY);
    }

    let month_labels = weeks
        .iter()
        .enumerate()
        .map(|(index, week)| month_label(week, index))
        .collect();

    Heatmap { weeks, month_labels }
}

/// A week column is labeled when its first day falls within the first seven
/// days of its month, or when it is the very first column.
fn month_label(week: &[HeatmapCell], index: usize) -> String {
    match week.first() {
        Some(first) if first.date.day() <= 7 || index == 0 => {
            short_month(first.date.month()).to_string()
        }
        _ => String::new(),
    }
}

pub fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
