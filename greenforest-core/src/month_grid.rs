//! Month grids for calendar views.
//!
//! A grid is Sunday-first: leading blank cells for the weekdays before the
//! 1st, then one cell per day. Each day cell collects the records whose date
//! falls on it, in the order of the source collection. The schedule and the
//! resource detail view both build their grids here so their weekday columns
//! always agree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::model::{Event, Resource};

pub const WEEKDAY_HEADERS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in `month` of `year` (Gregorian). 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Bucket key for a day: `YYYY-MM-DD`, zero padded.
pub fn day_key(year: i32, month: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Highlight check for the schedule. Compares day and month only, so the
/// same date in another year also counts as today.
pub fn is_today(today: NaiveDate, month: Month, day: u32) -> bool {
    today.day() == day && today.month() == month.month()
}

/// A calendar month (year + month 1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Month { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Month { year: self.year + 1, month: 1 }
        } else {
            Month { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Month { year: self.year - 1, month: 12 }
        } else {
            Month { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_weekday(&self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn day_key(&self, day: u32) -> String {
        day_key(self.year, self.month, day)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Heading in the schedule's style, e.g. `2024年 2月`.
    pub fn label(&self) -> String {
        format!("{}年 {}月", self.year, self.month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = String;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}'. Expected YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq)]
pub enum DayCell<'a, T> {
    /// Padding before the 1st.
    Blank,
    Day {
        day: u32,
        key: String,
        entries: Vec<&'a T>,
    },
}

impl<'a, T> DayCell<'a, T> {
    pub fn day(&self) -> Option<u32> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn entries(&self) -> &[&'a T] {
        match self {
            DayCell::Blank => &[],
            DayCell::Day { entries, .. } => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid<'a, T> {
    month: Month,
    cells: Vec<DayCell<'a, T>>,
}

impl<'a, T> MonthGrid<'a, T> {
    /// Lay out `month` and put each record in every day for which
    /// `matches(record, day_key)` holds.
    pub fn build<F>(month: Month, records: &'a [T], matches: F) -> Self
    where
        F: Fn(&T, &str) -> bool,
    {
        let blanks = month.first_weekday();
        let days = month.days();

        let mut cells = Vec::with_capacity((blanks + days) as usize);
        cells.extend((0..blanks).map(|_| DayCell::Blank));

        for day in 1..=days {
            let key = month.day_key(day);
            let entries = records.iter().filter(|r| matches(r, &key)).collect();
            cells.push(DayCell::Day { day, key, entries });
        }

        MonthGrid { month, cells }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn cells(&self) -> &[DayCell<'a, T>] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Weeks of seven cells; the last week may be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell<'a, T>]> {
        self.cells.chunks(7)
    }

    /// Records bucketed on `day` (1-based).
    pub fn entries_on(&self, day: u32) -> &[&'a T] {
        self.cells
            .iter()
            .find(|c| c.day() == Some(day))
            .map(DayCell::entries)
            .unwrap_or(&[])
    }

    /// Days that have at least one record, with their records.
    pub fn busy_days(&self) -> impl Iterator<Item = (u32, &[&'a T])> {
        self.cells
            .iter()
            .filter_map(|c| c.day().map(|d| (d, c.entries())))
            .filter(|(_, entries)| !entries.is_empty())
    }
}

impl<'a> MonthGrid<'a, Event> {
    /// Schedule grid: events land on the day their date starts with.
    pub fn for_events(month: Month, events: &'a [Event]) -> Self {
        Self::build(month, events, |event, key| event.falls_on(key))
    }
}

impl<'a> MonthGrid<'a, Resource> {
    /// Booking grid for one resource: a day holds the resource when it is booked.
    pub fn for_bookings(month: Month, resource: &'a Resource) -> Self {
        Self::build(month, std::slice::from_ref(resource), |r, key| {
            NaiveDate::parse_from_str(key, "%Y-%m-%d")
                .is_ok_and(|date| r.booked_dates.contains(&date))
        })
    }

    pub fn is_booked(&self, day: u32) -> bool {
        !self.entries_on(day).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::toggle_booking;
    use crate::model::ResourceCategory;

    fn month(y: i32, m: u32) -> Month {
        Month::new(y, m).unwrap()
    }

    fn event_on(title: &str, date: &str) -> Event {
        Event::new_board_event(title, date, "森林公园", "", None)
    }

    #[test]
    fn days_in_month_follows_gregorian_calendar() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2024-02-01 was a Thursday, 2024-09-01 a Sunday
        assert_eq!(first_weekday(2024, 2), 4);
        assert_eq!(first_weekday(2024, 9), 0);
        assert_eq!(first_weekday(2024, 6), 6);
    }

    #[test]
    fn cell_count_is_blanks_plus_days() {
        let none: [Event; 0] = [];
        for year in [1999, 2000, 2023, 2024, 2100] {
            for m in 1..=12 {
                let grid = MonthGrid::for_events(month(year, m), &none);
                let expected = (first_weekday(year, m) + days_in_month(year, m)) as usize;
                assert_eq!(grid.cell_count(), expected, "{}-{}", year, m);
                assert!(grid.cells()[..first_weekday(year, m) as usize]
                    .iter()
                    .all(|c| *c == DayCell::Blank));
            }
        }
    }

    #[test]
    fn leap_february_has_clickable_29th() {
        let none: [Event; 0] = [];
        let grid = MonthGrid::for_events(month(2024, 2), &none);

        let days: Vec<u32> = grid.cells().iter().filter_map(DayCell::day).collect();
        assert_eq!(days.len(), 29);
        assert_eq!(grid.cell_count(), 4 + 29);
        assert!(matches!(
            grid.cells().last(),
            Some(DayCell::Day { day: 29, key, .. }) if key == "2024-02-29"
        ));
    }

    #[test]
    fn same_day_events_keep_insertion_order() {
        let events = vec![
            event_on("afternoon", "2024-05-10T14:00"),
            event_on("morning", "2024-05-10T09:00"),
        ];
        let grid = MonthGrid::for_events(month(2024, 5), &events);

        let titles: Vec<_> = grid.entries_on(10).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["afternoon", "morning"]);
    }

    #[test]
    fn bucketing_is_exhaustive_and_disjoint() {
        let events = vec![
            event_on("a", "2024-05-01T09:00"),
            event_on("b", "2024-05-10T09:00"),
            event_on("c", "2024-05-10T14:00"),
            event_on("d", "2024-05-31T23:59"),
            event_on("outside-before", "2024-04-30T09:00"),
            event_on("outside-after", "2024-06-01T00:00"),
            event_on("other-year", "2023-05-10T09:00"),
        ];
        let grid = MonthGrid::for_events(month(2024, 5), &events);

        for event in &events {
            let hits = grid
                .cells()
                .iter()
                .filter(|c| c.entries().iter().any(|e| e.id == event.id))
                .count();
            let in_month = event.date.starts_with("2024-05");
            assert_eq!(hits, usize::from(in_month), "{}", event.title);
        }
    }

    #[test]
    fn busy_days_lists_only_days_with_events() {
        let events = vec![
            event_on("a", "2024-05-03T09:00"),
            event_on("b", "2024-05-20T09:00"),
        ];
        let grid = MonthGrid::for_events(month(2024, 5), &events);

        let days: Vec<u32> = grid.busy_days().map(|(d, _)| d).collect();
        assert_eq!(days, vec![3, 20]);
    }

    #[test]
    fn rows_are_weeks_of_seven() {
        let none: [Event; 0] = [];
        let grid = MonthGrid::for_events(month(2024, 2), &none);
        let rows: Vec<_> = grid.rows().collect();

        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|r| r.len() == 7));
        assert_eq!(rows[4].len(), 33 - 28);
    }

    #[test]
    fn booking_grid_marks_booked_days() {
        let mut r = Resource::new("复古手提箱", ResourceCategory::Prop, 1);
        r = toggle_booking(&r, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        r = toggle_booking(&r, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());

        let grid = MonthGrid::for_bookings(month(2024, 3), &r);
        assert!(grid.is_booked(10));
        assert!(!grid.is_booked(11));
        assert_eq!(grid.busy_days().count(), 1);
    }

    #[test]
    fn is_today_ignores_year() {
        let today = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        assert!(is_today(today, month(2023, 5), 10));
        assert!(!is_today(today, month(2023, 5), 11));
        assert!(!is_today(today, month(2023, 6), 10));

        // Flagged behavior: the same day and month a year later still matches.
        assert!(is_today(today, month(2024, 5), 10));
    }

    #[test]
    fn month_navigation_wraps_years() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2024, 1).prev(), month(2023, 12));
        assert_eq!(month(2024, 6).next().prev(), month(2024, 6));
    }

    #[test]
    fn month_parses_and_displays() {
        assert_eq!("2024-02".parse::<Month>(), Ok(month(2024, 2)));
        assert_eq!("2024-2".parse::<Month>(), Ok(month(2024, 2)));
        assert!("2024-13".parse::<Month>().is_err());
        assert!("february".parse::<Month>().is_err());
        assert_eq!(month(2024, 2).to_string(), "2024-02");
        assert_eq!(month(2024, 2).label(), "2024年 2月");
        assert_eq!(month(2024, 2).day_key(9), "2024-02-09");
    }
}
