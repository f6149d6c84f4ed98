//! TUI rendering for greenforest types.
//!
//! Extension traits and grid renderers that add colored terminal output to
//! greenforest-core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use greenforest_core::ledger::{self, Availability};
use greenforest_core::month_grid::{DayCell, Month, MonthGrid, WEEKDAY_HEADERS, is_today};
use greenforest_core::{Event, EventStatus, LocationPartner, MakeupArtist, Resource, ThemeItem};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let badge = format!("[{}]", self.label());
        match self {
            EventStatus::Upcoming => badge.green().to_string(),
            EventStatus::Completed | EventStatus::Cancelled => badge.dimmed().to_string(),
        }
    }
}

impl Render for Availability {
    fn render(&self) -> String {
        let badge = format!("[{}]", self.label());
        match self {
            Availability::Available => badge.green().to_string(),
            Availability::Borrowed => badge.red().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let when = self.date.replacen('T', " ", 1);
        format!(
            "{} {} {} {}",
            self.status.render(),
            self.to_string().bold(),
            when.dimmed(),
            format!("@ {}", self.location).dimmed()
        )
    }
}

impl Render for Resource {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}/{} {}",
            self.category.emoji(),
            self.name.bold(),
            self.available_quantity,
            self.total_quantity,
            ledger::availability(self).render()
        );
        if let Some(code) = &self.item_code {
            line.push_str(&format!(" {}", format!("#{}", code).cyan()));
        }
        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("📍{}", location).dimmed()));
        }
        line
    }
}

impl Render for ThemeItem {
    fn render(&self) -> String {
        let mut line = self.title.bold().to_string();
        if !self.recommend_location.is_empty() {
            line.push_str(&format!(" {}", format!("📍{}", self.recommend_location).dimmed()));
        }
        line
    }
}

impl Render for LocationPartner {
    fn render(&self) -> String {
        let mut line = self.name.bold().to_string();
        if !self.style.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.style).cyan()));
        }
        if !self.address.is_empty() {
            line.push_str(&format!(" {}", self.address.dimmed()));
        }
        line
    }
}

impl Render for MakeupArtist {
    fn render(&self) -> String {
        let mut line = self.name.bold().to_string();
        if !self.base_location.is_empty() {
            line.push_str(&format!(" {}", format!("📍{}", self.base_location).dimmed()));
        }
        if !self.rates.is_empty() {
            line.push_str(&format!(" {}", self.rates.yellow()));
        }
        line
    }
}

/// Plain text of one grid cell, five columns wide.
fn cell_text(day: u32, marker: char) -> String {
    format!("{:>3}{} ", day, marker)
}

const BLANK_CELL: &str = "     ";

/// Render a month grid with the shared weekday header. `style` colors a day
/// cell given its plain text and whether it is today.
fn render_grid<T, F>(grid: &MonthGrid<'_, T>, today: NaiveDate, style: F) -> String
where
    F: Fn(&DayCell<'_, T>, String, bool) -> String,
{
    let month = grid.month();
    let mut lines = vec![format!("  {}", month.label().bold())];

    let header: String = WEEKDAY_HEADERS.iter().map(|h| format!("  {} ", h)).collect();
    lines.push(header.dimmed().to_string());

    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell.day() {
                None => BLANK_CELL.to_string(),
                Some(day) => {
                    let marker = if cell.is_empty() { ' ' } else { '•' };
                    style(cell, cell_text(day, marker), is_today(today, month, day))
                }
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}

/// The schedule: a grid with busy days highlighted, followed by each busy
/// day's events.
pub fn render_schedule(grid: &MonthGrid<'_, Event>, today: NaiveDate) -> String {
    let mut out = render_grid(grid, today, |cell, text, today| {
        let text = if cell.is_empty() {
            text
        } else {
            text.green().to_string()
        };
        if today {
            text.reversed().to_string()
        } else {
            text
        }
    });

    let month = grid.month();
    let mut busy = grid.busy_days().peekable();
    if busy.peek().is_none() {
        out.push_str(&format!("\n\n   {}", "本月暂无活动".dimmed()));
        return out;
    }

    for (day, events) in busy {
        out.push_str(&format!("\n\n   {}", day_heading(month, day).bold()));
        for event in events {
            let time = event.time_label().unwrap_or("--:--");
            out.push_str(&format!(
                "\n      {} {} {}",
                time.dimmed(),
                event,
                format!("@ {}", event.location).dimmed()
            ));
        }
    }

    out
}

/// A resource's booking calendar: booked days red, free days green.
pub fn render_bookings(grid: &MonthGrid<'_, Resource>, today: NaiveDate) -> String {
    render_grid(grid, today, |cell, text, today| {
        let text = if cell.is_empty() {
            text.green().to_string()
        } else {
            text.red().to_string()
        };
        if today {
            text.underline().to_string()
        } else {
            text
        }
    })
}

fn day_heading(month: Month, day: u32) -> String {
    let weekday = month
        .date(day)
        .map(|d| WEEKDAY_HEADERS[d.weekday().num_days_from_sunday() as usize])
        .unwrap_or("");
    format!("{}月{}日 周{}", month.month(), day, weekday)
}
