//! Photography events.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_non_empty, new_id};

/// Time of day given to events created from the schedule.
pub const QUICK_ADD_TIME: &str = "09:00";

/// Location placeholder for events created from the schedule.
pub const LOCATION_TBD: &str = "待定";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Board badge: open for sign-up, or over.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "报名中",
            EventStatus::Completed | EventStatus::Cancelled => "已结束",
        }
    }
}

/// A resource an event intends to use. Recorded only: it never books or
/// decrements the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredResource {
    pub resource_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO datetime as entered, e.g. `2024-05-10T09:00`.
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub status: EventStatus,

    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub stage_manager: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_count: Option<u32>,

    #[serde(default)]
    pub required_resources: Vec<RequiredResource>,
}

impl Event {
    /// Event published from the event board.
    pub fn new_board_event(
        title: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        stage_manager: Option<String>,
    ) -> Self {
        Event {
            id: new_id(),
            title: title.into(),
            date: date.into(),
            location: location.into(),
            description: description.into(),
            status: EventStatus::Upcoming,
            stage_manager,
            organizer: None,
            model_count: None,
            required_resources: Vec::new(),
        }
    }

    /// Event added from a day cell of the schedule.
    pub fn new_quick_event(
        day: NaiveDate,
        organizer: impl Into<String>,
        theme: impl Into<String>,
        model_count: u32,
    ) -> Self {
        let organizer = organizer.into();
        Event {
            id: new_id(),
            title: theme.into(),
            date: format!("{}T{}", day.format("%Y-%m-%d"), QUICK_ADD_TIME),
            location: LOCATION_TBD.to_string(),
            description: format!("组织者: {}\n预计模特: {}人", organizer, model_count),
            status: EventStatus::Upcoming,
            stage_manager: None,
            organizer: Some(organizer),
            model_count: Some(model_count),
            required_resources: Vec::new(),
        }
    }

    /// Whether the event's calendar-day prefix is `key` (`YYYY-MM-DD`).
    pub fn falls_on(&self, key: &str) -> bool {
        self.date.starts_with(key)
    }

    pub fn day(&self) -> Option<NaiveDate> {
        let prefix = self.date.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// `HH:MM` part of the date, when present.
    pub fn time_label(&self) -> Option<&str> {
        self.date.get(11..16).filter(|t| t.contains(':'))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "无主题")
        } else {
            write!(f, "{}", self.title)
        }
    }
}
