//! Availability ledger for resources.
//!
//! Every operation takes a resource and returns the updated copy; persisting
//! it is the caller's job (see `Studio`). None of them can fail.
//!
//! Two counters and one date set are tracked independently:
//! - `total_quantity` is how many units exist (at least 1)
//! - `available_quantity` drives the available/borrowed badge and is set by
//!   hand; it is never recomputed from bookings
//! - `booked_dates` marks days the resource is committed, for the resource as
//!   a whole rather than per unit

use chrono::{Datelike, NaiveDate};

use crate::model::Resource;

/// Badge shown on resource cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Borrowed,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "可用",
            Availability::Borrowed => "借出",
        }
    }

    /// Longer wording used on the detail view.
    pub fn detail_label(&self) -> &'static str {
        match self {
            Availability::Available => "目前可用",
            Availability::Borrowed => "暂时借出",
        }
    }
}

/// Book `date` if it is free, release it if it is booked.
pub fn toggle_booking(resource: &Resource, date: NaiveDate) -> Resource {
    let mut updated = resource.clone();
    if !updated.booked_dates.remove(&date) {
        updated.booked_dates.insert(date);
    }
    updated
}

/// Set how many units exist. Totals below 1 are raised to 1, and the
/// available count is lowered if it would exceed the new total.
pub fn set_quantity(resource: &Resource, total: u32) -> Resource {
    let total = total.max(1);
    Resource {
        total_quantity: total,
        available_quantity: resource.available_quantity.min(total),
        ..resource.clone()
    }
}

/// Set how many units are on the shelf, capped at the total.
pub fn set_available(resource: &Resource, available: u32) -> Resource {
    Resource {
        available_quantity: available.min(resource.total_quantity),
        ..resource.clone()
    }
}

/// Replace the storage location. Blank text clears it.
pub fn update_location(resource: &Resource, text: &str) -> Resource {
    let location = Some(text.trim().to_string()).filter(|t| !t.is_empty());
    Resource {
        location,
        ..resource.clone()
    }
}

pub fn availability(resource: &Resource) -> Availability {
    if resource.available_quantity > 0 {
        Availability::Available
    } else {
        Availability::Borrowed
    }
}

pub fn is_booked(resource: &Resource, date: NaiveDate) -> bool {
    resource.booked_dates.contains(&date)
}

/// Booked days within the given month, ascending.
pub fn booked_in_month(resource: &Resource, year: i32, month: u32) -> Vec<NaiveDate> {
    resource
        .booked_dates
        .iter()
        .filter(|d| d.year() == year && d.month() == month)
        .copied()
        .collect()
}
