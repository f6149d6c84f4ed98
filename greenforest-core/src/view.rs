//! What the view layer is currently showing.

use chrono::NaiveDate;

/// One mode at a time: a list, a creation form, a detail view, or the
/// schedule's quick-add form for a day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Creating,
    ViewingResource(String),
    ViewingEvent(String),
    QuickAdd(NaiveDate),
}

impl ViewMode {
    pub fn selected_resource(&self) -> Option<&str> {
        match self {
            ViewMode::ViewingResource(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_event(&self) -> Option<&str> {
        match self {
            ViewMode::ViewingEvent(id) => Some(id),
            _ => None,
        }
    }

    pub fn quick_add_day(&self) -> Option<NaiveDate> {
        match self {
            ViewMode::QuickAdd(day) => Some(*day),
            _ => None,
        }
    }
}
