//! Records kept by the collective.
//!
//! Every record serializes to the camelCase JSON layout the collections have
//! always been stored in. Fields added over time deserialize to defaults so
//! older saved data keeps loading.

pub mod artist;
pub mod event;
pub mod location;
pub mod resource;
pub mod theme;

pub use artist::MakeupArtist;
pub use event::{Event, EventStatus, RequiredResource};
pub use location::LocationPartner;
pub use resource::{AspectRatio, Resource, ResourceCategory};
pub use theme::{ThemeItem, ThemePlan};
