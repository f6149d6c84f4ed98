use serde::{Deserialize, Serialize};

use crate::utils::new_id;

/// A makeup artist the collective works with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MakeupArtist {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub base_location: String,
    pub rates: String,
    /// What has to be returned after a shoot (kits, lashes, ...).
    pub return_requirements: String,
    pub portfolio_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MakeupArtist {
    pub fn new(name: impl Into<String>) -> Self {
        MakeupArtist {
            id: new_id(),
            name: name.into(),
            ..Default::default()
        }
    }
}
