use serde::{Deserialize, Serialize};

use crate::media;
use crate::utils::new_id;

/// A venue the collective has a partnership with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationPartner {
    pub id: String,
    pub name: String,
    pub address: String,
    pub style: String,
    pub contact: String,
    pub cost: String,
    pub requirements: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub images: Vec<String>,
}

impl LocationPartner {
    pub fn new(name: impl Into<String>) -> Self {
        LocationPartner {
            id: new_id(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_placeholder_cover(mut self, seed: i64) -> Self {
        if self.images.is_empty() && self.image_url.is_none() {
            self.image_url = Some(media::placeholder_image(300, 200, seed));
        }
        self
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.image_url.as_deref())
    }
}
