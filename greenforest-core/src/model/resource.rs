//! Physical resources: costumes, makeup kits, props and accessories.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::media;
use crate::utils::new_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceCategory {
    Costume,
    Makeup,
    Prop,
    Accessory,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Costume,
        ResourceCategory::Makeup,
        ResourceCategory::Prop,
        ResourceCategory::Accessory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Costume => "服装",
            ResourceCategory::Makeup => "化妆",
            ResourceCategory::Prop => "道具",
            ResourceCategory::Accessory => "饰品",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ResourceCategory::Costume => "👗",
            ResourceCategory::Makeup => "💄",
            ResourceCategory::Prop => "🎬",
            ResourceCategory::Accessory => "💍",
        }
    }

    /// Only costumes carry an inventory code.
    pub fn has_item_code(&self) -> bool {
        matches!(self, ResourceCategory::Costume)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ResourceCategory::Costume => "costume",
            ResourceCategory::Makeup => "makeup",
            ResourceCategory::Prop => "prop",
            ResourceCategory::Accessory => "accessory",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "costume" | "costumes" => Ok(ResourceCategory::Costume),
            "makeup" => Ok(ResourceCategory::Makeup),
            "prop" | "props" => Ok(ResourceCategory::Prop),
            "accessory" | "accessories" => Ok(ResourceCategory::Accessory),
            other => Err(format!(
                "Unknown category '{}'. Expected costume, makeup, prop or accessory",
                other
            )),
        }
    }
}

/// Display orientation for a resource's photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 16:9
    Video,
    /// 3:4
    Portrait,
    /// 1:1
    #[default]
    Square,
}

/// A trackable physical item with a finite quantity.
///
/// `booked_dates` records occupancy per day for the resource as a whole, not
/// per unit: with `total_quantity > 1` a booked day does not say how many
/// units are out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: ResourceCategory,
    #[serde(default)]
    pub description: String,

    /// Legacy single image; `images` is preferred when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub display_aspect: AspectRatio,

    pub total_quantity: u32,
    pub available_quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,

    #[serde(default)]
    pub booked_dates: BTreeSet<NaiveDate>,
}

impl Resource {
    /// New resource with every unit available and no booked dates.
    /// A total below 1 is raised to 1.
    pub fn new(name: impl Into<String>, category: ResourceCategory, total_quantity: u32) -> Self {
        let total = total_quantity.max(1);
        Resource {
            id: new_id(),
            name: name.into(),
            category,
            description: String::new(),
            image_url: None,
            images: Vec::new(),
            display_aspect: AspectRatio::default(),
            total_quantity: total,
            available_quantity: total,
            location: None,
            item_code: None,
            booked_dates: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Ignored for categories other than costume.
    pub fn with_item_code(mut self, item_code: Option<String>) -> Self {
        self.item_code = item_code.filter(|_| self.category.has_item_code());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Give a resource added without photos a stock cover.
    pub fn with_placeholder_cover(mut self, seed: i64) -> Self {
        if self.images.is_empty() && self.image_url.is_none() {
            self.image_url = Some(media::placeholder_image(200, 200, seed));
        }
        self
    }

    /// The image shown on cards: first of `images`, else the legacy `image_url`.
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.image_url.as_deref())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
