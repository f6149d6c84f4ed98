//! The five stored collections and their seed data.

use chrono::{Duration, Utc};

use tracing::warn;

use super::Collection;
use crate::ledger;
use crate::model::{
    Event, EventStatus, LocationPartner, MakeupArtist, Resource, ResourceCategory, ThemePlan,
};

pub struct Events;
pub struct Resources;
pub struct ThemePlans;
pub struct Locations;
pub struct Artists;

impl Collection for Events {
    type Item = Event;
    const KEY: &'static str = "gf_events";

    fn seed() -> Vec<Event> {
        let date = Utc::now() + Duration::days(3);
        vec![Event {
            id: "1".to_string(),
            title: "初夏森林写真".to_string(),
            date: date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            location: "奥林匹克森林公园北园".to_string(),
            description: "捕捉夏日的第一缕阳光，主打清新自然风格。".to_string(),
            status: EventStatus::Upcoming,
            stage_manager: None,
            organizer: None,
            model_count: None,
            required_resources: Vec::new(),
        }]
    }
}

impl Collection for Resources {
    type Item = Resource;
    const KEY: &'static str = "gf_resources";

    fn seed() -> Vec<Resource> {
        let mut uniform = Resource::new("日系学生制服(L)", ResourceCategory::Costume, 2)
            .with_description("深蓝色西装外套+格子裙")
            .with_location(Some("A区衣柜".to_string()))
            .with_item_code(Some("C-001".to_string()));
        uniform.id = "101".to_string();
        uniform.image_url = Some("https://picsum.photos/200/200?random=1".to_string());

        let mut suitcase = Resource::new("复古手提箱", ResourceCategory::Prop, 1)
            .with_description("棕色皮质，适合复古风")
            .with_location(Some("道具间B2".to_string()));
        suitcase.id = "102".to_string();
        suitcase.image_url = Some("https://picsum.photos/200/200?random=2".to_string());

        vec![uniform, suitcase]
    }

    fn repair(resource: Resource) -> Resource {
        let repaired = ledger::set_quantity(&resource, resource.total_quantity);
        if repaired != resource {
            warn!(
                resource = %resource.id,
                total = resource.total_quantity,
                available = resource.available_quantity,
                "stored quantities out of range, clamped"
            );
        }
        repaired
    }
}

impl Collection for ThemePlans {
    type Item = ThemePlan;
    const KEY: &'static str = "gf_themes";

    fn seed() -> Vec<ThemePlan> {
        vec![ThemePlan {
            month: 1,
            themes: Vec::new(),
        }]
    }
}

impl Collection for Locations {
    type Item = LocationPartner;
    const KEY: &'static str = "gf_locations";

    fn seed() -> Vec<LocationPartner> {
        Vec::new()
    }
}

impl Collection for Artists {
    type Item = MakeupArtist;
    const KEY: &'static str = "gf_makeup";

    fn seed() -> Vec<MakeupArtist> {
        Vec::new()
    }
}
