//! The collective's in-memory collections, backed by a `Store`.
//!
//! `Studio` is handed to the view layer explicitly. Every accepted mutation
//! writes the one collection it changed straight away; operations that match
//! nothing change nothing and save nothing. Memory is only updated once the
//! save has gone through.

use chrono::NaiveDate;

use crate::error::StudioResult;
use crate::ledger;
use crate::model::theme;
use crate::model::{
    Event, LocationPartner, MakeupArtist, Resource, ResourceCategory, ThemeItem, ThemePlan,
};
use crate::month_grid::{Month, MonthGrid};
use crate::store::{Artists, Events, Locations, Resources, Store, ThemePlans};
use crate::view::ViewMode;

pub struct Studio {
    store: Store,
    events: Vec<Event>,
    resources: Vec<Resource>,
    theme_plans: Vec<ThemePlan>,
    locations: Vec<LocationPartner>,
    artists: Vec<MakeupArtist>,
    mode: ViewMode,
}

impl Studio {
    pub fn load(store: Store) -> Self {
        Studio {
            events: store.load::<Events>(),
            resources: store.load::<Resources>(),
            theme_plans: store.load::<ThemePlans>(),
            locations: store.load::<Locations>(),
            artists: store.load::<Artists>(),
            mode: ViewMode::List,
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // VIEW MODE:

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn begin_create(&mut self) {
        self.mode = ViewMode::Creating;
    }

    pub fn begin_quick_add(&mut self, day: NaiveDate) {
        self.mode = ViewMode::QuickAdd(day);
    }

    pub fn close(&mut self) {
        self.mode = ViewMode::List;
    }

    // EVENTS:

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn view_event(&mut self, id: &str) -> Option<&Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        self.mode = ViewMode::ViewingEvent(id.to_string());
        self.events.get(index)
    }

    pub fn add_event(&mut self, event: Event) -> StudioResult<()> {
        let events = appended(&self.events, event);
        self.store.save::<Events>(&events)?;
        self.events = events;
        self.close();
        Ok(())
    }

    /// Remove an event. Deleting an unknown id is a no-op returning false.
    pub fn delete_event(&mut self, id: &str) -> StudioResult<bool> {
        let Some(events) = without(&self.events, |e| e.id == id) else {
            return Ok(false);
        };

        self.store.save::<Events>(&events)?;
        self.events = events;
        if self.mode.selected_event() == Some(id) {
            self.close();
        }
        Ok(true)
    }

    pub fn schedule(&self, month: Month) -> MonthGrid<'_, Event> {
        MonthGrid::for_events(month, &self.events)
    }

    // RESOURCES:

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn resources_in(&self, category: ResourceCategory) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    pub fn add_resource(&mut self, resource: Resource) -> StudioResult<()> {
        let resources = appended(&self.resources, resource);
        self.store.save::<Resources>(&resources)?;
        self.resources = resources;
        self.close();
        Ok(())
    }

    /// Open a resource's detail view.
    pub fn select_resource(&mut self, id: &str) -> Option<&Resource> {
        let index = self.resources.iter().position(|r| r.id == id)?;
        self.mode = ViewMode::ViewingResource(id.to_string());
        self.resources.get(index)
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.mode.selected_resource().and_then(|id| self.resource(id))
    }

    pub fn booking_grid(&self, id: &str, month: Month) -> Option<MonthGrid<'_, Resource>> {
        self.resource(id)
            .map(|r| MonthGrid::for_bookings(month, r))
    }

    pub fn toggle_booking(&mut self, id: &str, date: NaiveDate) -> StudioResult<Option<&Resource>> {
        self.update_resource(id, |r| ledger::toggle_booking(r, date))
    }

    pub fn update_location(&mut self, id: &str, text: &str) -> StudioResult<Option<&Resource>> {
        self.update_resource(id, |r| ledger::update_location(r, text))
    }

    pub fn set_quantity(&mut self, id: &str, total: u32) -> StudioResult<Option<&Resource>> {
        self.update_resource(id, |r| ledger::set_quantity(r, total))
    }

    pub fn set_available(&mut self, id: &str, available: u32) -> StudioResult<Option<&Resource>> {
        self.update_resource(id, |r| ledger::set_available(r, available))
    }

    /// Remove a resource, leaving its detail view if it was open. Deleting an
    /// unknown id is a no-op returning false.
    pub fn delete_resource(&mut self, id: &str) -> StudioResult<bool> {
        let Some(resources) = without(&self.resources, |r| r.id == id) else {
            return Ok(false);
        };

        self.store.save::<Resources>(&resources)?;
        self.resources = resources;
        if self.mode.selected_resource() == Some(id) {
            self.close();
        }
        Ok(true)
    }

    fn update_resource<F>(&mut self, id: &str, change: F) -> StudioResult<Option<&Resource>>
    where
        F: FnOnce(&Resource) -> Resource,
    {
        let Some(index) = self.resources.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let mut resources = self.resources.clone();
        resources[index] = change(&self.resources[index]);
        self.store.save::<Resources>(&resources)?;
        self.resources = resources;
        Ok(self.resources.get(index))
    }

    // THEME PLANS:

    pub fn theme_plans(&self) -> &[ThemePlan] {
        &self.theme_plans
    }

    pub fn themes_for(&self, month: u32) -> &[ThemeItem] {
        theme::themes_for(&self.theme_plans, month)
    }

    /// Add a theme to `month`, or replace the one with the same id.
    /// Returns false for a month outside 1..=12.
    pub fn upsert_theme(&mut self, month: u32, item: ThemeItem) -> StudioResult<bool> {
        let Some(plans) = theme::upsert_theme(&self.theme_plans, month, item) else {
            return Ok(false);
        };

        self.store.save::<ThemePlans>(&plans)?;
        self.theme_plans = plans;
        self.close();
        Ok(true)
    }

    pub fn delete_theme(&mut self, month: u32, id: &str) -> StudioResult<bool> {
        let Some(plans) = theme::remove_theme(&self.theme_plans, month, id) else {
            return Ok(false);
        };

        self.store.save::<ThemePlans>(&plans)?;
        self.theme_plans = plans;
        Ok(true)
    }

    // PARTNERS:

    pub fn locations(&self) -> &[LocationPartner] {
        &self.locations
    }

    pub fn add_location(&mut self, location: LocationPartner) -> StudioResult<()> {
        let locations = appended(&self.locations, location);
        self.store.save::<Locations>(&locations)?;
        self.locations = locations;
        self.close();
        Ok(())
    }

    pub fn delete_location(&mut self, id: &str) -> StudioResult<bool> {
        let Some(locations) = without(&self.locations, |l| l.id == id) else {
            return Ok(false);
        };

        self.store.save::<Locations>(&locations)?;
        self.locations = locations;
        Ok(true)
    }

    pub fn artists(&self) -> &[MakeupArtist] {
        &self.artists
    }

    pub fn add_artist(&mut self, artist: MakeupArtist) -> StudioResult<()> {
        let artists = appended(&self.artists, artist);
        self.store.save::<Artists>(&artists)?;
        self.artists = artists;
        self.close();
        Ok(())
    }

    pub fn delete_artist(&mut self, id: &str) -> StudioResult<bool> {
        let Some(artists) = without(&self.artists, |a| a.id == id) else {
            return Ok(false);
        };

        self.store.save::<Artists>(&artists)?;
        self.artists = artists;
        Ok(true)
    }

    /// Drop one portfolio image (0-based). `None` when the artist or the
    /// image does not exist.
    pub fn remove_artist_image(
        &mut self,
        id: &str,
        index: usize,
    ) -> StudioResult<Option<&MakeupArtist>> {
        let Some(position) = self.artists.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        if index >= self.artists[position].portfolio_images.len() {
            return Ok(None);
        }

        let mut artists = self.artists.clone();
        artists[position].portfolio_images.remove(index);
        self.store.save::<Artists>(&artists)?;
        self.artists = artists;
        Ok(self.artists.get(position))
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// `items` minus the matching records, or `None` when nothing matched.
fn without<T: Clone>(items: &[T], matches: impl Fn(&T) -> bool) -> Option<Vec<T>> {
    let next: Vec<T> = items.iter().filter(|item| !matches(*item)).cloned().collect();
    (next.len() != items.len()).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequiredResource;

    fn studio() -> (tempfile::TempDir, Studio) {
        let dir = tempfile::tempdir().unwrap();
        let studio = Studio::load(Store::new(dir.path()));
        (dir, studio)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fresh_studio_starts_from_seed() {
        let (_dir, studio) = studio();
        assert_eq!(studio.events().len(), 1);
        assert_eq!(studio.resources().len(), 2);
        assert_eq!(studio.theme_plans().len(), 1);
        assert!(studio.locations().is_empty());
        assert!(studio.artists().is_empty());
        assert_eq!(studio.mode(), &ViewMode::List);
    }

    #[test]
    fn toggle_booking_persists_immediately() {
        let (dir, mut studio) = studio();
        let updated = studio.toggle_booking("101", day(2024, 3, 10)).unwrap().unwrap();
        assert!(updated.booked_dates.contains(&day(2024, 3, 10)));

        let reloaded = Studio::load(Store::new(dir.path()));
        assert!(reloaded.resource("101").unwrap().booked_dates.contains(&day(2024, 3, 10)));
        assert!(!reloaded.store().path_for::<Events>().exists());
    }

    #[test]
    fn unknown_resource_changes_nothing() {
        let (_dir, mut studio) = studio();
        assert!(studio.toggle_booking("nope", day(2024, 3, 10)).unwrap().is_none());
        assert!(!studio.store().path_for::<Resources>().exists());
    }

    #[test]
    fn deleting_selected_resource_clears_selection() {
        let (_dir, mut studio) = studio();
        studio.select_resource("101").unwrap();
        assert_eq!(studio.selected_resource().map(|r| r.name.as_str()), Some("日系学生制服(L)"));

        assert!(studio.delete_resource("101").unwrap());
        assert_eq!(studio.mode(), &ViewMode::List);
        assert!(studio.selected_resource().is_none());
    }

    #[test]
    fn deleting_other_resource_keeps_selection() {
        let (_dir, mut studio) = studio();
        studio.select_resource("101");
        studio.delete_resource("102").unwrap();

        assert_eq!(studio.mode().selected_resource(), Some("101"));
    }

    #[test]
    fn delete_resource_is_idempotent() {
        let (_dir, mut studio) = studio();
        assert!(studio.delete_resource("102").unwrap());
        assert!(!studio.delete_resource("102").unwrap());
        assert_eq!(studio.resources().len(), 1);
    }

    #[test]
    fn required_resources_do_not_touch_inventory() {
        let (_dir, mut studio) = studio();
        let before = studio.resource("102").cloned().unwrap();

        let mut event = Event::new_board_event("复古街拍", "2024-05-10T09:00", "胡同", "", None);
        event.required_resources.push(RequiredResource {
            resource_id: "102".into(),
            quantity: 1,
        });
        studio.add_event(event).unwrap();

        assert_eq!(studio.resource("102"), Some(&before));
    }

    #[test]
    fn quick_add_returns_to_list() {
        let (_dir, mut studio) = studio();
        studio.begin_quick_add(day(2024, 5, 10));
        assert_eq!(studio.mode().quick_add_day(), Some(day(2024, 5, 10)));

        studio
            .add_event(Event::new_quick_event(day(2024, 5, 10), "小林", "樱花", 2))
            .unwrap();
        assert_eq!(studio.mode(), &ViewMode::List);

        let grid = studio.schedule(Month::new(2024, 5).unwrap());
        assert_eq!(grid.entries_on(10).len(), 1);
    }

    #[test]
    fn deleting_viewed_event_clears_selection() {
        let (_dir, mut studio) = studio();
        studio.view_event("1").unwrap();
        assert!(studio.delete_event("1").unwrap());
        assert_eq!(studio.mode(), &ViewMode::List);
        assert!(!studio.delete_event("1").unwrap());
    }

    #[test]
    fn resources_filter_by_category() {
        let (_dir, studio) = studio();
        let props = studio.resources_in(ResourceCategory::Prop);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].id, "102");
        assert!(studio.resources_in(ResourceCategory::Makeup).is_empty());
    }

    #[test]
    fn quantity_changes_are_clamped() {
        let (_dir, mut studio) = studio();
        let r = studio.set_quantity("101", 0).unwrap().unwrap();
        assert_eq!((r.total_quantity, r.available_quantity), (1, 1));

        let r = studio.set_available("101", 0).unwrap().unwrap();
        assert_eq!(r.available_quantity, 0);
    }

    #[test]
    fn themes_round_trip_through_store() {
        let (dir, mut studio) = studio();
        let mut item = ThemeItem::new("雪柳花海");
        item.recommend_location = "奥林匹克森林公园".into();
        let id = item.id.clone();

        assert!(studio.upsert_theme(4, item).unwrap());
        assert!(!studio.upsert_theme(13, ThemeItem::new("x")).unwrap());

        let reloaded = Studio::load(Store::new(dir.path()));
        assert_eq!(reloaded.themes_for(4).len(), 1);

        assert!(studio.delete_theme(4, &id).unwrap());
        assert!(!studio.delete_theme(4, &id).unwrap());
        assert!(studio.themes_for(4).is_empty());
    }

    #[test]
    fn partners_add_and_delete() {
        let (_dir, mut studio) = studio();
        let venue = LocationPartner::new("旧厂房");
        let artist = MakeupArtist::new("Momo");
        let (venue_id, artist_id) = (venue.id.clone(), artist.id.clone());

        studio.add_location(venue).unwrap();
        studio.add_artist(artist).unwrap();
        assert_eq!(studio.locations().len(), 1);
        assert_eq!(studio.artists().len(), 1);

        assert!(studio.delete_location(&venue_id).unwrap());
        assert!(studio.delete_artist(&artist_id).unwrap());
        assert!(!studio.delete_artist(&artist_id).unwrap());
    }

    /// A studio whose data path is a regular file, so every save fails.
    fn unwritable_studio() -> (tempfile::TempDir, Studio) {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        let studio = Studio::load(Store::new(&data));
        std::fs::write(&data, "not a directory").unwrap();
        (dir, studio)
    }

    #[test]
    fn failed_delete_keeps_resource_and_selection() {
        let (_dir, mut studio) = unwritable_studio();
        studio.select_resource("101").unwrap();

        assert!(studio.delete_resource("101").is_err());
        assert_eq!(studio.resources().len(), 2);
        assert_eq!(studio.mode(), &ViewMode::ViewingResource("101".to_string()));
        assert!(studio.selected_resource().is_some());
    }

    #[test]
    fn failed_save_leaves_memory_unchanged() {
        let (_dir, mut studio) = unwritable_studio();
        let before = studio.resources().to_vec();

        assert!(studio.toggle_booking("101", day(2024, 3, 10)).is_err());
        assert!(studio.set_quantity("102", 4).is_err());
        assert_eq!(studio.resources(), before.as_slice());

        assert!(studio.add_event(Event::new_quick_event(day(2024, 3, 10), "小林", "樱花", 2)).is_err());
        assert_eq!(studio.events().len(), 1);
        assert!(studio.add_artist(MakeupArtist::new("Momo")).is_err());
        assert!(studio.artists().is_empty());
    }

    #[test]
    fn removes_one_portfolio_image() {
        let (dir, mut studio) = studio();
        let mut artist = MakeupArtist::new("Momo");
        artist.portfolio_images = vec!["a".into(), "b".into(), "c".into()];
        let id = artist.id.clone();
        studio.add_artist(artist).unwrap();

        let updated = studio.remove_artist_image(&id, 1).unwrap().unwrap();
        assert_eq!(updated.portfolio_images, vec!["a", "c"]);
        assert!(studio.remove_artist_image(&id, 2).unwrap().is_none());
        assert!(studio.remove_artist_image("missing", 0).unwrap().is_none());

        let reloaded = Studio::load(Store::new(dir.path()));
        assert_eq!(reloaded.artists()[0].portfolio_images, vec!["a", "c"]);
    }
}
