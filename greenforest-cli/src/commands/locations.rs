use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use greenforest_core::LocationPartner;
use owo_colors::OwoColorize;

use super::{confirm, encode_images, image_label, load_studio, optional, required};
use crate::render::Render;

pub struct NewLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub style: Option<String>,
    pub contact: Option<String>,
    pub cost: Option<String>,
    pub requirements: Option<String>,
    pub notes: Option<String>,
    pub images: Vec<PathBuf>,
}

pub fn list() -> Result<()> {
    let studio = load_studio()?;
    let locations = studio.locations();

    if locations.is_empty() {
        println!("{}", "No partner locations yet".dimmed());
        return Ok(());
    }

    for location in locations {
        println!("{} {}", location.render(), location.id.dimmed());
        if let Some(cover) = location.cover_image() {
            println!("   {} {}", "Cover:".dimmed(), image_label(cover));
        }
        for (label, value) in [
            ("Contact", &location.contact),
            ("Cost", &location.cost),
            ("Requirements", &location.requirements),
            ("Notes", &location.notes),
        ] {
            if !value.is_empty() {
                println!("   {} {}", format!("{}:", label).dimmed(), value);
            }
        }
    }

    Ok(())
}

pub fn add(form: NewLocation) -> Result<()> {
    let mut studio = load_studio()?;
    studio.begin_create();

    let interactive = form.name.is_none();

    let mut location = LocationPartner::new(required(form.name, "Name")?);
    location.address = optional(form.address, "Address", interactive)?.unwrap_or_default();
    location.style = optional(form.style, "Style", interactive)?.unwrap_or_default();
    location.contact = optional(form.contact, "Contact", interactive)?.unwrap_or_default();
    location.cost = optional(form.cost, "Cost", interactive)?.unwrap_or_default();
    location.requirements =
        optional(form.requirements, "Requirements", interactive)?.unwrap_or_default();
    location.notes = optional(form.notes, "Notes", interactive)?.unwrap_or_default();
    location.images = encode_images(&form.images)?;
    let location = location.with_placeholder_cover(Utc::now().timestamp_millis());

    studio.add_location(location.clone())?;
    println!("{}", format!("  Added: {}", location.name).green());

    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(location) = studio.locations().iter().find(|l| l.id == id) else {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    };

    if !confirm(&format!("Delete location \"{}\"?", location.name), yes)? {
        return Ok(());
    }

    if studio.delete_location(id)? {
        println!("{}", "  Deleted".red());
    }
    Ok(())
}
