use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use dialoguer::{Input, Select};
use greenforest_core::ledger::{self, Availability};
use greenforest_core::month_grid::Month;
use greenforest_core::{Resource, ResourceCategory};
use owo_colors::OwoColorize;

use super::{confirm, encode_images, image_label, load_studio, not_found, optional, required};
use crate::render::{Render, render_bookings};

/// Fields of the add-resource form; missing ones are prompted for.
pub struct NewResource {
    pub name: Option<String>,
    pub category: Option<ResourceCategory>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub code: Option<String>,
    pub images: Vec<PathBuf>,
}

pub fn list(category: Option<ResourceCategory>) -> Result<()> {
    let studio = load_studio()?;

    let categories: Vec<ResourceCategory> = match category {
        Some(c) => vec![c],
        None => ResourceCategory::ALL.to_vec(),
    };

    let mut printed = false;
    for category in categories {
        let resources = studio.resources_in(category);
        if resources.is_empty() {
            continue;
        }

        if printed {
            println!();
        }
        println!("{} {}", category.emoji(), category.label().bold());
        for resource in resources {
            println!("   {} {}", resource.render(), resource.id.dimmed());
        }
        printed = true;
    }

    if !printed {
        println!("{}", "No resources".dimmed());
    }

    Ok(())
}

pub fn add(form: NewResource) -> Result<()> {
    let mut studio = load_studio()?;
    studio.begin_create();

    let interactive = form.name.is_none() || form.category.is_none();

    let name = required(form.name, "Name")?;
    let category = match form.category {
        Some(c) => c,
        None => prompt_category()?,
    };
    let quantity = match form.quantity {
        Some(n) => n,
        None if interactive => Input::<u32>::new()
            .with_prompt("  Quantity")
            .default(1)
            .interact_text()?,
        None => 1,
    };
    let description = optional(form.description, "Description", interactive)?;
    let location = optional(form.location, "Storage location", interactive)?;
    let code = if category.has_item_code() {
        optional(form.code, "Item code", interactive)?
    } else {
        None
    };
    let images = encode_images(&form.images)?;

    let resource = Resource::new(name, category, quantity)
        .with_description(description.unwrap_or_default())
        .with_location(location)
        .with_item_code(code)
        .with_images(images)
        .with_placeholder_cover(Utc::now().timestamp_millis());
    studio.add_resource(resource.clone())?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Added: {}", resource).green());
    println!("  {}", resource.id.dimmed());

    Ok(())
}

pub fn show(id: &str, month: Option<Month>) -> Result<()> {
    let mut studio = load_studio()?;
    if studio.select_resource(id).is_none() {
        return Err(not_found("resource", id));
    }
    let Some(resource) = studio.selected_resource() else {
        return Err(not_found("resource", id));
    };

    let month = month.unwrap_or_else(Month::current);
    let today = Local::now().date_naive();

    println!("{}", resource.render());
    let status = ledger::availability(resource);
    let detail = match status {
        Availability::Available => status.detail_label().green().to_string(),
        Availability::Borrowed => status.detail_label().red().to_string(),
    };
    println!("  {} {}", category_line(resource.category).dimmed(), detail);
    if !resource.description.is_empty() {
        println!("  {}", resource.description);
    }
    if let Some(cover) = resource.cover_image() {
        let count = resource.images.len().max(1);
        println!("  {} {} ({})", "Cover:".dimmed(), image_label(cover), count);
    }

    println!();
    if let Some(grid) = studio.booking_grid(id, month) {
        println!("{}", render_bookings(&grid, today));
    }

    let booked = ledger::booked_in_month(resource, month.year(), month.month());
    println!();
    if booked.is_empty() {
        println!("   {}", "本月无借出".dimmed());
    } else {
        let days: Vec<String> = booked.iter().map(|d| d.format("%m-%d").to_string()).collect();
        println!("   {} {}", "已借出:".red(), days.join(", "));
    }

    Ok(())
}

pub fn book(id: &str, day: NaiveDate) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(resource) = studio.toggle_booking(id, day)? else {
        return Err(not_found("resource", id));
    };

    let day_label = day.format("%Y-%m-%d");
    if ledger::is_booked(resource, day) {
        println!("{} {}", format!("  Booked {}:", day_label).red(), resource);
    } else {
        println!("{} {}", format!("  Freed {}:", day_label).green(), resource);
    }

    Ok(())
}

pub fn location(id: &str, text: &str) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(resource) = studio.update_location(id, text)? else {
        return Err(not_found("resource", id));
    };

    match &resource.location {
        Some(location) => println!("  {} → {}", resource, location.green()),
        None => println!("  {} {}", resource, "(no location)".dimmed()),
    }
    Ok(())
}

pub fn quantity(id: &str, total: u32) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(resource) = studio.set_quantity(id, total)? else {
        return Err(not_found("resource", id));
    };

    println!("  {}", resource.render());
    Ok(())
}

pub fn available(id: &str, available: u32) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(resource) = studio.set_available(id, available)? else {
        return Err(not_found("resource", id));
    };

    println!("  {}", resource.render());
    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(resource) = studio.select_resource(id) else {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    };

    if !confirm(&format!("Delete \"{}\" from the inventory?", resource), yes)? {
        return Ok(());
    }

    if studio.delete_resource(id)? {
        println!("{}", "  Deleted".red());
    }
    Ok(())
}

fn category_line(category: ResourceCategory) -> String {
    format!("{} {}", category.emoji(), category.label())
}

fn prompt_category() -> Result<ResourceCategory> {
    let labels: Vec<String> = ResourceCategory::ALL.iter().map(|c| category_line(*c)).collect();
    let index = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ResourceCategory::ALL[index])
}
