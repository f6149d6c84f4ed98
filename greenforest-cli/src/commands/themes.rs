use std::path::PathBuf;

use anyhow::{Result, bail};
use greenforest_core::ThemeItem;
use greenforest_core::model::theme::month_name;
use owo_colors::OwoColorize;

use super::{confirm, encode_images, load_studio, not_found, optional, required};
use crate::render::Render;

/// Theme fields from the command line. On edit, only given fields change.
pub struct ThemeForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub images: Vec<PathBuf>,
}

fn check_month(month: u32) -> Result<&'static str> {
    match month_name(month) {
        Some(name) => Ok(name),
        None => bail!("Invalid month {}. Expected 1-12", month),
    }
}

pub fn list(month: Option<u32>) -> Result<()> {
    let studio = load_studio()?;

    let months: Vec<u32> = match month {
        Some(m) => {
            check_month(m)?;
            vec![m]
        }
        None => (1..=12).collect(),
    };

    for (i, month) in months.iter().enumerate() {
        let name = check_month(*month)?;
        if i > 0 {
            println!();
        }
        println!("{}", name.bold());

        let themes = studio.themes_for(*month);
        if themes.is_empty() {
            println!("   {}", "暂无主题".dimmed());
        }
        for theme in themes {
            println!("   {} {}", theme.render(), theme.id.dimmed());
            if !theme.description.is_empty() {
                println!("      {}", theme.description.dimmed());
            }
        }
    }

    Ok(())
}

pub fn add(month: u32, form: ThemeForm) -> Result<()> {
    let name = check_month(month)?;
    let mut studio = load_studio()?;
    studio.begin_create();

    let interactive = form.title.is_none();

    let mut item = ThemeItem::new(required(form.title, "Theme")?);
    item.description = optional(form.description, "Description", interactive)?.unwrap_or_default();
    item.recommend_location =
        optional(form.location, "Recommended location", interactive)?.unwrap_or_default();
    item.images = encode_images(&form.images)?;

    studio.upsert_theme(month, item.clone())?;
    println!("{}", format!("  Added to {}: {}", name, item.title).green());

    Ok(())
}

pub fn edit(month: u32, id: &str, form: ThemeForm) -> Result<()> {
    let name = check_month(month)?;
    let mut studio = load_studio()?;

    let Some(existing) = studio.themes_for(month).iter().find(|t| t.id == id) else {
        return Err(not_found("theme", id));
    };
    let mut item = existing.clone();

    if let Some(title) = form.title.filter(|t| !t.trim().is_empty()) {
        item.title = title.trim().to_string();
    }
    if let Some(description) = form.description {
        item.description = description.trim().to_string();
    }
    if let Some(location) = form.location {
        item.recommend_location = location.trim().to_string();
    }
    if !form.images.is_empty() {
        item.images = encode_images(&form.images)?;
    }

    studio.upsert_theme(month, item.clone())?;
    println!("{}", format!("  Updated {}: {}", name, item.title).green());

    Ok(())
}

pub fn delete(month: u32, id: &str, yes: bool) -> Result<()> {
    check_month(month)?;
    let mut studio = load_studio()?;

    let Some(theme) = studio.themes_for(month).iter().find(|t| t.id == id) else {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    };

    if !confirm(&format!("Delete theme \"{}\"?", theme.title), yes)? {
        return Ok(());
    }

    if studio.delete_theme(month, id)? {
        println!("{}", "  Deleted".red());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_outside_the_year_are_rejected() {
        assert!(check_month(0).is_err());
        assert!(check_month(13).is_err());
        assert_eq!(check_month(6).unwrap(), "六月 (Jun)");
    }
}
