use std::path::PathBuf;

use anyhow::{Result, bail};
use greenforest_core::MakeupArtist;
use owo_colors::OwoColorize;

use super::{confirm, encode_images, image_label, load_studio, not_found, optional, required};
use crate::render::Render;

pub struct NewArtist {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub base_location: Option<String>,
    pub rates: Option<String>,
    pub return_requirements: Option<String>,
    pub notes: Option<String>,
    pub images: Vec<PathBuf>,
}

pub fn list() -> Result<()> {
    let studio = load_studio()?;
    let artists = studio.artists();

    if artists.is_empty() {
        println!("{}", "No makeup artists yet".dimmed());
        return Ok(());
    }

    for artist in artists {
        println!("{} {}", artist.render(), artist.id.dimmed());
        if !artist.contact.is_empty() {
            println!("   {} {}", "Contact:".dimmed(), artist.contact);
        }
        if !artist.return_requirements.is_empty() {
            println!("   {} {}", "Returns:".dimmed(), artist.return_requirements);
        }
        if let Some(notes) = &artist.notes {
            println!("   {} {}", "Notes:".dimmed(), notes);
        }
        for (number, image) in artist.portfolio_images.iter().enumerate() {
            println!("   {} {}", format!("#{}", number + 1).dimmed(), image_label(image));
        }
    }

    Ok(())
}

pub fn add(form: NewArtist) -> Result<()> {
    let mut studio = load_studio()?;
    studio.begin_create();

    let interactive = form.name.is_none();

    let mut artist = MakeupArtist::new(required(form.name, "Name")?);
    artist.contact = optional(form.contact, "Contact", interactive)?.unwrap_or_default();
    artist.base_location =
        optional(form.base_location, "Based in", interactive)?.unwrap_or_default();
    artist.rates = optional(form.rates, "Rates", interactive)?.unwrap_or_default();
    artist.return_requirements =
        optional(form.return_requirements, "Return requirements", interactive)?
            .unwrap_or_default();
    artist.notes = optional(form.notes, "Notes", interactive)?;
    artist.portfolio_images = encode_images(&form.images)?;

    studio.add_artist(artist.clone())?;
    println!("{}", format!("  Added: {}", artist.name).green());

    Ok(())
}

/// Remove the portfolio image at `index` (0-based).
pub fn remove_image(id: &str, index: usize) -> Result<()> {
    let mut studio = load_studio()?;
    if !studio.artists().iter().any(|a| a.id == id) {
        return Err(not_found("makeup artist", id));
    }

    let Some(artist) = studio.remove_artist_image(id, index)? else {
        bail!("{} has no image #{}", id, index + 1);
    };
    println!(
        "  {} {}",
        format!("Removed image #{} from", index + 1).red(),
        artist.name
    );
    println!(
        "   {}",
        format!("{} portfolio image(s) left", artist.portfolio_images.len()).dimmed()
    );
    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(artist) = studio.artists().iter().find(|a| a.id == id) else {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    };

    if !confirm(&format!("Delete makeup artist \"{}\"?", artist.name), yes)? {
        return Ok(());
    }

    if studio.delete_artist(id)? {
        println!("{}", "  Deleted".red());
    }
    Ok(())
}
