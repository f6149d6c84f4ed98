use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use dialoguer::Input;
use greenforest_core::Event;
use greenforest_core::suggest::{DescriptionRequest, suggest_description};
use owo_colors::OwoColorize;

use super::{confirm, load_config, load_studio, not_found, optional, required};
use crate::gemini::GeminiClient;
use crate::render::Render;
use crate::utils::tui;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Fields of the event board form; missing ones are prompted for.
pub struct NewEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub stage_manager: Option<String>,
    pub describe: bool,
    pub style: Option<String>,
}

pub fn list() -> Result<()> {
    let studio = load_studio()?;
    let events = studio.events();

    if events.is_empty() {
        println!("{}", "No events yet".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{} {}", event.render(), event.id.dimmed());
    }

    Ok(())
}

pub async fn new(form: NewEvent) -> Result<()> {
    let mut studio = load_studio()?;
    studio.begin_create();

    let interactive = form.title.is_none() || form.date.is_none() || form.location.is_none();

    let title = required(form.title, "Title")?;
    let date = match form.date {
        Some(date) => check_datetime(&date)?,
        None => prompt_datetime()?,
    };
    let location = required(form.location, "Location")?;
    let stage_manager = optional(form.stage_manager, "Stage manager", interactive)?;

    let description = if form.describe {
        let style = optional(form.style, "Style notes", interactive)?.unwrap_or_default();
        let text = generate(DescriptionRequest::new(&title, &location, style)).await?;
        println!("{}", text.dimmed());
        text
    } else {
        optional(form.description, "Description", interactive)?.unwrap_or_default()
    };

    let event = Event::new_board_event(title, date, location, description, stage_manager);
    studio.add_event(event.clone())?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Published: {}", event).green());

    Ok(())
}

pub fn quick_add(
    day: NaiveDate,
    organizer: Option<String>,
    theme: Option<String>,
    models: Option<u32>,
) -> Result<()> {
    let mut studio = load_studio()?;
    studio.begin_quick_add(day);

    let organizer = required(organizer, "Organizer")?;
    let theme = required(theme, "Theme")?;
    let models = match models {
        Some(n) => n,
        None => Input::<u32>::new()
            .with_prompt("  Expected models")
            .default(1)
            .interact_text()?,
    };

    let event = Event::new_quick_event(day, organizer, theme, models);
    studio.add_event(event.clone())?;

    println!(
        "{}",
        format!("  Added to {}: {}", day.format("%Y-%m-%d"), event).green()
    );

    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(event) = studio.view_event(id) else {
        return Err(not_found("event", id));
    };

    println!("{}", event.render());
    if let Some(organizer) = &event.organizer {
        println!("  {} {}", "Organizer:".dimmed(), organizer);
    }
    if let Some(count) = event.model_count {
        println!("  {} {}", "Models:".dimmed(), count);
    }
    if let Some(manager) = &event.stage_manager {
        println!("  {} {}", "Stage manager:".dimmed(), manager);
    }
    if !event.description.is_empty() {
        println!();
        for line in event.description.lines() {
            println!("  {}", line);
        }
    }

    Ok(())
}

pub fn delete(id: &str, yes: bool) -> Result<()> {
    let mut studio = load_studio()?;
    let Some(event) = studio.event(id) else {
        println!("{}", "Nothing to delete".dimmed());
        return Ok(());
    };

    if !confirm(&format!("Delete event \"{}\"?", event), yes)? {
        return Ok(());
    }

    if studio.delete_event(id)? {
        println!("{}", "  Deleted".red());
    }
    Ok(())
}

pub async fn describe(title: String, location: String, style: String) -> Result<()> {
    if title.trim().is_empty() || location.trim().is_empty() {
        bail!("Title and location are needed to write a description");
    }

    let text = generate(DescriptionRequest::new(title.trim(), location.trim(), style)).await?;
    println!("{}", text);
    Ok(())
}

async fn generate(request: DescriptionRequest) -> Result<String> {
    let config = load_config()?;
    let client = GeminiClient::from_config(&config);

    let spinner = tui::create_spinner("Writing description...");
    let text = suggest_description(client.as_ref(), &request, config.suggest_timeout()).await;
    spinner.finish_and_clear();

    Ok(text)
}

/// Validate a `YYYY-MM-DDTHH:MM` date, keeping the input as entered.
fn check_datetime(input: &str) -> Result<String> {
    let input = input.trim();
    match NaiveDateTime::parse_from_str(input, DATE_FORMAT) {
        Ok(_) if input.len() == 16 => Ok(input.to_string()),
        _ => bail!("Invalid date '{}'. Expected YYYY-MM-DDTHH:MM", input),
    }
}

fn prompt_datetime() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  When? (YYYY-MM-DDTHH:MM)")
            .interact_text()?;
        match check_datetime(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
