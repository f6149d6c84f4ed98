pub mod artists;
pub mod config;
pub mod events;
pub mod locations;
pub mod resources;
pub mod schedule;
pub mod themes;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::{Confirm, Input};
use greenforest_core::config::StudioConfig;
use greenforest_core::media;
use greenforest_core::store::Store;
use greenforest_core::studio::Studio;
use greenforest_core::utils::non_empty;
use owo_colors::OwoColorize;

pub fn load_config() -> Result<StudioConfig> {
    StudioConfig::load().context("Failed to load greenforest config")
}

pub fn load_studio() -> Result<Studio> {
    let config = load_config()?;
    Ok(Studio::load(Store::open(&config)))
}

/// Parse a `YYYY-MM-DD` day, zero-padded.
pub fn parse_day(input: &str) -> Result<NaiveDate, String> {
    let input = input.trim();
    let invalid = || format!("Invalid date '{}'. Expected YYYY-MM-DD", input);

    if input.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

/// Use `value` if given, otherwise ask until a non-blank answer comes back.
pub fn required(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = non_empty(value) {
        return Ok(value);
    }

    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", prompt))
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();
        if !input.is_empty() {
            return Ok(input.to_string());
        }
        eprintln!("  {}", format!("{} is required", prompt).red());
    }
}

/// Use `value` if given, otherwise offer a skippable prompt. Only prompts
/// when `interactive`.
pub fn optional(value: Option<String>, prompt: &str, interactive: bool) -> Result<Option<String>> {
    if value.is_some() || !interactive {
        return Ok(non_empty(value));
    }

    let input: String = Input::new()
        .with_prompt(format!("  {} (skip)", prompt))
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(non_empty(Some(input)))
}

/// Ask before deleting, unless `yes` was passed.
pub fn confirm(question: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

pub fn encode_images(paths: &[PathBuf]) -> Result<Vec<String>> {
    media::encode_images(paths).context("Failed to read image")
}

/// Short form of an image reference: URLs as-is, embedded data summarized.
pub fn image_label(reference: &str) -> &str {
    if media::is_data_url(reference) {
        "embedded image"
    } else {
        reference
    }
}

pub fn not_found(kind: &str, id: &str) -> anyhow::Error {
    anyhow::anyhow!("No {} with id '{}'", kind, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_padded_dates() {
        assert_eq!(parse_day("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert_eq!(parse_day(" 2024-12-01 "), Ok(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
    }

    #[test]
    fn parse_day_rejects_loose_dates() {
        assert!(parse_day("2024-2-9").is_err());
        assert!(parse_day("2023-02-29").is_err());
        assert!(parse_day("2024-02-10T09:00").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn required_keeps_given_value() {
        assert_eq!(required(Some("  森林 ".into()), "Title").unwrap(), "森林");
    }

    #[test]
    fn optional_without_prompt() {
        assert_eq!(optional(None, "Notes", false).unwrap(), None);
        assert_eq!(optional(Some(" ".into()), "Notes", true).unwrap(), None);
        assert_eq!(optional(Some("x".into()), "Notes", true).unwrap(), Some("x".into()));
    }

    #[test]
    fn image_label_hides_data_urls() {
        assert_eq!(image_label("data:image/png;base64,YWJj"), "embedded image");
        assert_eq!(image_label("https://picsum.photos/200"), "https://picsum.photos/200");
    }

    #[test]
    fn confirm_skipped_with_yes() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
