use anyhow::Result;
use greenforest_core::config::StudioConfig;
use owo_colors::OwoColorize;

use super::load_config;

pub fn run() -> Result<()> {
    let config_path = StudioConfig::config_path()?;
    let config = load_config()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    println!();
    println!("{}", "Settings".bold());
    let settings = toml::to_string_pretty(&masked(&config))?;
    if settings.trim().is_empty() {
        println!("  {}", "(all defaults)".dimmed());
    }
    for line in settings.lines() {
        println!("  {}", line);
    }
    println!(
        "  {}",
        format!(
            "description suggestions: {}",
            if config.gemini_api_key.is_some() { "Gemini" } else { "demo copy" }
        )
        .dimmed()
    );

    Ok(())
}

/// Copy of the config safe to print.
fn masked(config: &StudioConfig) -> StudioConfig {
    let mut config = config.clone();
    config.gemini_api_key = config.gemini_api_key.as_deref().map(mask_key);
    config
}

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    if key.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("****{}", visible)
    }
}
