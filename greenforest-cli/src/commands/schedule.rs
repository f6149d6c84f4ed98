use anyhow::Result;
use chrono::Local;
use greenforest_core::month_grid::Month;
use owo_colors::OwoColorize;

use super::load_studio;
use crate::render::render_schedule;

pub fn run(month: Option<Month>) -> Result<()> {
    let studio = load_studio()?;
    let month = month.unwrap_or_else(Month::current);
    let today = Local::now().date_naive();

    let grid = studio.schedule(month);
    println!("{}", render_schedule(&grid, today));

    println!();
    println!(
        "{}",
        format!(
            "   ← {}  ·  {} →  ·  greenforest events quick-add <YYYY-MM-DD>",
            month.prev(),
            month.next()
        )
        .dimmed()
    );

    Ok(())
}
