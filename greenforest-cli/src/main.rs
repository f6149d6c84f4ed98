mod commands;
mod gemini;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use greenforest_core::ResourceCategory;
use greenforest_core::month_grid::Month;
use tracing_subscriber::EnvFilter;

use crate::commands::parse_day;

#[derive(Parser)]
#[command(name = "greenforest")]
#[command(about = "Events, inventory bookings, themes and partners for the greenforest photo collective")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// The event board
    Events {
        #[command(subcommand)]
        command: EventCommand,
    },
    /// Costumes, makeup, props and accessories
    Resources {
        #[command(subcommand)]
        command: ResourceCommand,
    },
    /// Month calendar of events
    Schedule {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },
    /// Monthly theme recommendations
    Themes {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Partner locations
    Locations {
        #[command(subcommand)]
        command: LocationCommand,
    },
    /// Makeup artists
    Artists {
        #[command(subcommand)]
        command: ArtistCommand,
    },
    /// Show config and data paths
    Config,
}

#[derive(Subcommand)]
enum EventCommand {
    List,
    /// Publish an event on the board (prompts for missing fields)
    New {
        #[arg(long)]
        title: Option<String>,

        /// Date and time (e.g. "2025-03-20T15:00")
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        stage_manager: Option<String>,

        /// Ask the description service to write the description
        #[arg(long)]
        describe: bool,

        /// Style notes passed to the description service
        #[arg(long, requires = "describe")]
        style: Option<String>,
    },
    /// Add an event on a schedule day (prompts for missing fields)
    QuickAdd {
        /// Day (YYYY-MM-DD)
        #[arg(value_parser = parse_day)]
        day: NaiveDate,

        #[arg(short, long)]
        organizer: Option<String>,

        #[arg(short, long)]
        theme: Option<String>,

        /// Expected number of models
        #[arg(short, long)]
        models: Option<u32>,
    },
    Show {
        id: String,
    },
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Suggest a description without saving anything
    Describe {
        #[arg(long)]
        title: String,

        #[arg(short, long)]
        location: String,

        #[arg(long, default_value = "")]
        style: String,
    },
}

#[derive(Subcommand)]
enum ResourceCommand {
    List {
        /// Only this category (costume, makeup, prop, accessory)
        #[arg(short, long)]
        category: Option<ResourceCategory>,
    },
    /// Add a resource to the inventory (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<ResourceCategory>,

        #[arg(short, long)]
        quantity: Option<u32>,

        #[arg(long)]
        description: Option<String>,

        /// Where the item is kept
        #[arg(short, long)]
        location: Option<String>,

        /// Item code (costumes only)
        #[arg(long)]
        code: Option<String>,

        /// Image files to attach
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Show a resource and its booking calendar
    Show {
        id: String,

        /// Month of the booking calendar (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
    },
    /// Book a day, or free it if it is already booked
    Book {
        id: String,

        #[arg(value_parser = parse_day)]
        day: NaiveDate,
    },
    /// Change where the item is kept (empty clears it)
    Location {
        id: String,
        text: String,
    },
    /// Set the total quantity
    Quantity {
        id: String,
        total: u32,
    },
    /// Set how many units are currently available
    Available {
        id: String,
        available: u32,
    },
    Delete {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    List {
        /// Only this month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },
    Add {
        /// Month (1-12)
        month: u32,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Recommended location
        #[arg(short, long)]
        location: Option<String>,

        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    Edit {
        month: u32,
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Replace the theme's images
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    Delete {
        month: u32,
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum LocationCommand {
    List,
    /// Add a partner location (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        style: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        cost: Option<String>,

        #[arg(long)]
        requirements: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    Delete {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ArtistCommand {
    List,
    /// Add a makeup artist (prompts for missing fields)
    Add {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        /// City or area the artist works from
        #[arg(long)]
        base: Option<String>,

        #[arg(long)]
        rates: Option<String>,

        /// What has to be returned after a shoot
        #[arg(long)]
        returns: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// Drop one portfolio image, numbered as in `artists list`
    RemoveImage {
        id: String,

        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        image: u32,
    },
    Delete {
        id: String,

        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Events { command } => match command {
            EventCommand::List => commands::events::list(),
            EventCommand::New {
                title,
                date,
                location,
                description,
                stage_manager,
                describe,
                style,
            } => {
                let form = commands::events::NewEvent {
                    title,
                    date,
                    location,
                    description,
                    stage_manager,
                    describe,
                    style,
                };
                commands::events::new(form).await
            }
            EventCommand::QuickAdd {
                day,
                organizer,
                theme,
                models,
            } => commands::events::quick_add(day, organizer, theme, models),
            EventCommand::Show { id } => commands::events::show(&id),
            EventCommand::Delete { id, yes } => commands::events::delete(&id, yes),
            EventCommand::Describe {
                title,
                location,
                style,
            } => commands::events::describe(title, location, style).await,
        },
        Commands::Resources { command } => match command {
            ResourceCommand::List { category } => commands::resources::list(category),
            ResourceCommand::Add {
                name,
                category,
                quantity,
                description,
                location,
                code,
                images,
            } => {
                let form = commands::resources::NewResource {
                    name,
                    category,
                    quantity,
                    description,
                    location,
                    code,
                    images,
                };
                commands::resources::add(form)
            }
            ResourceCommand::Show { id, month } => commands::resources::show(&id, month),
            ResourceCommand::Book { id, day } => commands::resources::book(&id, day),
            ResourceCommand::Location { id, text } => commands::resources::location(&id, &text),
            ResourceCommand::Quantity { id, total } => commands::resources::quantity(&id, total),
            ResourceCommand::Available { id, available } => {
                commands::resources::available(&id, available)
            }
            ResourceCommand::Delete { id, yes } => commands::resources::delete(&id, yes),
        },
        Commands::Schedule { month } => commands::schedule::run(month),
        Commands::Themes { command } => match command {
            ThemeCommand::List { month } => commands::themes::list(month),
            ThemeCommand::Add {
                month,
                title,
                description,
                location,
                images,
            } => {
                let form = commands::themes::ThemeForm {
                    title,
                    description,
                    location,
                    images,
                };
                commands::themes::add(month, form)
            }
            ThemeCommand::Edit {
                month,
                id,
                title,
                description,
                location,
                images,
            } => {
                let form = commands::themes::ThemeForm {
                    title,
                    description,
                    location,
                    images,
                };
                commands::themes::edit(month, &id, form)
            }
            ThemeCommand::Delete { month, id, yes } => commands::themes::delete(month, &id, yes),
        },
        Commands::Locations { command } => match command {
            LocationCommand::List => commands::locations::list(),
            LocationCommand::Add {
                name,
                address,
                style,
                contact,
                cost,
                requirements,
                notes,
                images,
            } => {
                let form = commands::locations::NewLocation {
                    name,
                    address,
                    style,
                    contact,
                    cost,
                    requirements,
                    notes,
                    images,
                };
                commands::locations::add(form)
            }
            LocationCommand::Delete { id, yes } => commands::locations::delete(&id, yes),
        },
        Commands::Artists { command } => match command {
            ArtistCommand::List => commands::artists::list(),
            ArtistCommand::Add {
                name,
                contact,
                base,
                rates,
                returns,
                notes,
                images,
            } => {
                let form = commands::artists::NewArtist {
                    name,
                    contact,
                    base_location: base,
                    rates,
                    return_requirements: returns,
                    notes,
                    images,
                };
                commands::artists::add(form)
            }
            ArtistCommand::RemoveImage { id, image } => {
                commands::artists::remove_image(&id, image as usize - 1)
            }
            ArtistCommand::Delete { id, yes } => commands::artists::delete(&id, yes),
        },
        Commands::Config => commands::config::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resource_booking() {
        let cli = Cli::try_parse_from(["greenforest", "resources", "book", "101", "2024-05-03"]).unwrap();
        match cli.command {
            Commands::Resources {
                command: ResourceCommand::Book { id, day },
            } => {
                assert_eq!(id, "101");
                assert_eq!(day, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
            }
            _ => panic!("expected resources book"),
        }
    }

    #[test]
    fn rejects_unpadded_day() {
        assert!(Cli::try_parse_from(["greenforest", "resources", "book", "101", "2024-5-3"]).is_err());
    }

    #[test]
    fn parses_category_filter() {
        let cli = Cli::try_parse_from(["greenforest", "resources", "list", "-c", "props"]).unwrap();
        match cli.command {
            Commands::Resources {
                command: ResourceCommand::List { category },
            } => assert_eq!(category, Some(ResourceCategory::Prop)),
            _ => panic!("expected resources list"),
        }
    }

    #[test]
    fn quantity_must_be_numeric() {
        assert!(Cli::try_parse_from(["greenforest", "resources", "quantity", "101", "two"]).is_err());
    }

    #[test]
    fn image_numbers_start_at_one() {
        let cli = Cli::try_parse_from(["greenforest", "artists", "remove-image", "a1", "2"]).unwrap();
        match cli.command {
            Commands::Artists {
                command: ArtistCommand::RemoveImage { id, image },
            } => {
                assert_eq!(id, "a1");
                assert_eq!(image, 2);
            }
            _ => panic!("expected artists remove-image"),
        }
        assert!(Cli::try_parse_from(["greenforest", "artists", "remove-image", "a1", "0"]).is_err());
    }

    #[test]
    fn style_requires_describe() {
        assert!(Cli::try_parse_from(["greenforest", "events", "new", "--style", "日系"]).is_err());
    }
}
