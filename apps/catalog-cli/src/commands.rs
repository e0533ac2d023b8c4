//! Subcommands and their handlers

use crate::config::AppConfig;
use crate::output::Output;
use crate::seed;
use anyhow::{Context, Result};
use clap::Subcommand;
use network_probe::NetworkProbeModule;
use pokemon_reviews::{PokemonReviewsApi, PokemonReviewsModule};
use run_clubs::{ClubCategory, RunClubsApi, RunClubsModule};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply the migrations of every module
    Migrate,
    /// Insert sample Pokemon and clubs into empty catalogs
    Seed,
    /// Pokemon reviews catalog
    #[command(subcommand)]
    Pokemon(PokemonCommand),
    /// Run clubs catalog
    #[command(subcommand)]
    Clubs(ClubCommand),
    /// Send one probe to the configured host
    Ping,
}

#[derive(Debug, Subcommand)]
pub enum PokemonCommand {
    List,
    Show { id: i32 },
    /// Look up by name, ignoring case
    Find { name: String },
    /// Average review rating
    Rating { id: i32 },
    Count,
    /// Distinct category names
    Categories,
    ByCategory { category: String },
    Delete { id: i32 },
}

#[derive(Debug, Subcommand)]
pub enum ClubCommand {
    List {
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long)]
        limit: Option<u64>,
    },
    Show { id: i32 },
    /// Look up by title, ignoring case
    Find { title: String },
    Count,
    /// Distinct state codes
    States,
    ByState { state: String },
    ByCity { city: String },
    ByCategory {
        category: ClubCategory,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long)]
        limit: Option<u64>,
    },
    Delete { id: i32 },
}

pub async fn run(command: Command, config: &AppConfig, out: Output) -> Result<()> {
    match command {
        Command::Migrate => {
            let db = open(config).await?;
            PokemonReviewsModule::migrate(&db).await?;
            RunClubsModule::migrate(&db).await?;
            out.message("Migrations applied")
        }
        Command::Seed => {
            let db = open(config).await?;
            let pokemon =
                PokemonReviewsModule::init(db.clone(), config.pokemon_reviews.clone()).await?;
            let clubs = RunClubsModule::init(db, config.run_clubs.clone()).await?;
            let report = seed::run(pokemon.api().as_ref(), clubs.api().as_ref()).await?;
            out.message(&format!(
                "Seeded {} pokemon and {} clubs",
                report.pokemon, report.clubs
            ))
        }
        Command::Pokemon(cmd) => {
            let db = open(config).await?;
            let module = PokemonReviewsModule::init(db, config.pokemon_reviews.clone()).await?;
            run_pokemon(cmd, &module, out).await
        }
        Command::Clubs(cmd) => {
            let db = open(config).await?;
            let module = RunClubsModule::init(db, config.run_clubs.clone()).await?;
            run_clubs(cmd, &module, out).await
        }
        Command::Ping => {
            let service = NetworkProbeModule::init(&config.network_probe).service();
            let status = service.send_ping().await;
            out.message(&status)
        }
    }
}

async fn open(config: &AppConfig) -> Result<Arc<DatabaseConnection>> {
    let db = catalog_db::connect(&config.database)
        .await
        .with_context(|| format!("cannot open {} database", config.database.backend()))?;
    Ok(Arc::new(db))
}

async fn run_pokemon(cmd: PokemonCommand, module: &PokemonReviewsModule, out: Output) -> Result<()> {
    let api = module.api();
    match cmd {
        PokemonCommand::List => out.pokemon_list(&api.list_pokemon().await?),
        PokemonCommand::Show { id } => out.pokemon(&api.get_pokemon(id).await?),
        PokemonCommand::Find { name } => out.pokemon(&api.get_pokemon_by_name(&name).await?),
        PokemonCommand::Rating { id } => out.scalar(api.get_pokemon_rating(id).await?.round_dp(2)),
        PokemonCommand::Count => out.scalar(api.count_pokemon().await?),
        PokemonCommand::Categories => out.values(&api.list_categories().await?),
        PokemonCommand::ByCategory { category } => {
            out.pokemon_list(&api.get_pokemon_by_category(&category).await?)
        }
        PokemonCommand::Delete { id } => out.message(&delete_message(
            module.client().delete(id).await,
            id,
        )),
    }
}

async fn run_clubs(cmd: ClubCommand, module: &RunClubsModule, out: Output) -> Result<()> {
    let api = module.api();
    match cmd {
        ClubCommand::List { offset, limit } => {
            out.club_list(&api.list_clubs_page(offset, limit).await?)
        }
        ClubCommand::Show { id } => out.club(&api.get_club(id).await?),
        ClubCommand::Find { title } => out.club(&api.get_club_by_title(&title).await?),
        ClubCommand::Count => out.scalar(api.count_clubs().await?),
        ClubCommand::States => out.values(&api.list_states().await?),
        ClubCommand::ByState { state } => out.club_list(&api.get_clubs_by_state(&state).await?),
        ClubCommand::ByCity { city } => out.club_list(&api.get_clubs_by_city(&city).await?),
        ClubCommand::ByCategory {
            category,
            offset,
            limit,
        } => out.club_list(&api.get_clubs_by_category(category, offset, limit).await?),
        ClubCommand::Delete { id } => out.message(&delete_message(
            module.client().delete(id).await,
            id,
        )),
    }
}

fn delete_message(deleted: bool, id: i32) -> String {
    if deleted {
        format!("Deleted {}", id)
    } else {
        format!("Nothing deleted for {}", id)
    }
}
