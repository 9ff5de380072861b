//! Filmoteca CLI - Catalog management from the terminal
//!
//! Thin client over the Filmoteca HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use api::{Catalog, FilmotecaClient};
use config::Config;

#[derive(Parser)]
#[command(name = "filmoteca")]
#[command(about = "Filmoteca CLI - Film, actor, and director catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movie catalog
    Movie {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Actor catalog
    Actor {
        #[command(subcommand)]
        action: ActorAction,
    },

    /// Director catalog
    Director {
        #[command(subcommand)]
        action: DirectorAction,
    },

    /// Check that the API is reachable
    Health,

    /// Show or change configuration
    Config {
        /// New API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Args, Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieFields {
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    release_year: Option<i32>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    genre: Option<String>,
    /// Running time in minutes
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_minutes: Option<i32>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    synopsis: Option<String>,
}

#[derive(Args, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActorFields {
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<NaiveDate>,
}

#[derive(Args, Serialize)]
#[serde(rename_all = "camelCase")]
struct DirectorFields {
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    wikipedia_link: Option<String>,
}

#[derive(Subcommand)]
enum MovieAction {
    /// Search movies by exact name
    Search { name: String },
    /// Register a movie (requires --name)
    Register {
        #[command(flatten)]
        fields: MovieFields,
    },
    /// Update the given fields of a movie
    Update {
        id: i64,
        #[command(flatten)]
        fields: MovieFields,
    },
    /// Delete a movie
    Delete {
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ActorAction {
    /// Search actors by exact name
    Search { name: String },
    /// Register an actor (requires --name and --nationality)
    Register {
        #[command(flatten)]
        fields: ActorFields,
    },
    /// Update the given fields of an actor
    Update {
        id: i64,
        #[command(flatten)]
        fields: ActorFields,
    },
    /// Delete an actor
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DirectorAction {
    /// Search directors by exact name
    Search { name: String },
    /// Register a director (requires --name and --nationality)
    Register {
        #[command(flatten)]
        fields: DirectorFields,
    },
    /// Update the given fields of a director
    Update {
        id: i64,
        #[command(flatten)]
        fields: DirectorFields,
    },
    /// Delete a director
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

/// Entity-independent form of the per-catalog subcommands
enum Action<F> {
    Search(String),
    Register(F),
    Update(i64, F),
    Delete(i64, bool),
}

impl From<MovieAction> for Action<MovieFields> {
    fn from(action: MovieAction) -> Self {
        match action {
            MovieAction::Search { name } => Action::Search(name),
            MovieAction::Register { fields } => Action::Register(fields),
            MovieAction::Update { id, fields } => Action::Update(id, fields),
            MovieAction::Delete { id, yes } => Action::Delete(id, yes),
        }
    }
}

impl From<ActorAction> for Action<ActorFields> {
    fn from(action: ActorAction) -> Self {
        match action {
            ActorAction::Search { name } => Action::Search(name),
            ActorAction::Register { fields } => Action::Register(fields),
            ActorAction::Update { id, fields } => Action::Update(id, fields),
            ActorAction::Delete { id, yes } => Action::Delete(id, yes),
        }
    }
}

impl From<DirectorAction> for Action<DirectorFields> {
    fn from(action: DirectorAction) -> Self {
        match action {
            DirectorAction::Search { name } => Action::Search(name),
            DirectorAction::Register { fields } => Action::Register(fields),
            DirectorAction::Update { id, fields } => Action::Update(id, fields),
            DirectorAction::Delete { id, yes } => Action::Delete(id, yes),
        }
    }
}

/// Fields every catalog requires before a register request is sent
trait RequiredFields {
    fn missing(&self) -> Vec<&'static str>;
}

impl RequiredFields for MovieFields {
    fn missing(&self) -> Vec<&'static str> {
        missing_flags(&[("--name", self.name.is_some())])
    }
}

impl RequiredFields for ActorFields {
    fn missing(&self) -> Vec<&'static str> {
        missing_flags(&[
            ("--name", self.name.is_some()),
            ("--nationality", self.nationality.is_some()),
        ])
    }
}

impl RequiredFields for DirectorFields {
    fn missing(&self) -> Vec<&'static str> {
        missing_flags(&[
            ("--name", self.name.is_some()),
            ("--nationality", self.nationality.is_some()),
        ])
    }
}

fn missing_flags(flags: &[(&'static str, bool)]) -> Vec<&'static str> {
    flags
        .iter()
        .filter(|(_, present)| !present)
        .map(|(flag, _)| *flag)
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Movie { action } => cmd_catalog(Catalog::Movie, action.into()).await,
        Commands::Actor { action } => cmd_catalog(Catalog::Actor, action.into()).await,
        Commands::Director { action } => cmd_catalog(Catalog::Director, action.into()).await,
        Commands::Health => cmd_health().await,
        Commands::Config { base_url } => cmd_config(base_url),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_catalog<F>(catalog: Catalog, action: Action<F>) -> Result<()>
where
    F: Serialize + RequiredFields,
{
    let config = Config::load()?;
    let client = FilmotecaClient::new(&config.base_url);

    match action {
        Action::Search(name) => {
            let records = client.search(catalog, &name).await?;
            println!("{}", format!("{} result(s):", records.len()).bold());
            for record in &records {
                print_record(record);
            }
        }

        Action::Register(fields) => {
            let missing = fields.missing();
            if !missing.is_empty() {
                bail!("Missing required flags: {}", missing.join(", "));
            }
            let message = client.register(catalog, &fields).await?;
            println!("{} {}", "✓".green(), message);
        }

        Action::Update(id, fields) => {
            let message = client.update(catalog, id, &fields).await?;
            println!("{} {}", "✓".green(), message);
        }

        Action::Delete(id, yes) => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete {} {}?", catalog.prefix(), id))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !confirmed {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }
            }
            let message = client.delete(catalog, id).await?;
            println!("{} {}", "✓".green(), message);
        }
    }

    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = FilmotecaClient::new(&config.base_url);

    print!("Checking {}... ", config.base_url);
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Filmoteca API at {}", config.base_url);
        }
    }

    Ok(())
}

fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = base_url {
        config.set_base_url(&url);
        config.save()?;
        println!("{} Base URL set to {}", "✓".green(), config.base_url);
    }

    println!("{}", "Configuration:".bold());
    println!("  Config file: {:?}", Config::config_path()?);
    println!("  Base URL:    {}", config.base_url);

    Ok(())
}

fn print_record(record: &serde_json::Value) {
    let id = record.get("id").map(|v| v.to_string()).unwrap_or_default();
    let name = record.get("name").and_then(|v| v.as_str()).unwrap_or("-");
    println!("  {} {}", format!("#{}", id).dimmed(), name.cyan().bold());

    if let Some(fields) = record.as_object() {
        for (key, value) in fields {
            let skipped = matches!(key.as_str(), "id" | "name" | "createdAt" | "updatedAt");
            if skipped || value.is_null() {
                continue;
            }
            let shown = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            println!("      {}: {}", key.dimmed(), shown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_register_flags_serialize_as_camel_case() {
        let cli = Cli::parse_from([
            "filmoteca",
            "actor",
            "register",
            "--name",
            "Chris Hemsworth",
            "--nationality",
            "Australian",
            "--date-of-birth",
            "1983-08-11",
        ]);

        let Commands::Actor {
            action: ActorAction::Register { fields },
        } = cli.command
        else {
            panic!("expected actor register");
        };

        assert!(fields.missing().is_empty());
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({
                "name": "Chris Hemsworth",
                "nationality": "Australian",
                "dateOfBirth": "1983-08-11"
            })
        );
    }

    #[test]
    fn test_update_sends_only_given_fields() {
        let cli = Cli::parse_from([
            "filmoteca",
            "director",
            "update",
            "3",
            "--nationality",
            "Chile",
        ]);

        let Commands::Director {
            action: DirectorAction::Update { id, fields },
        } = cli.command
        else {
            panic!("expected director update");
        };

        assert_eq!(id, 3);
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({ "nationality": "Chile" })
        );
        assert_eq!(fields.missing(), vec!["--name"]);
    }
}
