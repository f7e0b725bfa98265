//! # Site Persona CLI (`persona`)
//!
//! Drives the interest tracker and recommendation engine against a
//! JSON-file store, the way the website drives them against browser local
//! storage.
//!
//! ## Usage
//!
//! ```bash
//! persona --config ./config/persona.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `persona track <KEY>...` | Record interest keys (tags, filters, titles) |
//! | `persona resolve <KEY>` | Show the category a key counts toward |
//! | `persona recommend` | Hero copy and up to three recommended services |
//! | `persona profile` | Ranked interest profile |
//! | `persona services` | List the catalog, optionally by popularity |
//! | `persona view <TITLE>` | Record a service view |
//! | `persona reset` | Clear tracked data |
//!
//! ## Examples
//!
//! ```bash
//! # A visitor filters the portfolio by "Cybersecurity" three times
//! persona track Cybersecurity Cybersecurity Cybersecurity
//!
//! # Next page load
//! persona recommend --json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use site_persona::{config, recommend, services, track};
use tracing_subscriber::EnvFilter;

/// Site Persona CLI — interest tracking and personalized recommendations.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Without one, storage defaults to `./data/storage.json` and the
/// built-in catalog is used.
#[derive(Parser)]
#[command(
    name = "persona",
    about = "Site Persona — interest tracking and personalized service recommendations",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/persona.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Record one or more interest keys.
    ///
    /// Each key is resolved to a business category and that category's
    /// count is incremented. Unknown keys are ignored.
    Track {
        /// Interest keys, e.g. `React`, `SIEM`, `Shopify`, or a service title.
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Show which category an interest key resolves to.
    Resolve {
        key: String,
    },

    /// Compute hero copy and recommended services from the stored profile.
    Recommend {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the stored interest profile, highest count first.
    Profile {
        /// Print the stored JSON form.
        #[arg(long)]
        json: bool,
    },

    /// List catalog services.
    Services {
        /// Sort by recorded views instead of catalog order.
        #[arg(long)]
        popular: bool,
    },

    /// Record a view of a catalog service.
    ///
    /// Bumps the service's popularity and tracks its title as interest.
    View {
        /// Exact service title.
        title: String,
    },

    /// Clear the interest profile and service popularity.
    Reset,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("site_persona={level},site_persona_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_minimal(&cli.config)?;
    init_tracing(&cfg.logging.level);

    match cli.command {
        Commands::Track { keys } => track::run_track(&cfg, &keys)?,
        Commands::Resolve { key } => track::run_resolve(&key)?,
        Commands::Recommend { json } => recommend::run_recommend(&cfg, json)?,
        Commands::Profile { json } => recommend::run_profile(&cfg, json)?,
        Commands::Services { popular } => services::run_services(&cfg, popular)?,
        Commands::View { title } => services::run_view(&cfg, &title)?,
        Commands::Reset => recommend::run_reset(&cfg)?,
    }

    Ok(())
}
