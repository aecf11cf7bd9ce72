//! Witherstex CLI - session migrations, catalogue seeding and dictionary checks.
//!
//! # Usage
//!
//! ```bash
//! # Create the session table used by the storefront
//! wx-cli migrate
//!
//! # Insert the products of seed/products.yaml that are not in the catalogue yet
//! wx-cli seed
//! wx-cli seed --file other.yaml --dry-run
//!
//! # Report untranslated dictionary entries
//! wx-cli i18n coverage
//! wx-cli i18n coverage --language zh
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run the `tower_sessions` store migration
//! - `seed` - Seed the hosted catalogue from a YAML file
//! - `i18n coverage` - Dictionary coverage per language

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wx-cli")]
#[command(author, version, about = "Witherstex CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the session store migration
    Migrate,
    /// Seed the catalogue from a YAML file
    Seed {
        /// Path to the seed file
        #[arg(short, long, default_value = commands::seed::DEFAULT_SEED_FILE)]
        file: String,

        /// Validate and report without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Inspect the translation dictionary
    I18n {
        #[command(subcommand)]
        action: I18nAction,
    },
}

#[derive(Subcommand)]
enum I18nAction {
    /// Report empty entries and entries identical to French
    Coverage {
        /// Only check one language (`fr`, `en`, `zh`)
        #[arg(short, long)]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::sessions().await?,
        Commands::Seed { file, dry_run } => commands::seed::products(&file, dry_run).await?,
        Commands::I18n { action } => match action {
            I18nAction::Coverage { language } => {
                commands::i18n::coverage(language.as_deref())?;
            }
        },
    }
    Ok(())
}
