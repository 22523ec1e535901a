// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ShelfSense - terminal client for the inventory dashboard.
//!
//! This is the binary entry point. Each subcommand maps onto one dashboard
//! screen: signing in, the role-gated sidebar, and the resource screens.

mod account;
mod render;
mod resources;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use clap::{Parser, Subcommand};
use shelfsense_api::{ApiClient, Category, Product, ProductShelf, Shelf};
use shelfsense_config::ShelfsenseConfig;
use shelfsense_core::ShelfError;
use shelfsense_security::{RedactingWriter, SecretList};
use shelfsense_session::{FileTokenStore, Section, SessionStore};

use crate::resources::{ResourceAction, RestockAction};

/// ShelfSense - terminal client for the inventory dashboard.
#[derive(Parser, Debug)]
#[command(name = "shelfsense", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and store the session.
    Login {
        /// Account email; prompted for when omitted.
        #[arg(long)]
        email: Option<String>,
    },
    /// Discard the stored session.
    Logout,
    /// Show the signed-in role and the sidebar it unlocks.
    Whoami {
        /// Viewport width used to pick the sidebar layout.
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },
    /// Manage products.
    Products {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage product categories.
    Categories {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage shelves.
    Shelves {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage product-to-shelf mappings.
    ProductShelf {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage restock tasks.
    RestockTasks {
        #[command(subcommand)]
        action: RestockAction,
    },
}

/// Everything a subcommand needs, built once at startup.
pub struct Context {
    pub config: ShelfsenseConfig,
    pub session: Arc<SessionStore>,
    pub client: ApiClient,
    pub secrets: SecretList,
    pub use_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => shelfsense_config::load_and_validate_path(path),
        None => shelfsense_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            shelfsense_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let use_color = !cli.plain && std::io::stdout().is_terminal();
    let secrets: SecretList = Arc::new(RwLock::new(Vec::new()));
    init_tracing(&config.app.log_level, Arc::clone(&secrets));

    let ctx = match build_context(config, secrets, use_color) {
        Ok(ctx) => ctx,
        Err(e) => exit_with(&e, use_color),
    };

    if let Err(e) = run(&ctx, cli.command).await {
        exit_with(&e, use_color);
    }
}

async fn run(ctx: &Context, command: Commands) -> Result<(), ShelfError> {
    match command {
        Commands::Login { email } => account::run_login(ctx, email).await,
        Commands::Logout => account::run_logout(ctx),
        Commands::Whoami { width } => account::run_whoami(ctx, width),
        Commands::Products { action } => {
            resources::run::<Product>(ctx, Section::Inventory, action).await
        }
        Commands::Categories { action } => {
            resources::run::<Category>(ctx, Section::Inventory, action).await
        }
        Commands::Shelves { action } => {
            resources::run::<Shelf>(ctx, Section::Inventory, action).await
        }
        Commands::ProductShelf { action } => {
            resources::run::<ProductShelf>(ctx, Section::Inventory, action).await
        }
        Commands::RestockTasks { action } => resources::run_restock(ctx, action).await,
    }
}

/// Opens the persisted session and the HTTP client.
fn build_context(
    config: ShelfsenseConfig,
    secrets: SecretList,
    use_color: bool,
) -> Result<Context, ShelfError> {
    let store = FileTokenStore::new(&config.session.store_path);
    let session = Arc::new(SessionStore::new(Arc::new(store)));
    for value in session.secret_values() {
        RedactingWriter::<std::io::Stderr>::add_secret(&secrets, value);
    }

    let client = ApiClient::new(&config.api, Arc::clone(&session))?;
    Ok(Context {
        config,
        session,
        client,
        secrets,
        use_color,
    })
}

fn exit_with(err: &ShelfError, use_color: bool) -> ! {
    if use_color {
        use colored::Colorize;
        eprintln!("{}: {err}", "error".red().bold());
    } else {
        eprintln!("error: {err}");
    }
    if matches!(err, ShelfError::Unauthenticated) {
        eprintln!("  sign in with: shelfsense login");
    }
    std::process::exit(1);
}

/// Initialize the tracing subscriber with an env-filter.
///
/// Log lines go to stderr through a [`RedactingWriter`] so stored tokens
/// never reach the terminal in clear text.
fn init_tracing(log_level: &str, secrets: SecretList) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelfsense={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(move || RedactingWriter::new(std::io::stderr(), Arc::clone(&secrets)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_loads_config_defaults() {
        let config = shelfsense_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.app.log_level, "info");
    }

    #[test]
    fn cli_parses_resource_commands() {
        let cli = Cli::try_parse_from([
            "shelfsense",
            "products",
            "update",
            "7",
            "--set",
            "productName=Rice",
        ])
        .expect("valid command line");
        match cli.command {
            Commands::Products {
                action: ResourceAction::Update { id, fields },
            } => {
                assert_eq!(id, 7);
                assert_eq!(fields, vec![("productName".to_string(), "Rice".to_string())]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_restock_filters() {
        let cli = Cli::try_parse_from([
            "shelfsense",
            "--plain",
            "restock-tasks",
            "list",
            "--status",
            "pending",
            "--id",
            "3",
        ])
        .expect("valid command line");
        assert!(cli.plain);
        assert!(matches!(
            cli.command,
            Commands::RestockTasks {
                action: RestockAction::List { ref status, id: Some(3), json: false }
            } if status.as_deref() == Some("pending")
        ));
    }

    #[test]
    fn cli_rejects_malformed_set() {
        let err = Cli::try_parse_from(["shelfsense", "shelves", "create", "--set", "capacity"]);
        assert!(err.is_err());
    }

    #[test]
    fn whoami_width_defaults() {
        let cli = Cli::try_parse_from(["shelfsense", "whoami"]).expect("valid command line");
        assert!(matches!(cli.command, Commands::Whoami { width: 1280 }));
    }
}
