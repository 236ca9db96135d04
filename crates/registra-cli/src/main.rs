//! registra - command-line client for the record-keeping API.
//!
//! This is a thin wrapper over `registra-core`, intended for manual use
//! and for exercising the API from scripts. The session persists in the
//! platform credential store between invocations.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::Ctx;
use registra_core::ApiError;

#[tokio::main]
async fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = match Ctx::build(cli.api_url.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::error(&format!("{e:#}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut ctx, cli.command).await {
        // An expired session is the one failure with a prescribed
        // follow-up: tear it down so the next invocation starts clean.
        if let Some(ApiError::Auth) = e.downcast_ref::<ApiError>() {
            ctx.manager.handle_auth_error();
            output::error("Session expired or invalid, run `registra login`");
        } else {
            output::error(&format!("{e:#}"));
        }
        std::process::exit(1);
    }
}

async fn run(ctx: &mut Ctx, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => commands::auth::login(ctx, args).await,
        Commands::Logout => commands::auth::logout(ctx),
        Commands::Register(args) => commands::auth::register(ctx, args).await,
        Commands::Whoami => commands::auth::whoami(ctx).await,
        Commands::ChangePassword(args) => commands::auth::change_password(ctx, args).await,
        Commands::UpdateProfile(args) => commands::auth::update_profile(ctx, args).await,
        Commands::People { action } => commands::records::people(ctx, action).await,
        Commands::Vehicles { action } => commands::records::vehicles(ctx, action).await,
        Commands::Properties { action } => commands::records::properties(ctx, action).await,
        Commands::Locations { action } => commands::records::locations(ctx, action).await,
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
