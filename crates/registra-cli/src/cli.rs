//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line client for the record-keeping API.
#[derive(Parser, Debug)]
#[command(name = "registra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API base URL (overrides config and REGISTRA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session
    Login(LoginArgs),
    /// Sign out and clear the persisted session
    Logout,
    /// Register a new account (does not sign in)
    Register(RegisterArgs),
    /// Show the authenticated user's profile
    Whoami,
    /// Change the account password
    ChangePassword(ChangePasswordArgs),
    /// Update profile fields
    UpdateProfile(UpdateProfileArgs),
    /// Person records
    People {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Vehicle records
    Vehicles {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Property records
    Properties {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Location records
    Locations {
        #[command(subcommand)]
        action: LocationAction,
    },
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    /// Must match --password; checked before any request is sent
    #[arg(long)]
    pub confirm: String,
}

#[derive(Args, Debug)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    #[arg(long)]
    pub current: String,

    #[arg(long)]
    pub new: String,
}

/// The shared CRUD shape for people, vehicles, and properties.
#[derive(Subcommand, Debug)]
pub enum RecordAction {
    /// Fetch all records, optionally filtered client-side
    List {
        /// Case-insensitive text filter applied to the fetched list
        #[arg(long)]
        query: Option<String>,
    },
    /// Fetch one record by id
    Get { id: i64 },
    /// Server-side search; parameters as a JSON object
    Search {
        #[arg(long)]
        json: String,
    },
    /// Create a record from a JSON payload, optionally attaching a photo
    Create {
        #[arg(long)]
        data: String,

        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Update a record from a JSON payload
    Update {
        id: i64,

        #[arg(long)]
        data: String,

        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Delete a record (asks for confirmation unless --yes)
    Delete {
        id: i64,

        #[arg(long)]
        yes: bool,
    },
}

/// Locations get the shared shape plus proximity search.
#[derive(Subcommand, Debug)]
pub enum LocationAction {
    #[command(flatten)]
    Record(RecordAction),
    /// Locations within a radius (meters) of a point
    Nearby {
        #[arg(long)]
        lat: f64,

        #[arg(long)]
        lng: f64,

        #[arg(long, default_value_t = 1000.0)]
        radius: f64,
    },
}
