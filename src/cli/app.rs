//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;

/// veritrust - Staff identity management and verification
#[derive(Parser, Debug)]
#[command(
    name = "veritrust",
    version,
    about = "Staff identity management and verification",
    long_about = "Manage NGO staff digital identities and verify them in the field.\n\n\
                  Administrators register staff and manage card status.\n\
                  Staff self-register with email confirmation and hold a digital ID card.\n\
                  Verifiers scan QR payloads; every matched scan lands in an audit log."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the local installation (config, state dir, demo data)
    Init {
        /// Force re-initialization, replacing existing local state
        #[arg(short, long)]
        force: bool,

        /// Enable development mode (honors the fixed OTP bypass code)
        #[arg(long)]
        dev: bool,
    },

    /// Administrator commands
    Admin {
        /// The administrator action to run
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Staff commands (login, signup, identity card)
    Staff {
        /// The staff action to run
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Resolve a scanned QR payload against the staff records
    Scan {
        /// The scanned payload (a staff id)
        payload: String,
    },

    /// Show the verification log, newest first
    Logs {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Remote persistence diagnostics
    Sync {
        /// The sync action to run
        #[command(subcommand)]
        action: SyncAction,
    },

    /// Clear the current session
    Logout,

    /// Show version
    Version,
}

/// Administrator subcommands
#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Log in with the shared admin passphrase
    Login {
        /// Administrator email (any non-empty address)
        #[arg(short, long)]
        email: String,

        /// The shared passphrase
        #[arg(short, long)]
        password: String,
    },

    /// Register a new staff member
    Add {
        /// Full name
        #[arg(long)]
        full_name: String,

        /// Job role
        #[arg(long)]
        role: String,

        /// Department
        #[arg(long)]
        department: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Card expiry date (ISO 8601; defaults to one year from today)
        #[arg(long)]
        valid_until: Option<String>,
    },

    /// Toggle a staff record's status (active <-> suspended, expired -> active)
    Toggle {
        /// Staff record id
        id: String,
    },

    /// List all staff records
    List,

    /// Summarize recent verification activity
    Insights,
}

/// Staff subcommands
#[derive(Subcommand, Debug)]
pub enum StaffAction {
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Start self-registration (sends a confirmation code)
    Signup {
        /// Full name
        #[arg(long)]
        full_name: String,

        /// Job role
        #[arg(long)]
        role: String,

        /// Department
        #[arg(long)]
        department: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Chosen password
        #[arg(long)]
        password: String,
    },

    /// Confirm the emailed code and activate the account
    Verify {
        /// The 6-digit code
        code: String,
    },

    /// Show the logged-in member's digital identity card
    Card,
}

/// Sync subcommands
#[derive(Subcommand, Debug)]
pub enum SyncAction {
    /// Show journaled remote persistence failures
    Status,

    /// Re-attempt journaled failures
    Retry,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Init { force, dev } => commands::init::init(force, dev, mode),
        Command::Admin { action } => commands::admin::admin_cmd(action, mode),
        Command::Staff { action } => commands::staff::staff_cmd(action, mode),
        Command::Scan { payload } => commands::scan::scan(&payload, mode),
        Command::Logs { limit } => commands::logs::list(limit, mode),
        Command::Sync { action } => commands::sync::sync_cmd(&action, mode),
        Command::Logout => commands::logout::logout(mode),
        Command::Version => {
            println!("veritrust v{}", crate::VERSION);
            Ok(())
        },
    }
}
