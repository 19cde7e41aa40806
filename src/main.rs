mod bootstrap;
mod config;
mod database;
mod models;
mod seeds;
mod services;
mod utils;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use config::Config;
use database::MongoDB;
use models::UserInfo;
use services::AuthOutcome;
use utils::AppError;

#[derive(Parser, Debug)]
#[command(name = "user-seeder", version, about = "Seed and inspect the users collection of a MongoDB database")]
struct Cli {
    /// Overrides MONGODB_URI
    #[arg(long, global = true)]
    uri: Option<String>,

    /// Overrides MONGODB_DATABASE
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the default users that are not there yet
    Seed,
    /// Print every user
    Users,
    /// Look a user up by email and check the password
    Auth { email: String, password: String },
    /// Create the scoped user, scratch collection and initial document
    Bootstrap,
    /// Write the bootstrap as a mongo-init.js script (stdout when no path given)
    InitScript {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut config = Config::from_env();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    if let Some(uri) = cli.uri {
        config.database.uri = uri;
    }
    if let Some(name) = cli.database {
        config.database.name = name;
    }

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Commands that need a live connection.
#[derive(Debug, PartialEq)]
enum DbCommand {
    Seed,
    Users,
    Auth { email: String, password: String },
    Bootstrap,
}

#[derive(Debug, PartialEq)]
enum Plan {
    Offline { output: Option<PathBuf> },
    Database(DbCommand),
}

impl From<Command> for Plan {
    fn from(command: Command) -> Self {
        match command {
            Command::InitScript { output } => Plan::Offline { output },
            Command::Seed => Plan::Database(DbCommand::Seed),
            Command::Users => Plan::Database(DbCommand::Users),
            Command::Auth { email, password } => Plan::Database(DbCommand::Auth { email, password }),
            Command::Bootstrap => Plan::Database(DbCommand::Bootstrap),
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<ExitCode, AppError> {
    match Plan::from(command) {
        Plan::Offline { output } => write_init_script(config, output.as_deref()),
        Plan::Database(command) => {
            log::info!("🚀 Connecting to MongoDB...");
            let db = MongoDB::connect(&config.database).await?;

            let result = execute(command, &db, config).await;

            db.shutdown().await;
            result
        }
    }
}

async fn execute(command: DbCommand, db: &MongoDB, config: &Config) -> Result<ExitCode, AppError> {
    match command {
        DbCommand::Seed => {
            seeds::seed_default_users(db, config.bcrypt_cost).await?;
            Ok(ExitCode::SUCCESS)
        }
        DbCommand::Users => {
            let users = services::get_users(db).await?;
            let infos: Vec<UserInfo> = users.iter().map(UserInfo::from).collect();
            println!("{}", to_json(&infos)?);
            Ok(ExitCode::SUCCESS)
        }
        DbCommand::Auth { email, password } => {
            match services::authenticate_user(db, &email, &password).await? {
                AuthOutcome::Authenticated(info) => {
                    println!("{}", to_json(&info)?);
                    Ok(ExitCode::SUCCESS)
                }
                AuthOutcome::NotFound => {
                    println!("User not found");
                    Ok(ExitCode::from(2))
                }
                AuthOutcome::InvalidCredentials => {
                    println!("Invalid credentials");
                    Ok(ExitCode::from(2))
                }
            }
        }
        DbCommand::Bootstrap => {
            let report = bootstrap::run_bootstrap(db.client(), &config.bootstrap).await?;
            log::info!(
                "✅ Bootstrap complete: {}.{} (user {})",
                report.database,
                report.collection,
                report.user
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn write_init_script(config: &Config, output: Option<&Path>) -> Result<ExitCode, AppError> {
    let script = bootstrap::render_init_script(&config.bootstrap);
    match output {
        Some(path) => {
            std::fs::write(path, script)?;
            log::info!("✅ Init script written to {}", path.display());
        }
        None => print!("{}", script),
    }
    Ok(ExitCode::SUCCESS)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
