//! Aula CLI
//!
//! Terminal client for the Aula course platform: sign in, browse the
//! catalog, and manage enrollments against any configured server.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use aula_client::api::AulaClient;
use aula_client::{ClientConfig, Session};

use commands::courses::{CoursesCommand, LessonsCommand};
use commands::enrollments::EnrollmentsCommand;
use commands::users::UsersCommand;
use config::{Config, ServerContext};

#[derive(Parser)]
#[command(name = "aula")]
#[command(version, about = "Aula course platform CLI", long_about = None)]
struct Cli {
    /// API server URL (overrides context and environment)
    #[arg(long)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Browse the course catalog
    #[command(subcommand)]
    Courses(CoursesCommand),
    /// Inspect lessons
    #[command(subcommand)]
    Lessons(LessonsCommand),
    /// Manage enrollments
    #[command(subcommand)]
    Enrollments(EnrollmentsCommand),
    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Manage server contexts
    #[command(subcommand)]
    Context(ContextCommand),
}

#[derive(Subcommand)]
enum ContextCommand {
    /// Add or replace a named context
    Add {
        name: String,

        /// Server URL for this context
        server_url: String,

        /// Also switch to the new context
        #[arg(long = "use")]
        use_context: bool,
    },
    /// Switch the current context
    Use { name: String },
    /// List configured contexts
    List,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

/// Precedence: --server-url flag, AULA_BASE_URL, current context, default.
fn resolve_base_url(flag: Option<String>, config: &Config) -> String {
    if let Some(url) = flag {
        return url;
    }
    if let Ok(url) = std::env::var("AULA_BASE_URL") {
        return url;
    }
    if let Some((_, context)) = config.current_context() {
        return context.server_url.clone();
    }
    ClientConfig::default().base_url
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    let base_url = resolve_base_url(cli.server_url, &config);
    let client = AulaClient::new(&ClientConfig::new(base_url), Arc::new(Session::from_home()));

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::cmd_login(&client, &email, &password).await
        }
        Commands::Logout => commands::auth::cmd_logout(&client),
        Commands::Whoami => commands::auth::cmd_whoami(&client),
        Commands::Courses(command) => commands::courses::run(&client, command).await,
        Commands::Lessons(command) => commands::courses::run_lessons(&client, command).await,
        Commands::Enrollments(command) => commands::enrollments::run(&client, command).await,
        Commands::Users(command) => commands::users::run(&client, command).await,
        Commands::Context(command) => run_context(command, config),
    }
}

fn run_context(command: ContextCommand, mut config: Config) -> Result<()> {
    match command {
        ContextCommand::Add {
            name,
            server_url,
            use_context,
        } => {
            config
                .contexts
                .insert(name.clone(), ServerContext { server_url });
            if use_context || config.current_context.is_none() {
                config.current_context = Some(name.clone());
            }
            config.save()?;
            println!("Context '{}' saved.", name);
            Ok(())
        }
        ContextCommand::Use { name } => {
            if !config.contexts.contains_key(&name) {
                anyhow::bail!("Unknown context '{}'", name);
            }
            config.current_context = Some(name.clone());
            config.save()?;
            println!("Switched to context '{}'.", name);
            Ok(())
        }
        ContextCommand::List => {
            if config.contexts.is_empty() {
                println!("No contexts configured.");
                return Ok(());
            }
            for (name, context) in &config.contexts {
                let marker = if config.current_context.as_deref() == Some(name.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {:20} {}", marker, name, context.server_url);
            }
            Ok(())
        }
    }
}
