//! User commands.

use anyhow::{bail, Result};
use clap::Subcommand;

use aula_client::api::AulaClient;
use aula_client::models::{UserFilters, UserRole};

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users (admin)
    List {
        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,

        /// Free-text search
        #[arg(long)]
        q: Option<String>,

        /// superadmin, admin, moderator, or user
        #[arg(long)]
        role: Option<String>,

        /// Only active (true) or deactivated (false) users
        #[arg(long)]
        active: Option<bool>,
    },
}

pub async fn run(client: &AulaClient, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List {
            page,
            per_page,
            q,
            role,
            active,
        } => {
            let filters = UserFilters {
                page,
                per_page,
                q,
                role: role.as_deref().map(parse_role).transpose()?,
                is_active: active,
            };
            let result = client.users().list(&filters).await?;

            if result.data.is_empty() {
                println!("No users found.");
                return Ok(());
            }

            println!("{:26} {:30} {:24} {:10} ACTIVE", "ID", "EMAIL", "NAME", "ROLE");
            println!("{}", "-".repeat(100));
            for user in &result.data {
                println!(
                    "{:26} {:30} {:24} {:10} {}",
                    user.id, user.email, user.full_name, user.role, user.is_active
                );
            }
            println!(
                "\nPage {} of {} ({} users total)",
                result.page, result.total_pages, result.total
            );
            Ok(())
        }
    }
}

fn parse_role(value: &str) -> Result<UserRole> {
    match value.to_uppercase().as_str() {
        "SUPERADMIN" => Ok(UserRole::Superadmin),
        "ADMIN" => Ok(UserRole::Admin),
        "MODERATOR" => Ok(UserRole::Moderator),
        "USER" => Ok(UserRole::User),
        other => bail!(
            "Invalid role '{}' (expected: superadmin, admin, moderator, user)",
            other
        ),
    }
}
