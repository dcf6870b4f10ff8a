//! CLI administration tool for restaurant-api.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a manager account
//! cargo run --bin admin -- user create --email boss@test.com --role manager
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Promote a user
//! cargo run --bin admin -- user role jan@test.com admin
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BCRYPT_COST` (optional): Password hashing cost (default: 12)

use restaurant_api::domain::entities::{NewUser, Role};
use restaurant_api::domain::repositories::UserRepository;
use restaurant_api::infrastructure::persistence::PgUserRepository;
use restaurant_api::utils::password::hash_password;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing restaurant-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user account
    Create {
        /// Email used to log in
        #[arg(short, long)]
        email: Option<String>,

        /// Role: user, manager or admin (prompted if omitted)
        #[arg(short, long)]
        role: Option<Role>,

        /// Nationality claim (e.g. "Polish")
        #[arg(short, long)]
        nationality: Option<String>,

        /// Date of birth as YYYY-MM-DD
        #[arg(short, long)]
        date_of_birth: Option<NaiveDate>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Change the role of a user
    Role {
        /// Email of the user
        email: String,

        /// New role: user, manager or admin
        role: Role,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            email,
            role,
            nationality,
            date_of_birth,
            yes,
        } => {
            create_user(repo, email, role, nationality, date_of_birth, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Role { email, role } => {
            repo.set_role(&email, role)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to change role: {}", e))?;

            println!(
                "{} {} is now {}",
                "✅".green(),
                email.cyan(),
                role.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email and role (or use provided)
/// 2. Prompt for password twice
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash password with bcrypt and store
async fn create_user(
    repo: Arc<PgUserRepository>,
    email: Option<String>,
    role: Option<Role>,
    nationality: Option<String>,
    date_of_birth: Option<NaiveDate>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    if repo
        .email_exists(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    {
        anyhow::bail!("That email is taken");
    }

    let role = match role {
        Some(r) => r,
        None => {
            let names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
            let index = Select::new()
                .with_prompt("Role")
                .items(&names)
                .default(0)
                .interact()?;
            Role::ALL[index]
        }
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.len() >= 6 {
                Ok(())
            } else {
                Err("Password must be at least 6 characters")
            }
        })
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Email: {}", email.cyan());
    println!("  Role:  {}", role.to_string().cyan());
    if let Some(n) = &nationality {
        println!("  Nationality: {}", n.cyan());
    }
    if let Some(d) = date_of_birth {
        println!("  Date of birth: {}", d.to_string().cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST);

    let password_hash = hash_password(password, cost)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let id = repo
        .create(NewUser {
            email,
            first_name: None,
            last_name: None,
            date_of_birth,
            nationality,
            password_hash,
            role,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        id.to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Email                          Name                 Role
///   ─────────────────────────────────────────────────────────────────
///   1   jan@test.com                   Jan Kowalski         Manager
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for user in &users {
        let role = match user.role {
            Role::Admin => user.role.to_string().red(),
            Role::Manager => user.role.to_string().yellow(),
            Role::User => user.role.to_string().green(),
        };

        println!(
            "  {:<3} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.full_name().trim(),
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays row counts of the main tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let restaurants_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;

    let dishes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dishes")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:       {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Restaurants: {}",
        restaurants_count.to_string().bright_green().bold()
    );
    println!(
        "  Dishes:      {}",
        dishes_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Applied migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
