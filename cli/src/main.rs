//! AbleToTrip management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create the member table on the default database
//! att-manage migrate
//!
//! # Create a regular member without a usable password
//! att-manage createuser --email traveler@abletotrip.com
//!
//! # Create an administrator on another database
//! ATT_SUPERUSER_PASSWORD=... att-manage createsuperuser --email admin@abletotrip.com --database replica
//!
//! # Reset a member's password
//! att-manage changepassword --email traveler@abletotrip.com --password ...
//! ```
//!
//! Connection settings come from `DATABASE_URL` (alias `default`) and
//! `DATABASE_URL_<ALIAS>` for every other alias.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use att_shared::{AppConfig, DEFAULT_DB_ALIAS};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "att-manage")]
#[command(author, version, about = "AbleToTrip account management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending schema migrations
    Migrate {
        /// Database alias to migrate
        #[arg(long, default_value = DEFAULT_DB_ALIAS)]
        database: String,
    },
    /// Create a regular member
    Createuser {
        /// Login email
        #[arg(short, long)]
        email: String,

        /// Initial password; the account gets an unusable password when omitted
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long, default_value = DEFAULT_DB_ALIAS)]
        database: String,
    },
    /// Create an administrator
    Createsuperuser {
        /// Login email
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "ATT_SUPERUSER_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, default_value = DEFAULT_DB_ALIAS)]
        database: String,
    },
    /// Replace a member's password
    Changepassword {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        #[arg(long, default_value = DEFAULT_DB_ALIAS)]
        database: String,
    },
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();
    logging::init(&config.logging);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Migrate { database } => commands::migrate::run(config, &database).await,
        Commands::Createuser {
            email,
            password,
            database,
        } => commands::user::create_user(config, &database, &email, password.as_deref()).await,
        Commands::Createsuperuser {
            email,
            password,
            database,
        } => commands::user::create_superuser(config, &database, &email, &password).await,
        Commands::Changepassword {
            email,
            password,
            database,
        } => commands::user::change_password(config, &database, &email, &password).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_database_defaults_to_default_alias() {
        let cli = Cli::try_parse_from(["att-manage", "migrate"]).unwrap();
        assert!(matches!(cli.command, Commands::Migrate { ref database } if database == "default"));
    }

    #[test]
    fn test_createuser_password_is_optional() {
        let cli = Cli::try_parse_from([
            "att-manage",
            "createuser",
            "--email",
            "traveler@abletotrip.com",
            "--database",
            "replica",
        ])
        .unwrap();

        match cli.command {
            Commands::Createuser {
                email,
                password,
                database,
            } => {
                assert_eq!(email, "traveler@abletotrip.com");
                assert!(password.is_none());
                assert_eq!(database, "replica");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_changepassword_requires_password() {
        let result = Cli::try_parse_from([
            "att-manage",
            "changepassword",
            "--email",
            "traveler@abletotrip.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_createsuperuser_accepts_explicit_password() {
        let cli = Cli::try_parse_from([
            "att-manage",
            "createsuperuser",
            "-e",
            "admin@abletotrip.com",
            "-p",
            "r00t",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Createsuperuser { ref password, .. } if password == "r00t"
        ));
    }
}
