//! Operator tool for the durable phonebook store.
//!
//! `phonebook <password>` lists every entry; `phonebook <password> <name> <number>`
//! adds one.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::directory::{domain::PersonInput, repo::SeaOrmStore};
use service::DirectoryService;

const USAGE: &str = "Usage: phonebook <password> [<name> <number>]";

#[derive(Parser, Debug)]
#[command(name = "phonebook", about = "List or add phonebook entries", override_usage = USAGE)]
struct Cli {
    /// Database password, substituted for `<password>` in the connection URL
    password: String,
    /// Name of the entry to add
    name: Option<String>,
    /// Number of the entry to add
    number: Option<String>,
    /// Connection URL of the durable store
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

enum Action {
    List,
    Add { name: String, number: String },
}

impl Cli {
    fn action(&self) -> Option<Action> {
        match (&self.name, &self.number) {
            (None, None) => Some(Action::List),
            (Some(name), Some(number)) => Some(Action::Add { name: name.clone(), number: number.clone() }),
            _ => None,
        }
    }
}

fn connection_url(template: &str, password: &str) -> String {
    template.replace("<password>", password)
}

async fn execute(cli: Cli, action: Action) -> anyhow::Result<()> {
    let cfg = configs::DatabaseConfig {
        url: connection_url(&cli.database_url, &cli.password),
        max_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    let directory = DirectoryService::new(Arc::new(SeaOrmStore::new(db.clone())));

    match action {
        Action::List => {
            println!("phonebook:");
            for p in directory.list().await? {
                println!("{} {}", p.name, p.number);
            }
        }
        Action::Add { name, number } => {
            let p = directory.add(PersonInput::new(name, number)).await?;
            println!("added {} number {} to phonebook", p.name, p.number);
        }
    }
    db.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    let Some(action) = cli.action() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    match execute(cli, action).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["phonebook", "--database-url", "postgres://app:<password>@localhost/phonebook"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn password_alone_lists() {
        let cli = parse(&["s3cret"]).unwrap();
        assert!(matches!(cli.action(), Some(Action::List)));
    }

    #[test]
    fn name_and_number_add() {
        let cli = parse(&["s3cret", "Ada Lovelace", "39-44-5323523"]).unwrap();
        match cli.action() {
            Some(Action::Add { name, number }) => {
                assert_eq!(name, "Ada Lovelace");
                assert_eq!(number, "39-44-5323523");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn name_without_number_is_usage_error() {
        let cli = parse(&["s3cret", "Ada Lovelace"]).unwrap();
        assert!(cli.action().is_none());
    }

    #[test]
    fn missing_password_is_rejected() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn password_is_substituted_into_url() {
        assert_eq!(
            connection_url("postgres://app:<password>@db/phonebook", "pw"),
            "postgres://app:pw@db/phonebook"
        );
        assert_eq!(connection_url("sqlite::memory:", "pw"), "sqlite::memory:");
    }
}
