use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod migrate;
mod seed;

#[derive(Parser)]
#[command(about = "portfolio content service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the public and admin api
    Listen,
    /// Apply pending database migrations
    Migrate,
    /// Fill empty content tables with the initial portfolio entries
    Seed,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::Seed) => {
            seed::apply().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let cmd = Cmd::try_parse_from(["portfolio", "seed"]).unwrap();
        assert!(matches!(cmd.command, Some(SubCommandType::Seed)));
        let cmd = Cmd::try_parse_from(["portfolio"]).unwrap();
        assert!(cmd.command.is_none());
        assert!(Cmd::try_parse_from(["portfolio", "serve"]).is_err());
    }
}
