use anyhow::Result;
use clap::Parser;

mod artifact;
mod cli;
mod commands;
mod config;
mod constructor;
mod deploy;
mod error;
mod node;
mod params;
mod wallet;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	match &cli.command {
		Command::RunLocal => commands::node::run(&cli).await,
		Command::DeployResolver(args) => commands::deploy::run(&cli, args).await,
		Command::Account(args) => commands::account::run(&cli, args).await,
	}
}
