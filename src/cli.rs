use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "ens-resolver",
	about = "CLI for deploying the CCIP-read ENS resolver contract.",
	version
)]
pub struct Cli {
	/// Network to connect to.
	#[arg(long, default_value = "localhost", global = true)]
	pub network: Network,

	/// Override RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Network {
	Localhost,
	Sepolia,
	Mainnet,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Localhost => "localhost",
			Self::Sepolia => "sepolia",
			Self::Mainnet => "mainnet",
		}
	}
}

#[derive(Subcommand)]
pub enum Command {
	/// Start an ephemeral local chain and keep it alive until interrupted.
	RunLocal,

	/// Deploy the resolver contract with the given gateway URL.
	DeployResolver(DeployArgs),

	/// Print a test account derived from the configured mnemonic.
	Account(AccountArgs),
}

#[derive(Args)]
pub struct DeployArgs {
	/// The CCIP gateway URL, usually of form http://api.host.com/r/{sender}/{data}.
	#[arg(long)]
	pub url: String,

	/// Initial signer used to verify off-chain resolutions, uses deployer if not set.
	#[arg(long)]
	pub signer: Option<String>,

	/// Owner of the resolver, uses deployer if not set.
	#[arg(long)]
	pub owner: Option<String>,

	/// Signer manager, uses deployer if not set.
	#[arg(long)]
	pub smanager: Option<String>,

	/// Gateway manager, uses deployer if not set.
	#[arg(long)]
	pub gwmanager: Option<String>,
}

#[derive(Args)]
pub struct AccountArgs {
	/// Account index under the derivation path. Index 0 is the deployer.
	#[arg(long, default_value_t = 0)]
	pub index: u32,
}
