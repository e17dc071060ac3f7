use anyhow::{Context, Result};

use crate::artifact::Artifact;
use crate::cli::{Cli, DeployArgs};
use crate::commands::{resolve_deployer, resolve_rpc};
use crate::config::Config;
use crate::constructor::ConstructorArgs;
use crate::deploy;
use crate::error::Error;
use crate::params::{self, RawParams};
use crate::wallet;

pub async fn run(cli: &Cli, args: &DeployArgs) -> Result<()> {
	let config = Config::load()?;

	let deployer = resolve_deployer(&config)?;
	let deployer_address = deployer.address();

	// All validation happens up front, before any network round trip.
	let raw = RawParams {
		url: args.url.clone(),
		owner: args.owner.clone(),
		smanager: args.smanager.clone(),
		gwmanager: args.gwmanager.clone(),
		signer: args.signer.clone(),
	};
	let validated = params::validate(&raw, deployer_address)?;
	let ctor = ConstructorArgs::from_params(&validated);

	let artifact = Artifact::load(&config.artifact.path).map_err(Error::from)?;

	println!(
		"Deploying {} using deployer address {deployer_address}...",
		config.artifact.contract
	);
	println!();
	println!("Constructor arguments:\n{ctor}");
	println!();
	println!("Constructor calldata:\n0x{}", hex::encode(ctor.encode()));
	println!();

	let rpc = resolve_rpc(cli, &config);
	let url = rpc
		.parse()
		.with_context(|| format!("invalid RPC URL {rpc:?}"))?;
	let provider = wallet::provider(deployer, url);

	let deployment = deploy::deploy(provider, &artifact, &ctor).await?;
	println!(
		"-> Deployed {} contract at {}",
		config.artifact.contract, deployment.address
	);

	Ok(())
}
