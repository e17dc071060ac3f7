use alloy::contract::RawCallBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::Provider;

use crate::artifact::Artifact;
use crate::constructor::ConstructorArgs;
use crate::error::Error;

/// A confirmed deployment. Transient: reported to the operator and then
/// discarded, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Deployment {
	pub tx_hash: TxHash,
	pub address: Address,
}

/// Full creation payload: contract bytecode followed by the ABI-encoded
/// constructor arguments.
pub fn creation_input(artifact: &Artifact, args: &ConstructorArgs) -> Bytes {
	let mut input = artifact.bytecode.to_vec();
	input.extend_from_slice(&args.encode());
	input.into()
}

/// Submit the contract-creation transaction and block until the network
/// reports it mined. The confirmation wait is unbounded: the outcome is
/// whatever the chain settles on, confirmed or failed.
///
/// No retries: a failed deployment must be re-invoked by the operator.
pub async fn deploy(
	provider: impl Provider,
	artifact: &Artifact,
	args: &ConstructorArgs,
) -> Result<Deployment, Error> {
	let input = creation_input(artifact, args);

	let pending = RawCallBuilder::new_raw_deploy(provider, input).send().await?;
	let tx_hash = *pending.tx_hash();
	println!("Creation tx {tx_hash:#x} submitted, waiting for confirmation...");

	let receipt = pending
		.get_receipt()
		.await
		.map_err(alloy::contract::Error::from)?;

	if !receipt.status() {
		return Err(Error::Reverted { tx_hash });
	}

	let address = receipt
		.contract_address
		.ok_or(Error::Deployment(alloy::contract::Error::ContractNotDeployed))?;

	Ok(Deployment { tx_hash, address })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params::{self, RawParams};
	use alloy::primitives::address;
	use std::path::Path;

	#[test]
	fn creation_input_is_bytecode_then_arguments() {
		let artifact = Artifact::from_json(
			Path::new("Test.json"),
			r#"{"bytecode": "0x600a600c600039600a6000f3602a60005260206000f3"}"#,
		)
		.unwrap();

		let raw = RawParams {
			url: "http://localhost:3000/r/{sender}/{data}".into(),
			..Default::default()
		};
		let deployer = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
		let args = ConstructorArgs::from_params(&params::validate(&raw, deployer).unwrap());

		let input = creation_input(&artifact, &args);
		assert!(input.starts_with(&artifact.bytecode));
		assert!(input.ends_with(&args.encode()));
		assert_eq!(input.len(), artifact.bytecode.len() + args.encode().len());
	}
}
