use std::fmt;

use alloy::primitives::Address;
use alloy::sol_types::SolValue;

use crate::params::ResolverParams;

/// Rust-side view of the resolver constructor:
/// `constructor(address owner, address signerManager, address gatewayManager,
/// string url, address[] signers)`.
type ConstructorTuple = (Address, Address, Address, String, Vec<Address>);

/// The ordered argument tuple the contract constructor expects. Built once
/// per deployment invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorArgs {
	pub owner: Address,
	pub signer_manager: Address,
	pub gateway_manager: Address,
	pub url: String,
	pub signers: Vec<Address>,
}

impl ConstructorArgs {
	/// Assemble the tuple from validated parameters. The signer list holds
	/// exactly the resolved initial signer.
	pub fn from_params(params: &ResolverParams) -> Self {
		Self {
			owner: params.owner,
			signer_manager: params.signer_manager,
			gateway_manager: params.gateway_manager,
			url: params.endpoint.as_str().to_owned(),
			signers: vec![params.initial_signer],
		}
	}

	/// ABI-encode the tuple exactly as the constructor consumes it. A given
	/// tuple always yields the same bytes.
	pub fn encode(&self) -> Vec<u8> {
		let tuple: ConstructorTuple = (
			self.owner,
			self.signer_manager,
			self.gateway_manager,
			self.url.clone(),
			self.signers.clone(),
		);
		tuple.abi_encode_params()
	}

	/// Inverse of [`Self::encode`], for inspecting calldata.
	pub fn decode(data: &[u8]) -> Result<Self, alloy::sol_types::Error> {
		let (owner, signer_manager, gateway_manager, url, signers) =
			ConstructorTuple::abi_decode_params(data)?;
		Ok(Self {
			owner,
			signer_manager,
			gateway_manager,
			url,
			signers,
		})
	}
}

impl fmt::Display for ConstructorArgs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let signers = self
			.signers
			.iter()
			.map(|s| format!("\"{s}\""))
			.collect::<Vec<_>>()
			.join(", ");
		write!(
			f,
			"[\"{}\", \"{}\", \"{}\", \"{}\", [{}]]",
			self.owner, self.signer_manager, self.gateway_manager, self.url, signers
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params::{self, RawParams};
	use alloy::primitives::address;

	const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

	fn sample() -> ConstructorArgs {
		let raw = RawParams {
			url: "http://api.host.com/r/{sender}/{data}".into(),
			..Default::default()
		};
		ConstructorArgs::from_params(&params::validate(&raw, DEPLOYER).unwrap())
	}

	#[test]
	fn defaulted_tuple_repeats_the_deployer() {
		let args = sample();
		assert_eq!(args.owner, DEPLOYER);
		assert_eq!(args.signer_manager, DEPLOYER);
		assert_eq!(args.gateway_manager, DEPLOYER);
		assert_eq!(args.url, "http://api.host.com/r/{sender}/{data}");
		assert_eq!(args.signers, vec![DEPLOYER]);
	}

	#[test]
	fn encoding_is_deterministic() {
		let args = sample();
		assert_eq!(args.encode(), args.encode());
	}

	#[test]
	fn first_word_is_the_owner() {
		let encoded = sample().encode();
		// Static head: owner is the first 32-byte word, left-padded.
		assert_eq!(&encoded[12..32], DEPLOYER.as_slice());
	}

	#[test]
	fn decode_inverts_encode() {
		let args = sample();
		let decoded = ConstructorArgs::decode(&args.encode()).unwrap();
		assert_eq!(decoded, args);
	}

	#[test]
	fn decode_rejects_truncated_calldata() {
		let encoded = sample().encode();
		assert!(ConstructorArgs::decode(&encoded[..encoded.len() - 1]).is_err());
	}
}
