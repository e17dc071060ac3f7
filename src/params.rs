use alloy::primitives::{Address, AddressError};

use crate::error::Error;

/// Sanity floor for the gateway URL template. Not a full URL grammar check.
pub const MIN_ENDPOINT_LEN: usize = 7;

// -- Resolution endpoint --

/// Gateway URL template the deployed resolver hands out to clients, usually
/// of the form `http://api.host.com/r/{sender}/{data}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
	pub fn new(url: impl Into<String>) -> Result<Self, Error> {
		let url = url.into();
		if url.len() < MIN_ENDPOINT_LEN {
			return Err(Error::InvalidEndpoint { url });
		}
		Ok(Self(url))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

// -- Role assignment --

/// Raw, unvalidated command-line input for a deployment.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
	pub url: String,
	pub owner: Option<String>,
	pub smanager: Option<String>,
	pub gwmanager: Option<String>,
	pub signer: Option<String>,
}

/// Validated deployment parameters: every address passed format checks and
/// unset roles are filled with the deployer address.
#[derive(Debug, Clone)]
pub struct ResolverParams {
	pub owner: Address,
	pub signer_manager: Address,
	pub gateway_manager: Address,
	pub initial_signer: Address,
	pub endpoint: Endpoint,
}

/// Check and normalize user-supplied parameters against the deployer
/// identity. Runs to completion before anything touches the network.
pub fn validate(raw: &RawParams, deployer: Address) -> Result<ResolverParams, Error> {
	let endpoint = Endpoint::new(raw.url.as_str())?;
	Ok(ResolverParams {
		owner: role_address("owner", raw.owner.as_deref(), deployer)?,
		signer_manager: role_address("smanager", raw.smanager.as_deref(), deployer)?,
		gateway_manager: role_address("gwmanager", raw.gwmanager.as_deref(), deployer)?,
		initial_signer: role_address("signer", raw.signer.as_deref(), deployer)?,
		endpoint,
	})
}

/// An absent or empty role falls back to the deployer.
fn role_address(role: &'static str, value: Option<&str>, deployer: Address) -> Result<Address, Error> {
	match value.filter(|v| !v.is_empty()) {
		None => Ok(deployer),
		Some(v) => parse_address(role, v),
	}
}

/// Parse a 20-byte address. Mixed-case input must carry a valid EIP-55
/// checksum; uniform-case input is accepted as plain hex.
fn parse_address(role: &'static str, value: &str) -> Result<Address, Error> {
	let digits = value.strip_prefix("0x").unwrap_or(value);
	let mixed_case = digits.chars().any(|c| c.is_ascii_uppercase())
		&& digits.chars().any(|c| c.is_ascii_lowercase());

	let parsed = if mixed_case {
		Address::parse_checksummed(value, None)
	} else {
		value.parse::<Address>().map_err(AddressError::from)
	};

	parsed.map_err(|source| Error::InvalidAddress {
		role,
		value: value.to_owned(),
		source,
	})
}
