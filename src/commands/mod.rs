pub mod account;
pub mod deploy;
pub mod node;

use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use crate::wallet;

/// Resolve the RPC URL from CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.unwrap_or_else(|| config.rpc_url(cli.network.as_str()).to_owned())
}

/// Resolve the deployer identity: an explicit private key takes precedence,
/// otherwise account 0 is derived from the mnemonic.
pub fn resolve_deployer(config: &Config) -> Result<PrivateKeySigner> {
	match config.wallet.private_key.as_deref().filter(|k| !k.is_empty()) {
		Some(key) => key
			.parse::<PrivateKeySigner>()
			.context("invalid private key in wallet config or PRIVATE_KEY"),
		None => Ok(wallet::signer(
			&config.wallet.mnemonic,
			&config.wallet.derivation_path,
			0,
		)
		.map_err(|source| Error::Derivation { index: 0, source })?),
	}
}
