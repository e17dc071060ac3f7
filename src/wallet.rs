use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::{coins_bip39::English, LocalSignerError, MnemonicBuilder, PrivateKeySigner};
use alloy::transports::http::reqwest::Url;

use crate::error::Error;

/// One account derived from the configured mnemonic. Derivation is pure:
/// the same (mnemonic, path, index) always yields the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAccount {
	pub index: u32,
	pub address: Address,
	pub private_key: B256,
}

/// Derive the address/key pair at `index` under the path template.
pub fn derive(mnemonic: &str, path: &str, index: u32) -> Result<DerivedAccount, Error> {
	let signer =
		signer(mnemonic, path, index).map_err(|source| Error::Derivation { index, source })?;
	Ok(DerivedAccount {
		index,
		address: signer.address(),
		private_key: signer.to_bytes(),
	})
}

/// Same derivation, returning the signing handle for transaction submission.
pub fn signer(mnemonic: &str, path: &str, index: u32) -> Result<PrivateKeySigner, LocalSignerError> {
	MnemonicBuilder::<English>::default()
		.phrase(mnemonic)
		.derivation_path(format!("{path}/{index}"))?
		.build()
}

/// Wrap a signer into a provider ready to send transactions.
pub fn provider(signer: PrivateKeySigner, url: Url) -> impl Provider {
	ProviderBuilder::new()
		.wallet(EthereumWallet::from(signer))
		.connect_http(url)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::address;

	// The standard development mnemonic every local test chain ships with.
	const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";
	const PATH: &str = "m/44'/60'/0'/0";

	#[test]
	fn derivation_is_deterministic() {
		let a = derive(TEST_MNEMONIC, PATH, 3).unwrap();
		let b = derive(TEST_MNEMONIC, PATH, 3).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn distinct_indices_yield_distinct_accounts() {
		let a = derive(TEST_MNEMONIC, PATH, 0).unwrap();
		let b = derive(TEST_MNEMONIC, PATH, 1).unwrap();
		assert_ne!(a.address, b.address);
		assert_ne!(a.private_key, b.private_key);
	}

	#[test]
	fn matches_known_development_accounts() {
		let first = derive(TEST_MNEMONIC, PATH, 0).unwrap();
		assert_eq!(
			first.address,
			address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
		);
		assert_eq!(
			format!("{:#x}", first.private_key),
			"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
		);

		let second = derive(TEST_MNEMONIC, PATH, 1).unwrap();
		assert_eq!(
			second.address,
			address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
		);
	}

	#[test]
	fn malformed_mnemonic_is_a_derivation_failure() {
		let err = derive("definitely not a mnemonic", PATH, 0).unwrap_err();
		assert!(matches!(err, Error::Derivation { index: 0, .. }));
	}

	#[test]
	fn malformed_path_is_a_derivation_failure() {
		let err = derive(TEST_MNEMONIC, "not/a/path", 2).unwrap_err();
		assert!(matches!(err, Error::Derivation { index: 2, .. }));
	}
}
