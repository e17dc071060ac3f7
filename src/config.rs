use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The well-known development mnemonic, used whenever the operator has not
/// configured one of their own. Never fund its accounts on a real network.
pub const DEV_MNEMONIC: &str =
	"abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	pub network: NetworkConfig,
	pub wallet: WalletConfig,
	pub artifact: ArtifactConfig,
	pub node: NodeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub localhost_rpc: String,
	pub sepolia_rpc: String,
	pub mainnet_rpc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
	pub mnemonic: String,
	pub derivation_path: String,
	/// Raw private key for the deployer. Takes precedence over the mnemonic.
	pub private_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
	pub contract: String,
	pub path: PathBuf,
	/// External build command run before the local chain starts. Empty
	/// disables the compile step.
	pub compile_command: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
	pub port: u16,
	pub chain_id: u64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			network: NetworkConfig {
				default: "localhost".into(),
				localhost_rpc: "http://localhost:8545".into(),
				sepolia_rpc: "https://ethereum-sepolia-rpc.publicnode.com".into(),
				mainnet_rpc: "https://ethereum-rpc.publicnode.com".into(),
			},
			wallet: WalletConfig {
				mnemonic: DEV_MNEMONIC.into(),
				derivation_path: "m/44'/60'/0'/0".into(),
				private_key: None,
			},
			artifact: ArtifactConfig {
				contract: "ENSResolver".into(),
				path: "out/ENSResolver.sol/ENSResolver.json".into(),
				compile_command: vec!["forge".into(), "build".into()],
			},
			node: NodeConfig {
				port: 8545,
				chain_id: 31337,
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.ens-resolver/).
	pub fn dir() -> PathBuf {
		dirs::home_dir()
			.expect("could not determine home directory")
			.join(".ens-resolver")
	}

	/// Path to the config file.
	pub fn path() -> PathBuf {
		Self::dir().join("config.toml")
	}

	/// Load config from disk, falling back to defaults if no file exists,
	/// then apply environment overrides.
	pub fn load() -> anyhow::Result<Self> {
		let path = Self::path();
		let mut config = if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			toml::from_str(&content)?
		} else {
			Self::default()
		};
		config.apply_env();
		Ok(config)
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> anyhow::Result<()> {
		let path = Self::path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> &str {
		match network {
			"mainnet" => &self.network.mainnet_rpc,
			"sepolia" => &self.network.sepolia_rpc,
			_ => &self.network.localhost_rpc,
		}
	}

	/// MNEMONIC and PRIVATE_KEY overrides from the environment (or a .env
	/// file next to the invocation), applied once at load time. Components
	/// only ever see the resulting Config.
	fn apply_env(&mut self) {
		let _ = dotenvy::dotenv();
		if let Ok(mnemonic) = std::env::var("MNEMONIC") {
			if !mnemonic.is_empty() {
				self.wallet.mnemonic = mnemonic;
			}
		}
		if let Ok(key) = std::env::var("PRIVATE_KEY") {
			if !key.is_empty() {
				self.wallet.private_key = Some(key);
			}
		}
	}
}
