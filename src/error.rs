use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use alloy::node_bindings::NodeError;
use alloy::primitives::{AddressError, TxHash};
use alloy::signers::local::LocalSignerError;

use crate::params::MIN_ENDPOINT_LEN;

/// Everything that can go wrong before, during, or after a deployment.
/// Validation errors surface before any network call is made.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid resolution endpoint {url:?}: must be {min} characters or more", min = MIN_ENDPOINT_LEN)]
	InvalidEndpoint { url: String },

	#[error("invalid address for {role}: {value:?}")]
	InvalidAddress {
		role: &'static str,
		value: String,
		#[source]
		source: AddressError,
	},

	#[error("failed to derive account {index} from the configured mnemonic")]
	Derivation {
		index: u32,
		#[source]
		source: LocalSignerError,
	},

	#[error("contract deployment failed")]
	Deployment(#[from] alloy::contract::Error),

	#[error("contract creation {tx_hash:#x} reverted on-chain")]
	Reverted { tx_hash: TxHash },

	#[error("startup failed")]
	Startup(#[from] StartupError),
}

/// Failures of the compile step or the local chain bootstrap, all of which
/// abort before the keep-alive phase.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
	#[error("compile command {command:?} could not be run")]
	CompileSpawn {
		command: String,
		#[source]
		source: io::Error,
	},

	#[error("compile command {command:?} exited with {status}")]
	CompileFailed { command: String, status: ExitStatus },

	#[error("could not read artifact {}", .path.display())]
	ArtifactRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not parse artifact {}", .path.display())]
	ArtifactParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("artifact {} bytecode is not valid hex", .path.display())]
	BadBytecode {
		path: PathBuf,
		#[source]
		source: alloy::hex::FromHexError,
	},

	#[error("artifact {} contains no deployable bytecode", .path.display())]
	EmptyBytecode { path: PathBuf },

	#[error("local node failed to start")]
	Node(#[from] NodeError),
}
