use std::future::Future;
use std::time::Duration;

use alloy::node_bindings::{Anvil, AnvilInstance, NodeError};
use tokio::task::JoinHandle;

use crate::artifact;
use crate::config::Config;
use crate::error::{Error, StartupError};
use crate::wallet;

/// How long to wait for the node's ready signal before parking anyway. The
/// signal may never fire in some modes, so the wait has to be bounded.
pub const STARTUP_GRACE: Duration = Duration::from_secs(2);

/// Either a node that signalled readiness, or one still starting in the
/// background. Dropping either kills the chain.
enum LocalNode {
	Ready(AnvilInstance),
	#[allow(dead_code)]
	Starting(JoinHandle<Result<AnvilInstance, NodeError>>),
}

/// Compile artifacts, print the first test account, start a local chain,
/// then suspend until `shutdown` resolves. The command layer passes a
/// ctrl-c listener; a test harness can pass any future and observe a clean
/// return.
pub async fn run_local(config: &Config, shutdown: impl Future<Output = ()>) -> Result<(), Error> {
	artifact::compile(&config.artifact.compile_command).await?;

	let account = wallet::derive(&config.wallet.mnemonic, &config.wallet.derivation_path, 0)?;
	println!(
		"Wallet {}, Private Key: {:#x}",
		account.address, account.private_key
	);

	let anvil = Anvil::new()
		.mnemonic(config.wallet.mnemonic.clone())
		.arg(format!("--derivation-path={}", config.wallet.derivation_path))
		.port(config.node.port)
		.chain_id(config.node.chain_id);
	let mut spawning = tokio::task::spawn_blocking(move || anvil.try_spawn());

	// First-of: the ready signal against a fixed grace period. A node that
	// is still starting when the grace elapses keeps starting in the
	// background; only a spawn that has already failed aborts the command.
	let node = match tokio::time::timeout(STARTUP_GRACE, &mut spawning).await {
		Ok(joined) => {
			let instance = joined
				.expect("node spawn task panicked")
				.map_err(StartupError::from)?;
			println!("Local node listening on {}", instance.endpoint());
			LocalNode::Ready(instance)
		}
		Err(_) => LocalNode::Starting(spawning),
	};

	// Park until externally terminated. `node` must stay alive here, its
	// drop tears the chain down.
	shutdown.await;
	drop(node);
	Ok(())
}
