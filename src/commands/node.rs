use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::node;

pub async fn run(_cli: &Cli) -> Result<()> {
	let config = Config::load()?;

	node::run_local(&config, async {
		// If no signal listener can be installed, park forever; the
		// process then only ends by external termination.
		if tokio::signal::ctrl_c().await.is_err() {
			std::future::pending::<()>().await;
		}
	})
	.await?;

	Ok(())
}
