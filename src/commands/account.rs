use anyhow::Result;

use crate::cli::{AccountArgs, Cli};
use crate::config::Config;
use crate::wallet;

pub async fn run(_cli: &Cli, args: &AccountArgs) -> Result<()> {
	let config = Config::load()?;
	let account = wallet::derive(
		&config.wallet.mnemonic,
		&config.wallet.derivation_path,
		args.index,
	)?;
	println!(
		"Private Key for {}: {:#x}",
		account.address, account.private_key
	);
	Ok(())
}
