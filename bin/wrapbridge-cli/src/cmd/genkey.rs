//! `genkey` subcommand: generates a fresh signer key.

use alloy_primitives::B256;
use wrapbridge_crypto::SigningKey;
use wrapbridge_primitives::identity::format_identity;

use crate::{args::SubcGenKey, util::write_new_file};

/// Prints the new key's identity. The secret goes to `--output` when given,
/// otherwise to stdout after the identity.
pub(super) fn exec(cmd: SubcGenKey) -> anyhow::Result<()> {
    let key = SigningKey::generate();
    let secret = B256::from(key.secret_bytes());

    println!("{}", format_identity(&key.identity()));
    match &cmd.output {
        Some(path) => write_new_file(path, &format!("{secret}\n"), cmd.force)?,
        None => println!("{secret}"),
    }

    Ok(())
}
