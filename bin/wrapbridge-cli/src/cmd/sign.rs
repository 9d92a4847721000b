//! `sign` subcommand: produces a recoverable signature over a digest.

use crate::{
    args::SubcSign,
    util::{parse_b256, resolve_key},
};

pub(super) fn exec(cmd: SubcSign) -> anyhow::Result<()> {
    let Some(key) = resolve_key(&cmd.key_file, cmd.key_from_env)? else {
        anyhow::bail!("privkey unset");
    };

    let digest = parse_b256(&cmd.digest)?;
    let signature = key.sign_digest(&digest).to_bytes();
    println!("{signature}");

    Ok(())
}
