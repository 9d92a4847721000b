//! Helpers shared by the subcommands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy_primitives::B256;
use anyhow::Context;
use wrapbridge_crypto::SigningKey;
use wrapbridge_params::BridgeParams;
use wrapbridge_primitives::{Address, Identity};

use crate::snapshot::Snapshot;

/// Signer key environment variable.
pub(crate) const KEY_ENVVAR: &str = "WRAPBRIDGE_SIGNER_KEY";

/// Parses a `0x`-prefixed 32-byte hex value.
pub(crate) fn parse_b256(raw: &str) -> anyhow::Result<B256> {
    B256::from_str(raw.trim()).with_context(|| format!("invalid 32-byte hex value {raw:?}"))
}

/// Parses an identity, defaulting to the zero identity when absent.
pub(crate) fn parse_identity(raw: Option<&str>) -> anyhow::Result<Identity> {
    match raw {
        Some(raw) => {
            Address::from_str(raw.trim()).with_context(|| format!("invalid identity {raw:?}"))
        }
        None => Ok(Address::ZERO),
    }
}

/// Resolves a signer key from a file or the environment.
///
/// Returns `None` if neither source was requested.
pub(crate) fn resolve_key(
    key_file: &Option<PathBuf>,
    from_env: bool,
) -> anyhow::Result<Option<SigningKey>> {
    let raw = match (key_file, from_env) {
        (Some(_), true) => anyhow::bail!("got key path and --key-from-env, pick one"),
        (Some(path), false) => fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", path.display()))?,
        (None, true) => {
            env::var(KEY_ENVVAR).with_context(|| format!("{KEY_ENVVAR} is not set"))?
        }
        (None, false) => return Ok(None),
    };

    let secret = parse_b256(&raw)?;
    let key = SigningKey::from_bytes(&secret.0).context("invalid secret key")?;
    Ok(Some(key))
}

/// Loads a bridge snapshot from exactly one of a params file or a state file.
pub(crate) fn resolve_snapshot(
    params: &Option<PathBuf>,
    state: &Option<PathBuf>,
) -> anyhow::Result<Snapshot> {
    match (params, state) {
        (Some(params), None) => {
            let params = BridgeParams::load(params)
                .with_context(|| format!("failed to load params {}", params.display()))?;
            Ok(Snapshot::genesis(&params)?)
        }
        (None, Some(state)) => Snapshot::load(state),
        (Some(_), Some(_)) => anyhow::bail!("got --params and --state, pick one"),
        (None, None) => anyhow::bail!("one of --params or --state is required"),
    }
}

/// Writes `contents` to `path`, refusing to clobber unless `force` is set.
pub(crate) fn write_new_file(path: &Path, contents: &str, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("not overwriting file, add --force to overwrite");
    }
    fs::write(path, contents).with_context(|| format!("failed to write to file {}", path.display()))
}
