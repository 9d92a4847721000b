//! `digest` subcommand: shows what the committee must sign for a call.

use anyhow::Context;
use wrapbridge_governance::BridgeCall;

use crate::{
    args::SubcDigest,
    util::{parse_identity, resolve_snapshot},
};

pub(super) fn exec(cmd: SubcDigest) -> anyhow::Result<()> {
    let snapshot = resolve_snapshot(&cmd.params, &cmd.state)?;
    let caller = parse_identity(cmd.caller.as_deref())?;
    let call: BridgeCall = serde_json::from_str(&cmd.call).context("invalid call JSON")?;

    let Some(request) = snapshot.state.signing_request(&caller, &call) else {
        anyhow::bail!("call needs no committee signatures");
    };
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
