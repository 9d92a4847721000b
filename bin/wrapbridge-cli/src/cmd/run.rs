//! `run` subcommand: applies a script of calls to a snapshot.

use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wrapbridge_governance::{Bridge, BridgeCall, BridgeEvent, EventLog, InMemoryBalances};
use wrapbridge_primitives::Identity;

use crate::{args::SubcRun, snapshot::Snapshot, util::resolve_snapshot};

/// One scripted submission.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ScriptStep {
    pub(crate) caller: Identity,
    pub(crate) call: BridgeCall,
}

/// Result of applying one [`ScriptStep`].
#[derive(Clone, Debug, Serialize)]
pub(crate) struct StepOutcome {
    pub(crate) step: usize,
    pub(crate) ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
    pub(crate) events: Vec<BridgeEvent>,
}

/// Applies every step in order. A rejected step leaves the bridge unchanged
/// and does not stop the script.
pub(crate) fn run_script(
    bridge: &mut Bridge<InMemoryBalances, EventLog>,
    steps: &[ScriptStep],
) -> Vec<StepOutcome> {
    steps
        .iter()
        .enumerate()
        .map(|(step, s)| {
            let result = bridge.execute(&s.caller, &s.call);
            let events = bridge.events_mut().drain();
            let error = match result {
                Ok(()) => None,
                Err(e) => {
                    warn!(step, caller = %s.caller, %e, "call rejected");
                    Some(e.to_string())
                }
            };
            StepOutcome {
                step,
                ok: error.is_none(),
                error,
                events,
            }
        })
        .collect()
}

pub(super) fn exec(cmd: SubcRun) -> anyhow::Result<()> {
    let snapshot = resolve_snapshot(&cmd.params, &cmd.state)?;

    let raw = fs::read_to_string(&cmd.script)
        .with_context(|| format!("failed to read script {}", cmd.script.display()))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&raw).context("invalid script JSON")?;

    let mut bridge = snapshot.into_bridge(EventLog::new());
    let outcomes = run_script(&mut bridge, &steps);
    println!("{}", serde_json::to_string_pretty(&outcomes)?);

    let applied = outcomes.iter().filter(|o| o.ok).count();
    info!(applied, rejected = outcomes.len() - applied, "script finished");

    if let Some(output) = &cmd.output {
        Snapshot::from_bridge(bridge).save(output)?;
        info!(path = %output.display(), "snapshot written");
    }

    Ok(())
}
