//! Subcommand implementations.

mod digest;
mod genkey;
mod run;
mod sign;

use crate::args::Subcommand;

/// Executes a subcommand.
pub(crate) fn exec_subc(cmd: Subcommand) -> anyhow::Result<()> {
    match cmd {
        Subcommand::GenKey(subc) => genkey::exec(subc),
        Subcommand::Digest(subc) => digest::exec(subc),
        Subcommand::Sign(subc) => sign::exec(subc),
        Subcommand::Run(subc) => run::exec(subc),
    }
}
