//! Operator tool for a committee-governed wrapped-token bridge.
//!
//! # Warning
//!
//! Keys are handled as plain hex files. This tool is intended for test and
//! development committees.

mod args;
mod cmd;
mod snapshot;
mod util;

use args::{Args, init_logging};
use cmd::exec_subc;

fn main() {
    let args: Args = argh::from_env();
    init_logging(&args);
    if let Err(e) = exec_subc(args.subc) {
        eprintln!("ERROR\n{e:?}");
        std::process::exit(1);
    }
}
