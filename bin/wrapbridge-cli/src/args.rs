//! Command line arguments for the `wrapbridge-cli` binary.

use std::path::PathBuf;

use argh::FromArgs;
use wrapbridge_common::logging::{self, FileLoggingConfig, LoggerConfig};

/// Log file prefix used with `--log-dir`.
const LOG_FILE_PREFIX: &str = "wrapbridge-cli";

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(switch, description = "emit logs as JSON")]
    pub(crate) log_json: bool,

    #[argh(option, description = "also write rolling daily log files to this directory")]
    pub(crate) log_dir: Option<PathBuf>,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    GenKey(SubcGenKey),
    Digest(SubcDigest),
    Sign(SubcSign),
    Run(SubcRun),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "genkey",
    description = "generates a signer key and prints its identity"
)]
pub(crate) struct SubcGenKey {
    #[argh(
        option,
        description = "write the secret key to this file (default stdout)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,

    #[argh(switch, description = "force overwrite", short = 'f')]
    pub(crate) force: bool,
}

/// Computes what committee members must sign for a call.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "digest",
    description = "prints the message and digest a governed call must be signed over"
)]
pub(crate) struct SubcDigest {
    #[argh(option, description = "genesis params file .toml", short = 'p')]
    pub(crate) params: Option<PathBuf>,

    #[argh(option, description = "state snapshot file .json", short = 's')]
    pub(crate) state: Option<PathBuf>,

    #[argh(
        option,
        description = "submitting account, bound into wrap messages (default zero)",
        short = 'c'
    )]
    pub(crate) caller: Option<String>,

    #[argh(positional, description = "governed call as JSON tagged by its op field")]
    pub(crate) call: String,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "sign",
    description = "signs a digest with a signer key"
)]
pub(crate) struct SubcSign {
    #[argh(option, description = "reads key from specified file", short = 'k')]
    pub(crate) key_file: Option<PathBuf>,

    #[argh(
        switch,
        description = "reads key from envvar WRAPBRIDGE_SIGNER_KEY",
        short = 'E'
    )]
    pub(crate) key_from_env: bool,

    #[argh(positional, description = "digest as 0x-prefixed 32-byte hex")]
    pub(crate) digest: String,
}

/// Applies a script of calls to a bridge.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "run",
    description = "applies a JSON script of calls and prints each outcome"
)]
pub(crate) struct SubcRun {
    #[argh(option, description = "genesis params file .toml", short = 'p')]
    pub(crate) params: Option<PathBuf>,

    #[argh(option, description = "state snapshot file .json", short = 's')]
    pub(crate) state: Option<PathBuf>,

    #[argh(
        option,
        description = "write the resulting snapshot here (default discard)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,

    #[argh(positional, description = "script file holding a JSON array of caller and call steps")]
    pub(crate) script: PathBuf,
}

/// Installs the global subscriber. Console logs go to stderr so command output
/// stays parseable.
pub(crate) fn init_logging(args: &Args) {
    let mut config = LoggerConfig::new(LOG_FILE_PREFIX.to_string())
        .with_json_logging(args.log_json)
        .with_stderr(true);

    if let Some(dir) = &args.log_dir {
        config = config.with_file_logging(
            FileLoggingConfig::new(dir.clone(), LOG_FILE_PREFIX.to_string())
                .with_json_format(args.log_json),
        );
    }

    logging::init(config);
}

#[cfg(test)]
mod tests {
    use argh::FromArgs;

    use super::*;

    #[test]
    fn test_parse_digest_call() {
        let args = Args::from_args(
            &["wrapbridge-cli"],
            &["digest", "-p", "genesis.toml", r#"{"op":"pause"}"#],
        )
        .unwrap();

        assert_eq!(
            args.subc,
            Subcommand::Digest(SubcDigest {
                params: Some(PathBuf::from("genesis.toml")),
                state: None,
                caller: None,
                call: r#"{"op":"pause"}"#.to_string(),
            })
        );
    }

    #[test]
    fn test_parse_sign_and_run() {
        let digest = format!("0x{}", "ab".repeat(32));
        let args = Args::from_args(&["wrapbridge-cli"], &["sign", "-E", digest.as_str()]).unwrap();
        assert_eq!(
            args.subc,
            Subcommand::Sign(SubcSign {
                key_file: None,
                key_from_env: true,
                digest,
            })
        );

        let args = Args::from_args(
            &["wrapbridge-cli"],
            &["--log-json", "run", "-s", "state.json", "script.json"],
        )
        .unwrap();
        assert!(args.log_json);
        assert!(matches!(
            args.subc,
            Subcommand::Run(SubcRun { ref script, output: None, .. }) if script == &PathBuf::from("script.json")
        ));
    }

    /// Help text with line wrapping collapsed.
    fn help(subcommand: &str) -> String {
        match Args::from_args(&["wrapbridge-cli"], &[subcommand, "--help"]) {
            Err(exit) => exit.output.split_whitespace().collect::<Vec<_>>().join(" "),
            Ok(_) => panic!("--help must exit early"),
        }
    }

    #[test]
    fn test_help_lists_positional_descriptions() {
        assert!(help("run").contains("caller and call steps"));
        assert!(help("sign").contains("digest as 0x-prefixed 32-byte hex"));
        assert!(help("digest").contains("tagged by its op field"));
    }
}
