use std::path::PathBuf;

use clap::Parser;
use kira_pbodyqc::cli::{Cli, Commands};

const INPUTS: [&str; 10] = [
    "--prints",
    "p",
    "--pbody-dendrite",
    "pd",
    "--pbody-soma",
    "ps",
    "--mrna-dendrite",
    "md",
    "--mrna-soma",
    "ms",
];

#[test]
fn run_defaults_to_current_directory() {
    let mut argv = vec!["kira-pbodyqc", "run"];
    argv.extend(INPUTS);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.out, PathBuf::from("."));
            assert!(!args.json);
            assert!(!args.strict);
            assert_eq!(args.inputs.threads, 0);
            let dirs = args.inputs.dirs();
            assert_eq!(dirs.mrna_soma, PathBuf::from("ms"));
            assert_eq!(dirs.pbody_dendrite, PathBuf::from("pd"));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_requires_every_input_folder() {
    let argv = vec!["kira-pbodyqc", "run", "--prints", "p"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn validate_accepts_config_override() {
    let mut argv = vec!["kira-pbodyqc", "validate"];
    argv.extend(INPUTS);
    argv.extend(["--config", "naming.json"]);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Validate(args) => {
            assert_eq!(args.inputs.config, Some(PathBuf::from("naming.json")))
        }
        _ => panic!("expected validate command"),
    }
}
