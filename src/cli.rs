use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::ctx::InputDirs;

#[derive(Debug, Parser)]
#[command(
    name = "kira-pbodyqc",
    version,
    about = "Per-dendrite and per-soma P-body / mRNA aggregation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Conventions(ConventionsArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    #[arg(long, help = "Folder with print, skeleton and nucleus print images")]
    pub prints: PathBuf,

    #[arg(long, help = "Folder with dendrite P-body workbooks and masks")]
    pub pbody_dendrite: PathBuf,

    #[arg(long, help = "Folder with soma P-body workbooks and masks")]
    pub pbody_soma: PathBuf,

    #[arg(long, help = "Folder with dendrite FISH-QUANT spot reports")]
    pub mrna_dendrite: PathBuf,

    #[arg(long, help = "Folder with soma FISH-QUANT spot reports")]
    pub mrna_soma: PathBuf,

    #[arg(long, help = "JSON file overriding naming conventions")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

impl InputArgs {
    pub fn dirs(&self) -> InputDirs {
        InputDirs {
            prints: self.prints.clone(),
            pbody_dendrite: self.pbody_dendrite.clone(),
            pbody_soma: self.pbody_soma.clone(),
            mrna_dendrite: self.mrna_dendrite.clone(),
            mrna_soma: self.mrna_soma.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[arg(long, default_value = ".", help = "Directory for result tables")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Also write summary.json")]
    pub json: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Exit with an error when any structure kind fails to align"
    )]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

#[derive(Debug, Args)]
pub struct ConventionsArgs {
    #[arg(long, help = "JSON file overriding naming conventions")]
    pub config: Option<PathBuf>,
}
