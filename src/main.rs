use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_pbodyqc::cli::{Cli, Commands};
use kira_pbodyqc::config::Config;
use kira_pbodyqc::ctx::{Ctx, StructureKind};
use kira_pbodyqc::io::summary;
use kira_pbodyqc::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = Config::load(args.inputs.config.as_deref())?;
            let mut ctx = Ctx::new(args.inputs.dirs(), args.out, config, args.json);
            ctx.threads = args.inputs.threads;

            Pipeline::full().run(&mut ctx)?;

            print_mismatches(&ctx);
            let failed = ctx.mismatched_kinds();
            if args.strict && !failed.is_empty() {
                let labels: Vec<&str> = failed.iter().map(|k| k.label()).collect();
                anyhow::bail!("streams did not align for: {}", labels.join(", "));
            }
        }
        Commands::Validate(args) => {
            let config = Config::load(args.inputs.config.as_deref())?;
            let mut ctx = Ctx::new(args.inputs.dirs(), ".".into(), config, false);
            ctx.threads = args.inputs.threads;

            Pipeline::validate().run(&mut ctx)?;

            print!("{}", summary::format_validate(&ctx));
            if !ctx.mismatched_kinds().is_empty() {
                anyhow::bail!("validation failed");
            }
        }
        Commands::Conventions(args) => {
            let config = Config::load(args.config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_mismatches(ctx: &Ctx) {
    for kind in StructureKind::ALL {
        if let Some(m) = &ctx.kind(kind).mismatch {
            print!("{}", summary::format_mismatch(kind, m));
        }
    }
}
