use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use pystub::{cli, logging, prompt, Runner};
use std::io;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = args.build_config()?;
    let (paths, config) = if args.interactive {
        prompt::collect(io::stdin().lock(), io::stdout(), config)
            .context("Failed to collect answers")?
    } else {
        (args.paths.clone(), config)
    };

    let mut runner = Runner::new(config).context("Failed to initialize scanner")?;
    let summary = runner
        .generate_tests(&paths)
        .context("Test generation failed")?;

    if !args.quiet {
        println!(
            "{} test modules written, {} modules without testable functions, {} modules failed",
            summary.written.len(),
            summary.skipped.len(),
            summary.failed.len()
        );
    }

    Ok(())
}
