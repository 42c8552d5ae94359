mod cli;
mod completions;
mod error;
mod exit_codes;
mod progress;

use clap::Parser;
use log::debug;
use std::io;

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging();

    if let Some(shell) = cli.completions {
        std::process::exit(completions::run_completions(shell));
    }

    // Both flags are required unless --completions is present.
    let (Some(stepno), Some(nsteps)) = (cli.stepno, cli.nsteps) else {
        unreachable!("clap requires --stepno and --nsteps without --completions");
    };

    let result = progress::Progress::new(stepno, nsteps).and_then(|p| {
        debug!(
            "step {stepno}/{nsteps}: width {}, {:.1}% complete, {} trailing tokens",
            p.width(),
            p.percent(),
            cli.remainder.len()
        );
        p.write_line(&mut io::stdout().lock(), &cli.remainder)
    });

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("makeprogress: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
