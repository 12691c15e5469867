use std::process::ExitCode;

use clap::Parser;
use console::style;
use sieve_catalog::cli::Cli;
use sieve_catalog::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = cli.command.execute()?;
    print!("{output}");
    Ok(())
}
