use anyhow::Result;
use clap::Parser;

use nginx_package::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    match args.command {
        cli::Command::Select(opts) => commands::select::run(&opts),
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
