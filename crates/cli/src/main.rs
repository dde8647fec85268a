use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use xmv_core::config;
use xmv_core::error::Result;
use xmv_core::execution::ZmvRenamer;

use xmv_cli::cli_args::Args;
use xmv_cli::workflow::{self, Outcome, Session};

fn execute() -> Result<Outcome> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    let styled = io::stdout().is_terminal();
    let session = Session::from_args(&args, config_path, styled);
    let renamer = ZmvRenamer::new(config::get_shell_path(&args.shell));

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    workflow::run(&session, &renamer, &mut input, &mut output)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
