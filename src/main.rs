use std::process::ExitCode;

use clap::Parser;

use searchdeck::cli::Cli;
use searchdeck::runtime::lifetime::startup::prepare_startup;
use searchdeck::runtime::modes::{self, Mode};

fn main() -> ExitCode {
    // .env 文件是可选的
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command);

    let ctx = match prepare_startup(cli.config.as_deref(), cli.catalog.as_deref(), mode.run_mode())
    {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Startup failed: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(ctx) {
                eprintln!("Error: {:#}", e);
                return ExitCode::FAILURE;
            }
        }
        Mode::Cli(cmd) => {
            if let Err(e) = modes::run_cli(cmd, &ctx) {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
        Mode::Unknown => {
            eprintln!("No command given and the TUI is not compiled in; see --help");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
