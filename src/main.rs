//! badgeserv CLI entry point.

use std::process::ExitCode;

use badgeserv::cli::{Cli, CommandDispatcher, CommandIo};
use badgeserv::BadgeError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries badge output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("badgeserv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("badgeserv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("badgeserv starting with args: {:?}", cli);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    let result = CommandDispatcher::from_cli(&cli).and_then(|dispatcher| {
        let mut io = CommandIo::new(&mut stdout, &mut stderr);
        dispatcher.dispatch(&cli, &mut io)
    });

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let kind = e.kind();
            eprintln!("Error ({}): {}", kind, e);
            if let BadgeError::ConfigLoad { failures } = &e {
                for failure in failures {
                    eprintln!("  {}", failure);
                }
            }
            ExitCode::from(kind.exit_code())
        }
    }
}
