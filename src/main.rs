use presence::commands::Cli;
use presence::libs::messages::macros::is_debug_mode;
use presence::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("presence=debug")))
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
