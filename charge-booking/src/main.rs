use std::io;
use std::process::ExitCode;

use charge_booking::config::SessionConfig;
use charge_booking::logging;
use charge_booking::menu::Session;
use charge_booking::stations::default_registry;
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "failed to load station catalogue");
            return ExitCode::FAILURE;
        }
    };

    // Blank date answers resolve to the local calendar date at startup
    let today = chrono::Local::now().date_naive();
    let mut session = Session::new(registry, SessionConfig::default(), today);

    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        error!(error = %e, "session aborted");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
