use dotenv::dotenv;
use std::process::ExitCode;
use studentdb::commands::Cli;
use studentdb::msg_error;

fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv();

    match Cli::menu() {
        Ok(code) => code,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
