mod app;
mod cli;
mod config_loader;
mod output;

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout = std::io::stdout().lock();

    match app::run(std::env::args_os(), &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: failed to write output: {}", err);
            ExitCode::FAILURE
        }
    }
}
