use std::{path::PathBuf, process::ExitCode};

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    match example::run(config_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("example: {err}");
            ExitCode::FAILURE
        }
    }
}
