use std::process::ExitCode;

fn main() -> ExitCode {
    match nook::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
