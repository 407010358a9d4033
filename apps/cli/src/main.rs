use std::process::ExitCode;

use tmp_eraser_common::EraserConfig;

fn main() -> ExitCode {
    let config = EraserConfig::from_env();
    tmp_eraser_lib::init_logging(config.verbose);

    match tmp_eraser_lib::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR | {}", e);
            ExitCode::FAILURE
        }
    }
}
