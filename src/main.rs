use log::{debug, error};
use std::process::ExitCode;

use page_extract::ExtractorConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = ExtractorConfig::load()
        .map_err(page_extract::ExtractError::from)
        .and_then(|config| {
            debug!("{:#?}", config);
            page_extract::run(config)
        });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
