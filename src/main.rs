use log::error;
use maillog::cli::run_with;
use maillog::{SmtpConfig, SmtpTransport, get_env_args};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = get_env_args();
    let config = SmtpConfig::from_args(&args);
    match run_with(&SmtpTransport::new(&config), &args, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#?}");
            println!("Error: unable to send email ({e})");
            ExitCode::FAILURE
        }
    }
}
