use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    gemini_cli::logging::init();

    match gemini_cli::run().await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
