use std::process::ExitCode;

use display_error_chain::DisplayErrorChain;
use genderize::{Error, Genderize};

async fn do_main() -> Result<(), Error> {
    // deliberately invalid so the server answers with an error
    let client = Genderize::with_api_key("invalid_api_key")?;

    println!("Sending request with an invalid API key...");

    match client.get(["Peter"]).await {
        Ok(responses) => println!("Unexpected success: {responses:?}"),
        Err(err) => {
            if let Some(server_error) = err.server_error() {
                println!(
                    "Server said {:?} (status {})",
                    server_error.message, server_error.status_code
                );
                if let Some(rate_limit) = err.rate_limit() {
                    println!(
                        "Quota: {}/{} names left, resets in {}s",
                        rate_limit.remaining, rate_limit.limit, rate_limit.reset
                    );
                }
            }
            return Err(err);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(err) = do_main().await {
        let formated = DisplayErrorChain::new(err).to_string();
        eprintln!("{formated}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
