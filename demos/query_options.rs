use genderize::{Genderize, Query};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // an empty key falls back to the anonymous quota
    let api_key = env::var("GENDERIZE_API_KEY").unwrap_or_default();

    let client = Genderize::builder()
        .with_user_agent("GenderizeDocs/0.0")
        .with_api_key(api_key)
        .build()?;

    let responses = client
        .get(Query::new(["Kim"]).with_country_id("dk").with_language_id("da"))
        .await?;

    for response in responses {
        if response.is_known() {
            println!(
                "{}: {} ({:.0}% of {} samples)",
                response.name,
                response.gender,
                response.probability * 100.0,
                response.count
            );
        } else {
            println!("{}: unknown", response.name);
        }
    }

    Ok(())
}
