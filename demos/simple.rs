use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let responses = genderize::get(["James", "Eva", "Thunderhorse"]).await?;

    for response in responses {
        info!(
            name = %response.name,
            gender = %response.gender,
            probability = response.probability,
            count = response.count,
            "gender estimate"
        );
        println!("{}: {}", response.name, response.gender);
    }

    Ok(())
}
