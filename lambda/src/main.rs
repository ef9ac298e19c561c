use first_name_lambda::Config;
use first_names::RandomFirstNames;
use lamedh_runtime::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // The platform stamps every log line already.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .init();

    let config = Config::from_env()?;
    info!(gender = ?config.gender, "starting first-name function");

    first_name_lambda::run(RandomFirstNames::new(config.gender)).await
}
