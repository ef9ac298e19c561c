use first_names::{NameError, NameSource};
use lamedh_runtime::Error;

// Answers every invocation with the same name, which is handy when checking
// a deployment end to end.
struct Fixed(String);

impl NameSource for Fixed {
    fn next_name(&self) -> Result<String, NameError> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().without_time().init();

    let name = std::env::var("FIXED_FIRST_NAME").unwrap_or_else(|_| "Mary".to_string());
    first_name_lambda::run(Fixed(name)).await
}
