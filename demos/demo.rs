//! Check one address against mailboxlayer.
//!
//! ```sh
//! MAILBOXLAYER_ACCESS_KEY=... cargo run --example demo -- someone@gmail.com
//! ```

use mailboxlayer_client::{Client, Error};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Ok(access_key) = std::env::var("MAILBOXLAYER_ACCESS_KEY") else {
        eprintln!("MAILBOXLAYER_ACCESS_KEY is not set");
        std::process::exit(2);
    };
    let email = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "support@apilayer.com".to_string());

    let client = Client::builder(access_key)
        .timeout(Duration::from_secs(15))
        .build()?;

    match client.check(&email).await {
        Ok(verdict) => {
            println!("Email:        {}", verdict.email);
            println!("Format valid: {}", verdict.format_valid);
            println!("MX found:     {}", verdict.mx_found);
            println!("SMTP check:   {}", verdict.smtp_check_passed);
            println!("Catch-all:    {}", verdict.is_catch_all);
            println!("Role account: {}", verdict.is_role_account);
            println!("Disposable:   {}", verdict.is_disposable);
            println!("Free:         {}", verdict.is_free_provider);
            println!("Score:        {:.2}", verdict.score);
            if let Some(suggestion) = verdict.suggestion() {
                println!("Did you mean: {suggestion}");
            }
            Ok(())
        }
        Err(Error::Api(api)) => {
            eprintln!("mailboxlayer rejected the request: [{}] {}", api.kind, api.message);
            std::process::exit(1);
        }
        Err(err) => Err(err),
    }
}
