//! Create-key command
//!
//! Mints a `<prefix>.<secret>` credential and prints it once. The store
//! is process-local, so the credential is handed to the server through
//! the `BLOG_API_KEY` environment variable rather than written anywhere.

use clap::Args;

use crate::infrastructure::api_key::ApiKeyGenerator;

#[derive(Args)]
pub struct CreateKeyArgs {
    /// Name recorded for the key
    #[arg(long, default_value = "default")]
    pub name: String,
}

pub async fn run(args: CreateKeyArgs) -> anyhow::Result<()> {
    let generated = ApiKeyGenerator::new().generate();

    println!("API key '{}' created. Credential (shown once):", args.name);
    println!("{}", generated.credential());
    println!();
    println!("Start the server with BLOG_API_KEY={}", generated.credential());

    Ok(())
}
