use dotenv::dotenv;
use taskdo::commands::Cli;
use taskdo::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu().await
}
