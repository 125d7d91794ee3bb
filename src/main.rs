use cog_buddy::{bot, config, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings (defaults when config.toml is absent)
    let settings = config::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    info!(
        move_timeout_secs = settings.connect_four.move_timeout_secs,
        prefix = %settings.bot.prefix,
        "Settings loaded"
    );

    // 4. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in Settings
    let token = config::discord::bot_token()
        .inspect_err(|e| error!("{} not found: {}", config::discord::TOKEN_VAR, e))?;

    bot::run_bot(token, settings).await
}
