//! Framework setup - command list, error reporting, registration and client startup.

use crate::{
    bot::{BotData, commands},
    config::{Settings, discord},
    errors::{Error, Result},
};
use poise::{CreateReply, serenity_prelude as serenity};
use tracing::{debug, error, info, instrument, warn};

/// Reply for command failures that are not the user's fault.
const COMMAND_FAILURE: &str = "An error occurred while running that command.";

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::commands(),
        commands::connect4(),
        commands::choose(),
        commands::rand(),
        commands::randint(),
        commands::randcard(),
        commands::dice(),
    ]
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let text = if error.is_user_facing() {
                debug!("Command `{}` rejected: {}", ctx.command().name, error);
                error.to_string()
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
                COMMAND_FAILURE.to_string()
            };
            if let Err(e) = ctx.send(CreateReply::default().content(text).ephemeral(true)).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            warn!("Framework error: {}", error);
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the framework and runs the client until it shuts down.
#[instrument(skip(token, settings))]
pub async fn run_bot(token: String, settings: Settings) -> Result<()> {
    let dev_guild = discord::dev_guild_id();
    let prefix = settings.bot.prefix.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = dev_guild {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }
                Ok(BotData::new(settings))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
