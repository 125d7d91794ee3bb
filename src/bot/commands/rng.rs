//! Random commands - choose, rand, randint, randcard and dice.
//!
//! `thread_rng` is not `Send`, so each command draws its values in a block that ends
//! before the first `await`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::rng,
        errors::{Error, Result},
    };
    use poise::{CreateReply, serenity_prelude as serenity};
    use tracing::instrument;

    /// Makes a choice between multiple options.
    ///
    /// Separate options with commas, or with spaces when no option contains one.
    #[poise::command(slash_command, prefix_command, category = "Random")]
    #[instrument(skip(ctx))]
    pub async fn choose(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Options to pick from"]
        #[rest]
        choices: String,
    ) -> Result<()> {
        let picked = {
            let choices = rng::split_choices(&choices);
            let mut source = rand::thread_rng();
            rng::choose(&choices, &mut source)?.to_string()
        };

        // Choices are user text, never let them ping anyone.
        ctx.send(
            CreateReply::default()
                .content(picked)
                .allowed_mentions(serenity::CreateAllowedMentions::new()),
        )
        .await?;
        Ok(())
    }

    /// Generates a random number between 0 and 1.
    #[poise::command(slash_command, prefix_command, category = "Random")]
    pub async fn rand(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let value = rng::unit(&mut rand::thread_rng());
        ctx.say(value.to_string()).await?;
        Ok(())
    }

    /// Generates a random integer between min and max, both included.
    #[poise::command(slash_command, prefix_command, category = "Random")]
    #[instrument(skip(ctx))]
    pub async fn randint(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Lowest possible value"] min: i64,
        #[description = "Highest possible value"] max: i64,
    ) -> Result<()> {
        let value = rng::int_between(min, max, &mut rand::thread_rng());
        ctx.say(value.to_string()).await?;
        Ok(())
    }

    /// Draws a random card from a standard deck.
    #[poise::command(slash_command, prefix_command, category = "Random")]
    pub async fn randcard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let card = rng::card(&mut rand::thread_rng());
        ctx.say(card).await?;
        Ok(())
    }

    /// Rolls up to 20 dice.
    #[poise::command(slash_command, prefix_command, category = "Random")]
    #[instrument(skip(ctx))]
    pub async fn dice(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "How many dice to roll (1-20, default 1)"] count: Option<u32>,
        #[description = "Sides per die (default 6)"] faces: Option<u32>,
    ) -> Result<()> {
        let rolls = rng::roll_dice(count.unwrap_or(1), faces.unwrap_or(6), &mut rand::thread_rng())?;
        ctx.say(rng::format_rolls(&rolls)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
