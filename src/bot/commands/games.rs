//! Game commands - starts interactive games between two members.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            views::{DefaultHooks, connect_four::run_game},
        },
        core::{
            actor::{Actor, ActorId},
            connect_four::Session,
        },
        errors::{Error, Result},
    };
    use poise::{CreateReply, serenity_prelude as serenity};
    use std::time::Instant;
    use tracing::{info, instrument};

    fn actor_of(user: &serenity::User) -> Actor {
        Actor {
            id: ActorId(user.id.get()),
            is_bot: user.bot,
        }
    }

    /// Play connect4 with another user!
    ///
    /// The challenger plays red and moves first. Each player has a limited time to pick
    /// a column, otherwise the game ends.
    #[poise::command(slash_command, prefix_command, guild_only, category = "Games")]
    #[instrument(skip(ctx, target), fields(target = %target.id))]
    pub async fn connect4(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The user to play connect4 with"] target: serenity::User,
    ) -> Result<()> {
        let window = ctx.data().settings.connect_four.move_timeout();
        let session = match Session::start(actor_of(ctx.author()), actor_of(&target), window, Instant::now()) {
            Ok(session) => session,
            Err(error @ Error::InvalidOpponent) => {
                info!(challenger = %ctx.author().id, "Rejected Connect Four opponent");
                ctx.send(CreateReply::default().content(error.to_string()).ephemeral(true))
                    .await?;
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        run_game(ctx, session, &DefaultHooks).await
    }
}

// Re-export all commands
pub use inner::*;
