//! Interactive views - messages with buttons driven by a core state machine.
//!
//! A view owns one state machine, listens for button presses on its own message, and
//! delegates the two side reactions (a rejected press and an elapsed inactivity window)
//! to a [`ViewHooks`] implementation passed in by the caller.

/// Connect Four board view
pub mod connect_four;
/// Page navigation view
pub mod paginator;

use crate::{bot::Context, core::actor::ActorId, errors::Error};
use async_trait::async_trait;
use poise::{CreateReply, ReplyHandle, serenity_prelude as serenity};
use tracing::{debug, error, warn};

/// Reply shown when a press failed for a reason the user cannot fix.
pub const GENERIC_FAILURE: &str = "Something went wrong while handling that.";

/// Reactions a view hands off to whoever created it.
#[async_trait]
pub trait ViewHooks: Send + Sync {
    /// The inactivity window ran out; `reply` is the final state of the message.
    ///
    /// The default applies `reply` to the message and ignores a message that has
    /// been deleted in the meantime.
    async fn on_timeout(
        &self,
        ctx: Context<'_>,
        handle: &ReplyHandle<'_>,
        reply: CreateReply,
    ) -> crate::errors::Result<()> {
        match handle.edit(ctx, reply).await {
            Ok(()) => Ok(()),
            Err(e) if is_unknown_message(&e) => {
                debug!("View message is gone, skipping timeout edit");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// A press was rejected or failed.
    ///
    /// The default tells the presser privately: rejections with their own text,
    /// anything else with [`GENERIC_FAILURE`] after logging it.
    async fn on_error(&self, ctx: Context<'_>, press: &serenity::ComponentInteraction, error: Error) {
        let text = if error.is_user_facing() {
            debug!(user = %press.user.id, "Rejected press: {}", error);
            error.to_string()
        } else {
            error!(user = %press.user.id, "Failed to handle press: {:?}", error);
            GENERIC_FAILURE.to_string()
        };

        notify(ctx, press, text).await;
    }
}

/// A button press reduced to what the state machines need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press<'a> {
    /// Who pressed
    pub actor: ActorId,
    /// Custom id of the pressed button
    pub custom_id: &'a str,
}

impl<'a> Press<'a> {
    /// Reads actor and custom id off an interaction.
    #[must_use]
    pub fn from_interaction(press: &'a serenity::ComponentInteraction) -> Self {
        Self {
            actor: ActorId(press.user.id.get()),
            custom_id: &press.data.custom_id,
        }
    }
}

/// Hooks with the default behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl ViewHooks for DefaultHooks {}

/// Answers `press` with a message only the presser can see.
pub async fn notify(ctx: Context<'_>, press: &serenity::ComponentInteraction, text: String) {
    let response = serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
    );
    if let Err(e) = press.create_response(ctx.serenity_context(), response).await {
        warn!("Failed to send ephemeral notice: {}", e);
    }
}

/// Same as [`notify`] for a press whose initial response was already used (a dialog).
pub async fn notify_followup(ctx: Context<'_>, press: &serenity::ComponentInteraction, text: String) {
    let followup = serenity::CreateInteractionResponseFollowup::new()
        .content(text)
        .ephemeral(true);
    if let Err(e) = press.create_followup(ctx.serenity_context(), followup).await {
        warn!("Failed to send ephemeral follow-up: {}", e);
    }
}

/// True when Discord answered 404, i.e. the message no longer exists.
#[must_use]
pub fn is_unknown_message(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

/// Invocation-scoped custom id, so presses on other views are never collected.
#[must_use]
pub fn custom_id(invocation: u64, action: &str) -> String {
    format!("{invocation}:{action}")
}

/// The action part of a custom id built by [`custom_id`] for `invocation`.
#[must_use]
pub fn action_of(invocation: u64, custom_id: &str) -> Option<&str> {
    custom_id
        .split_once(':')
        .filter(|(prefix, _)| prefix.parse::<u64>().ok() == Some(invocation))
        .map(|(_, action)| action)
}
