//! Connect Four view - shows a [`Session`] as an embed with one button per column.

use super::{Press, ViewHooks, action_of, custom_id};
use crate::{
    bot::Context,
    core::{
        actor::ActorId,
        connect_four::session::{
            ColumnControl, GameEmbed, GameRender, GameState, MoveOutcome, Session, Slot,
        },
    },
    errors::{Error, Result},
};
use poise::{CreateReply, serenity_prelude as serenity};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Action prefix of the column buttons
const COLUMN_ACTION: &str = "c4";
/// Discord allows five buttons per row
const ROW_WIDTH: usize = 5;

fn column_action(column: usize) -> String {
    format!("{COLUMN_ACTION}:{column}")
}

fn parse_column_action(action: &str) -> Option<usize> {
    action
        .strip_prefix(COLUMN_ACTION)?
        .strip_prefix(':')?
        .parse()
        .ok()
}

fn embed_for(embed: &GameEmbed) -> serenity::CreateEmbed {
    let built = serenity::CreateEmbed::new()
        .title(embed.title)
        .description(embed.description.clone())
        .footer(serenity::CreateEmbedFooter::new("Started"));

    match serenity::Timestamp::from_unix_timestamp(embed.started_at.timestamp()) {
        Ok(started) => built.timestamp(started),
        Err(_) => built,
    }
}

fn column_rows(invocation: u64, controls: &[ColumnControl]) -> Vec<serenity::CreateActionRow> {
    controls
        .chunks(ROW_WIDTH)
        .map(|row| {
            serenity::CreateActionRow::Buttons(
                row.iter()
                    .map(|control| {
                        serenity::CreateButton::new(custom_id(invocation, &column_action(control.column)))
                            .emoji(serenity::ReactionType::Unicode(control.label.to_string()))
                            .style(serenity::ButtonStyle::Secondary)
                            .disabled(control.disabled)
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Full message for `render`, used for the first send and for edits.
fn reply_for(invocation: u64, render: &GameRender) -> CreateReply {
    let mut reply = CreateReply::default().components(column_rows(invocation, &render.controls));
    if let Some(content) = &render.content {
        reply = reply.content(content.clone());
    }
    if let Some(embed) = &render.embed {
        reply = reply.embed(embed_for(embed));
    }
    reply
}

/// Same as [`reply_for`] as an in-place update answering a button press.
fn update_for(invocation: u64, render: &GameRender) -> serenity::CreateInteractionResponseMessage {
    let mut update = serenity::CreateInteractionResponseMessage::new()
        .components(column_rows(invocation, &render.controls));
    if let Some(content) = &render.content {
        update = update.content(content.clone());
    }
    if let Some(embed) = &render.embed {
        update = update.embed(embed_for(embed));
    }
    update
}

/// What a collector wake-up means for the game.
#[derive(Debug)]
enum Step {
    /// The active player ran out of time; any press that came with the wake-up is late
    TimedOut {
        /// Player who failed to move
        idle: ActorId,
    },
    /// Woke up without a press before the deadline
    Wait,
    /// A press on a button this view never created
    Unknown,
    /// The press was a valid move
    Moved(MoveOutcome),
    /// The press was rejected, nothing changed
    Rejected(Error),
}

/// Applies one collector wake-up to `session`. The timeout is checked first, so a press
/// arriving at or after the deadline never lands.
fn step(session: &mut Session, invocation: u64, press: Option<Press<'_>>, now: Instant) -> Step {
    if let Some(idle) = session.expire(now) {
        return Step::TimedOut { idle };
    }
    let Some(press) = press else {
        return Step::Wait;
    };
    let Some(column) = action_of(invocation, press.custom_id).and_then(parse_column_action) else {
        return Step::Unknown;
    };

    match session.handle_move(press.actor, column, now) {
        Ok(outcome) => Step::Moved(outcome),
        Err(error) => Step::Rejected(error),
    }
}

/// Posts the board and runs the game until someone wins, the board fills up, or the
/// active player lets the move window run out.
#[instrument(skip(ctx, session, hooks))]
pub async fn run_game(ctx: Context<'_>, mut session: Session, hooks: &dyn ViewHooks) -> Result<()> {
    let invocation = ctx.id();
    let handle = ctx.send(reply_for(invocation, &session.render())).await?;
    info!(
        red = %session.player(Slot::One).id,
        yellow = %session.player(Slot::Two).id,
        "Connect Four game started"
    );

    while !session.state().is_terminal() {
        let press = serenity::ComponentInteractionCollector::new(ctx)
            .filter(move |press| action_of(invocation, &press.data.custom_id).is_some())
            .timeout(session.remaining(Instant::now()))
            .await;

        let next = step(
            &mut session,
            invocation,
            press.as_ref().map(Press::from_interaction),
            Instant::now(),
        );
        match next {
            Step::TimedOut { idle } => {
                info!(player = %idle, "Connect Four game timed out");
                let reply = reply_for(invocation, &session.render());
                if let Err(e) = hooks.on_timeout(ctx, &handle, reply).await {
                    warn!("Failed to show Connect Four timeout: {}", e);
                }
                if let Some(press) = &press {
                    hooks.on_error(ctx, press, Error::GameOver).await;
                }
            }
            Step::Wait => {}
            Step::Unknown => {
                if let Some(press) = &press {
                    warn!(custom_id = %press.data.custom_id, "Unknown Connect Four control");
                }
            }
            Step::Rejected(error) => {
                if let Some(press) = &press {
                    hooks.on_error(ctx, press, error).await;
                }
            }
            Step::Moved(outcome) => {
                debug!(?outcome, "Move accepted");
                let Some(press) = &press else {
                    continue;
                };
                let response = serenity::CreateInteractionResponse::UpdateMessage(update_for(
                    invocation,
                    &session.render(),
                ));
                if let Err(e) = press.create_response(ctx.serenity_context(), response).await {
                    warn!("Failed to update Connect Four board: {}", e);
                }
            }
        }
    }

    match session.state() {
        GameState::Won(slot) => info!(winner = %session.player(slot).id, "Connect Four game won"),
        GameState::Draw => info!("Connect Four game ended in a tie"),
        GameState::TimedOut(_) | GameState::AwaitingMove => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::connect_four::COLUMNS;
    use crate::core::connect_four::session::DEFAULT_MOVE_TIMEOUT;
    use crate::test_utils::{ALICE, BOB, CAROL, new_session};

    #[test]
    fn test_column_action_round_trip() {
        for column in 0..COLUMNS {
            assert_eq!(parse_column_action(&column_action(column)), Some(column));
        }
        assert_eq!(parse_column_action("c4:"), None);
        assert_eq!(parse_column_action("c4:x"), None);
        assert_eq!(parse_column_action("next"), None);
    }

    #[test]
    fn test_columns_split_into_rows() {
        let (session, _) = new_session();
        let rows = column_rows(9, &session.controls());
        assert_eq!(rows.len(), 2);
    }

    fn press(actor: ActorId, custom_id: &str) -> Press<'_> {
        Press { actor, custom_id }
    }

    #[test]
    fn test_step_applies_move() {
        let (mut session, now) = new_session();
        let id = custom_id(9, &column_action(3));
        let result = step(&mut session, 9, Some(press(ALICE, &id)), now);
        assert!(matches!(result, Step::Moved(MoveOutcome::Continue { next }) if next == BOB));
        assert_eq!(session.board().occupied(), 1);
    }

    #[test]
    fn test_step_rejects_wrong_player() {
        let (mut session, now) = new_session();
        let id = custom_id(9, &column_action(3));
        let result = step(&mut session, 9, Some(press(BOB, &id)), now);
        assert!(matches!(result, Step::Rejected(Error::NotYourTurn { active }) if active == ALICE.0));
        let result = step(&mut session, 9, Some(press(CAROL, &id)), now);
        assert!(matches!(result, Step::Rejected(Error::NotAParticipant)));
        assert_eq!(session.board().occupied(), 0);
    }

    #[test]
    fn test_step_times_out_before_late_press() {
        let (mut session, start) = new_session();
        let id = custom_id(9, &column_action(0));
        let late = start + DEFAULT_MOVE_TIMEOUT;

        let result = step(&mut session, 9, Some(press(ALICE, &id)), late);
        assert!(matches!(result, Step::TimedOut { idle } if idle == ALICE));
        assert_eq!(session.board().occupied(), 0);
        assert_eq!(session.state(), GameState::TimedOut(Slot::One));
    }

    #[test]
    fn test_step_waits_and_ignores_unknown_ids() {
        let (mut session, start) = new_session();
        assert!(matches!(step(&mut session, 9, None, start), Step::Wait));
        assert!(matches!(
            step(&mut session, 9, Some(press(ALICE, "9:page:next")), start),
            Step::Unknown
        ));
        assert!(matches!(
            step(&mut session, 9, None, start + DEFAULT_MOVE_TIMEOUT),
            Step::TimedOut { .. }
        ));
    }

    #[test]
    fn test_finished_game_has_no_rows() {
        let (mut session, now) = new_session();
        crate::test_utils::play_moves(&mut session, &[0, 1, 0, 1, 0, 1, 0], now);
        assert!(column_rows(9, &session.controls()).is_empty());
    }
}
