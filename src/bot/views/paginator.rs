//! Paginator view - first/previous/indicator/next/last buttons, a "go to page" dialog
//! and a quit button, all restricted to the owner.

use super::{Press, ViewHooks, action_of, custom_id, notify_followup};
use crate::{
    bot::Context,
    core::{
        actor::ActorId,
        paginator::{PageControls, Paginator, parse_page},
    },
    errors::{Error, Result},
};
use poise::{CreateReply, serenity_prelude as serenity};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Something a paginator can show as one page.
pub trait Page: Send + Sync {
    /// The page as a full message.
    fn to_reply(&self) -> CreateReply;
    /// The page as an in-place update answering a press.
    fn to_update(&self) -> serenity::CreateInteractionResponseMessage;
}

impl Page for String {
    fn to_reply(&self) -> CreateReply {
        CreateReply::default().content(self.clone())
    }

    fn to_update(&self) -> serenity::CreateInteractionResponseMessage {
        serenity::CreateInteractionResponseMessage::new().content(self.clone())
    }
}

impl Page for serenity::CreateEmbed {
    fn to_reply(&self) -> CreateReply {
        CreateReply::default().embed(self.clone())
    }

    fn to_update(&self) -> serenity::CreateInteractionResponseMessage {
        serenity::CreateInteractionResponseMessage::new().embed(self.clone())
    }
}

/// Button actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    First,
    Previous,
    Indicator,
    Next,
    Last,
    GoTo,
    Quit,
}

impl Action {
    const fn id(self) -> &'static str {
        match self {
            Self::First => "page:first",
            Self::Previous => "page:previous",
            Self::Indicator => "page:indicator",
            Self::Next => "page:next",
            Self::Last => "page:last",
            Self::GoTo => "page:goto",
            Self::Quit => "page:quit",
        }
    }

    fn parse(id: &str) -> Option<Self> {
        [
            Self::First,
            Self::Previous,
            Self::Indicator,
            Self::Next,
            Self::Last,
            Self::GoTo,
            Self::Quit,
        ]
        .into_iter()
        .find(|action| action.id() == id)
    }
}

/// Page number dialog
#[derive(Debug, poise::Modal)]
#[name = "Go to page"]
struct JumpModal {
    #[name = "Page"]
    #[placeholder = "Enter a page number"]
    #[min_length = 1]
    #[max_length = 10]
    page: String,
}

fn button(invocation: u64, action: Action) -> serenity::CreateButton {
    serenity::CreateButton::new(custom_id(invocation, action.id()))
}

fn arrow(invocation: u64, action: Action, glyph: &str, disabled: bool, style: serenity::ButtonStyle) -> serenity::CreateButton {
    button(invocation, action)
        .emoji(serenity::ReactionType::Unicode(glyph.to_string()))
        .style(if disabled { serenity::ButtonStyle::Secondary } else { style })
        .disabled(disabled)
}

fn control_rows(invocation: u64, controls: &PageControls) -> Vec<serenity::CreateActionRow> {
    let navigation = vec![
        arrow(invocation, Action::First, "\u{23ee}\u{fe0f}", controls.first_disabled, serenity::ButtonStyle::Secondary),
        arrow(invocation, Action::Previous, "\u{2b05}\u{fe0f}", controls.previous_disabled, serenity::ButtonStyle::Success),
        button(invocation, Action::Indicator)
            .label(controls.indicator.clone())
            .style(serenity::ButtonStyle::Primary)
            .disabled(true),
        arrow(invocation, Action::Next, "\u{27a1}\u{fe0f}", controls.next_disabled, serenity::ButtonStyle::Success),
        arrow(invocation, Action::Last, "\u{23ed}\u{fe0f}", controls.last_disabled, serenity::ButtonStyle::Secondary),
    ];
    let extra = vec![
        button(invocation, Action::GoTo)
            .label("Go To Page...")
            .style(serenity::ButtonStyle::Primary),
        button(invocation, Action::Quit)
            .label("Quit")
            .style(serenity::ButtonStyle::Danger),
    ];

    vec![
        serenity::CreateActionRow::Buttons(navigation),
        serenity::CreateActionRow::Buttons(extra),
    ]
}

/// What a collector wake-up means for the paginator.
#[derive(Debug)]
enum Step {
    /// Nobody pressed anything within the window; any press that came with the wake-up
    /// is late
    TimedOut,
    /// Woke up without a press before the deadline
    Wait,
    /// A press on a button this view never created
    Unknown,
    /// The cursor may have moved, show the current page
    Moved,
    /// The owner quit
    Stopped,
    /// The owner asked for the page dialog; the window was restarted
    OpenDialog,
    /// The press was rejected, nothing changed
    Rejected(Error),
}

/// Applies one collector wake-up to `paginator`. The timeout is checked first, and every
/// accepted press restarts the inactivity window.
fn step<P>(paginator: &mut Paginator<P>, invocation: u64, press: Option<Press<'_>>, now: Instant) -> Step {
    if paginator.expire(now) {
        return Step::TimedOut;
    }
    let Some(press) = press else {
        return Step::Wait;
    };
    let Some(action) = action_of(invocation, press.custom_id).and_then(Action::parse) else {
        return Step::Unknown;
    };

    let actor = press.actor;
    let result = match action {
        Action::First => paginator.first(actor, now).map(drop),
        Action::Previous => paginator.previous(actor, now).map(drop),
        Action::Next => paginator.next(actor, now).map(drop),
        Action::Last => paginator.last(actor, now).map(drop),
        Action::Indicator | Action::GoTo => paginator.touch(actor, now),
        Action::Quit => paginator.stop(actor),
    };

    match (result, action) {
        (Err(error), _) => Step::Rejected(error),
        (Ok(()), Action::Quit) => Step::Stopped,
        (Ok(()), Action::GoTo) => Step::OpenDialog,
        (Ok(()), _) => Step::Moved,
    }
}

/// Applies the text typed into the page dialog; `None` means the dialog timed out.
fn apply_answer<P>(
    paginator: &mut Paginator<P>,
    actor: ActorId,
    answer: Option<&str>,
    now: Instant,
) -> Result<()> {
    let answer = answer.ok_or(Error::PaginatorClosed)?;
    let page = parse_page(answer)?;
    paginator.jump_to(actor, page, now).map(drop)
}

async fn show_timeout<P: Page>(
    ctx: Context<'_>,
    paginator: &Paginator<P>,
    handle: &poise::ReplyHandle<'_>,
    hooks: &dyn ViewHooks,
) {
    info!(owner = %paginator.owner(), "Paginator timed out");
    let reply = paginator.current().to_reply().components(Vec::new());
    if let Err(e) = hooks.on_timeout(ctx, handle, reply).await {
        warn!("Failed to show paginator timeout: {}", e);
    }
}

/// Sends the first page and serves navigation until the owner quits or nobody presses
/// anything for the paginator's window.
#[instrument(skip(ctx, paginator, hooks))]
pub async fn run_paginator<P: Page>(
    ctx: Context<'_>,
    mut paginator: Paginator<P>,
    hooks: &dyn ViewHooks,
) -> Result<()> {
    let invocation = ctx.id();
    let handle = ctx
        .send(
            paginator
                .current()
                .to_reply()
                .components(control_rows(invocation, &paginator.controls())),
        )
        .await?;
    debug!(owner = %paginator.owner(), pages = paginator.len(), "Paginator started");

    while paginator.is_active() {
        let press = serenity::ComponentInteractionCollector::new(ctx)
            .filter(move |press| action_of(invocation, &press.data.custom_id).is_some())
            .timeout(paginator.remaining(Instant::now()))
            .await;

        let next = step(
            &mut paginator,
            invocation,
            press.as_ref().map(Press::from_interaction),
            Instant::now(),
        );
        let Some(press) = press else {
            if matches!(next, Step::TimedOut) {
                show_timeout(ctx, &paginator, &handle, hooks).await;
            }
            continue;
        };

        let update = match next {
            Step::TimedOut => {
                show_timeout(ctx, &paginator, &handle, hooks).await;
                hooks.on_error(ctx, &press, Error::PaginatorClosed).await;
                continue;
            }
            Step::Wait => continue,
            Step::Unknown => {
                warn!(custom_id = %press.data.custom_id, "Unknown paginator control");
                continue;
            }
            Step::Rejected(error) => {
                hooks.on_error(ctx, &press, error).await;
                continue;
            }
            Step::OpenDialog => {
                jump(ctx, &mut paginator, &handle, press, hooks).await;
                continue;
            }
            Step::Stopped => {
                debug!(owner = %paginator.owner(), "Paginator stopped");
                paginator.current().to_update().components(Vec::new())
            }
            Step::Moved => paginator
                .current()
                .to_update()
                .components(control_rows(invocation, &paginator.controls())),
        };

        let response = serenity::CreateInteractionResponse::UpdateMessage(update);
        if let Err(e) = press.create_response(ctx.serenity_context(), response).await {
            warn!("Failed to update paginator: {}", e);
        }
    }

    Ok(())
}

/// Opens the page dialog for `press` and applies the answer.
async fn jump<P: Page>(
    ctx: Context<'_>,
    paginator: &mut Paginator<P>,
    handle: &poise::ReplyHandle<'_>,
    press: serenity::ComponentInteraction,
    hooks: &dyn ViewHooks,
) {
    let actor = ActorId(press.user.id.get());
    let answer = match poise::execute_modal_on_component_interaction::<JumpModal>(
        ctx,
        press.clone(),
        None,
        Some(paginator.remaining(Instant::now())),
    )
    .await
    {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Failed to open page dialog: {}", e);
            return;
        }
    };

    let now = Instant::now();
    if paginator.expire(now) {
        show_timeout(ctx, paginator, handle, hooks).await;
    }

    let typed = answer.as_ref().map(|answer| answer.page.as_str());
    match apply_answer(paginator, actor, typed, now) {
        Ok(()) => {
            let reply = paginator
                .current()
                .to_reply()
                .components(control_rows(ctx.id(), &paginator.controls()));
            if let Err(e) = handle.edit(ctx, reply).await {
                warn!("Failed to show jumped-to page: {}", e);
            }
        }
        Err(error) => notify_followup(ctx, &press, error.to_string()).await,
    }
}
