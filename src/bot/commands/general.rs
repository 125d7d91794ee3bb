//! General Discord commands - ping, help and the registered command listing.
//! Both listings are shown through the paginator view.

use crate::core::pages::TextPages;
use crate::errors::Result;
use std::collections::BTreeMap;

/// Category used for commands that do not declare one
const UNCATEGORIZED: &str = "General";

/// Usage line such as `randint <min> <max>`; optional parameters go in brackets.
fn signature<U, E>(command: &poise::Command<U, E>) -> String {
    let mut line = command.qualified_name.clone();
    for parameter in &command.parameters {
        let wrapped = if parameter.required {
            format!(" <{}>", parameter.name)
        } else {
            format!(" [{}]", parameter.name)
        };
        line.push_str(&wrapped);
    }
    line
}

fn describe<U, E>(command: &poise::Command<U, E>) -> String {
    command.description.as_deref().unwrap_or("No description").to_string()
}

/// Visible commands (subcommands flattened) grouped by category name.
fn help_sections<U, E>(commands: &[poise::Command<U, E>]) -> BTreeMap<String, Vec<String>> {
    fn visit<U, E>(command: &poise::Command<U, E>, sections: &mut BTreeMap<String, Vec<String>>) {
        if command.hide_in_help || command.owners_only {
            return;
        }
        if command.subcommands.is_empty() {
            let category = command.category.as_deref().unwrap_or(UNCATEGORIZED).to_string();
            sections
                .entry(category)
                .or_default()
                .push(format!("`/{}` - {}", signature(command), describe(command)));
        }
        for subcommand in &command.subcommands {
            visit(subcommand, sections);
        }
    }

    let mut sections = BTreeMap::new();
    for command in commands {
        visit(command, &mut sections);
    }
    sections
}

/// Every registered command, hidden ones included, packed into code-block pages.
fn command_dump<U, E>(commands: &[poise::Command<U, E>]) -> Result<Vec<String>> {
    fn visit<U, E>(command: &poise::Command<U, E>, pages: &mut TextPages) -> Result<()> {
        let mut flags = Vec::new();
        if command.owners_only {
            flags.push("owner");
        }
        if command.hide_in_help {
            flags.push("hidden");
        }
        if command.guild_only {
            flags.push("guild");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };

        pages.add_line(&format!("{}{flags}", signature(command)))?;
        pages.add_line(&format!("    {}", describe(command)))?;
        command
            .subcommands
            .iter()
            .try_for_each(|subcommand| visit(subcommand, pages))
    }

    let mut pages = TextPages::with_language("md");
    for command in commands {
        visit(command, &mut pages)?;
    }
    Ok(pages.pages())
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{command_dump, help_sections};
    use crate::{
        bot::{
            BotData,
            views::{DefaultHooks, paginator::run_paginator},
        },
        core::{
            actor::ActorId,
            paginator::{Paginator, PaginatorKind},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::time::Instant;
    use tracing::instrument;

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command, category = "General")]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Shows every command, one page per category.
    #[poise::command(slash_command, prefix_command, category = "General")]
    #[instrument(skip(ctx))]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let sections = help_sections(&ctx.framework().options().commands);
        let total = sections.len();
        let pages = sections
            .into_iter()
            .enumerate()
            .map(|(index, (category, lines))| {
                serenity::CreateEmbed::new()
                    .title(format!("Help \u{b7} {category}"))
                    .description(lines.join("\n"))
                    .footer(serenity::CreateEmbedFooter::new(format!(
                        "Category {} of {total}",
                        index + 1
                    )))
            })
            .collect();

        let window = ctx.data().settings.paginator.timeout(PaginatorKind::Embeds);
        let paginator = Paginator::new(ActorId(ctx.author().id.get()), pages, window, Instant::now())?;
        run_paginator(ctx, paginator, &DefaultHooks).await
    }

    /// Dumps every registered command, hidden ones included.
    #[poise::command(slash_command, prefix_command, owners_only, hide_in_help, category = "General")]
    #[instrument(skip(ctx))]
    pub async fn commands(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let pages = command_dump(&ctx.framework().options().commands)?;
        let window = ctx
            .data()
            .settings
            .paginator
            .timeout(PaginatorKind::CommandOutput);
        let paginator = Paginator::new(ActorId(ctx.author().id.get()), pages, window, Instant::now())?;
        run_paginator(ctx, paginator, &DefaultHooks).await
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::bot::{BotData, commands};
    use crate::errors::Error;

    fn registered() -> Vec<poise::Command<BotData, Error>> {
        vec![
            commands::ping(),
            commands::help(),
            commands::commands(),
            commands::connect4(),
            commands::randint(),
            commands::dice(),
        ]
    }

    #[test]
    fn test_signature_marks_optional_parameters() {
        assert_eq!(signature(&commands::randint()), "randint <min> <max>");
        assert_eq!(signature(&commands::dice()), "dice [count] [faces]");
        assert_eq!(signature(&commands::ping()), "ping");
    }

    #[test]
    fn test_help_sections_group_and_hide() {
        let sections = help_sections(&registered());
        assert_eq!(
            sections.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Games", "General", "Random"]
        );
        let general = &sections["General"];
        assert!(general.iter().any(|line| line.starts_with("`/ping`")));
        assert!(!general.iter().any(|line| line.starts_with("`/commands`")));
        assert!(sections["Games"][0].starts_with("`/connect4 <target>`"));
    }

    #[test]
    fn test_command_dump_lists_everything() {
        let pages = command_dump(&registered()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].starts_with("```md\n"));
        assert!(pages[0].contains("commands (owner, hidden)"));
        assert!(pages[0].contains("connect4 <target> (guild)"));
    }
}
