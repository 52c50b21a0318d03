use std::sync::Arc;

use log::{debug, trace};
use twilight_gateway::Event;
use twilight_model::channel::Message;

use crate::core::BotContext;
use crate::error::{CommandResult, EventHandlerError};

pub async fn handle_event(event: Event, ctx: Arc<BotContext>) -> Result<(), EventHandlerError> {
    if let Event::MessageCreate(msg) = event {
        handle_message(msg.0, ctx).await?;
    }

    Ok(())
}

async fn handle_message(msg: Message, ctx: Arc<BotContext>) -> CommandResult {
    if msg.author.bot {
        return Ok(());
    }

    trace!("Received a message from {}, saying {}", msg.author.name, msg.content);

    let (name, args) = match split_command(&msg.content, &ctx.config.prefix) {
        Some(parts) => parts,
        None => return Ok(()),
    };

    let command = match ctx.commands.get(name) {
        Some(command) => command,
        // Not for us after all
        None => return Ok(()),
    };

    if command.owner_only() && !ctx.config.is_owner(msg.author.id.get()) {
        debug!(
            "{} tried to use the owner-only command {}",
            msg.author.name,
            command.name()
        );
        return Ok(());
    }

    debug!("Executing command {} for {}", command.name(), msg.author.name);
    ctx.stats.command_used();

    command.execute(ctx.clone(), msg, args).await
}

fn split_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, String)> {
    let stripped = content.strip_prefix(prefix)?;
    let mut parts = stripped.splitn(2, char::is_whitespace);
    let name = parts.next().filter(|name| !name.is_empty())?;
    let args = parts.next().unwrap_or("").trim().to_string();

    Some((name, args))
}

#[cfg(test)]
mod tests {
    use super::split_command;

    #[test]
    fn bare_command_has_no_args() {
        assert_eq!(split_command("!ping", "!"), Some(("ping", String::new())));
    }

    #[test]
    fn args_are_split_from_the_name() {
        assert_eq!(
            split_command("!echo hello world", "!"),
            Some(("echo", String::from("hello world")))
        );
    }

    #[test]
    fn missing_prefix_is_ignored() {
        assert_eq!(split_command("ping", "!"), None);
    }

    #[test]
    fn empty_command_name_is_ignored() {
        assert_eq!(split_command("!", "!"), None);
        assert_eq!(split_command("! ping", "!"), None);
    }

    #[test]
    fn multi_character_prefixes_work() {
        assert_eq!(
            split_command("?>coinflip order pizza", "?>"),
            Some(("coinflip", String::from("order pizza")))
        );
    }
}
