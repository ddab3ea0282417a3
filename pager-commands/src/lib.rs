pub mod utility;

use tracing::{debug, warn};

use pager_core::Context;
use pager_utils::pagination::{Keyboard, parse_callback_data};

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::list::META,
    utility::usage::META,
    // Add new commands here
];

/// Plain reply produced by a command: text plus an optional keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub keyboard: Keyboard,
}

impl Reply {
    /// A text-only reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            keyboard: Keyboard::default(),
        }
    }
}

/// Dispatch a `!command [args]` message.
///
/// Returns `Ok(None)` for non-command text and unknown commands.
pub fn handle_message(ctx: &Context, content: &str) -> anyhow::Result<Option<Reply>> {
    let content = content.trim();

    let Some(content) = content.strip_prefix(COMMAND_PREFIX) else {
        return Ok(None);
    };

    let mut command_and_rest = content.trim().splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .and_then(|rest| rest.split_whitespace().next());

    let reply = match cmd.as_str() {
        "list" => utility::list::run(ctx, arg1)?,
        "usage" => utility::usage::run(arg1),
        // Add new commands here
        _ => {
            debug!(command = %cmd, "ignoring unknown command");
            return Ok(None);
        }
    };

    Ok(Some(reply))
}

/// Dispatch callback data attached to a pressed keyboard button.
///
/// Returns `Ok(None)` when the data cannot be parsed or belongs to no command.
pub fn handle_callback(ctx: &Context, data: &str) -> anyhow::Result<Option<Reply>> {
    let Some(callback) = parse_callback_data(data.trim()) else {
        warn!(data, "unparsable callback data");
        return Ok(None);
    };

    if callback.command == ctx.settings.command {
        return utility::list::handle_callback(ctx, &callback).map(Some);
    }

    warn!(command = %callback.command, "callback for unknown command");
    Ok(None)
}
