use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pager_commands::{COMMAND_PREFIX, Reply, handle_callback, handle_message};
use pager_core::{Context, Settings};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().context("invalid pager configuration")?;
    let ctx = Context::new(settings);

    info!(command = %ctx.settings.command, "pager bot is listening on stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    // Commands start with the prefix; anything shaped like `key=value` is a button press
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                error!(?source, "stdin read error");
                break;
            }
        };
        let input = line.trim();

        let reply = if input.starts_with(COMMAND_PREFIX) {
            handle_message(&ctx, input)?
        } else if input.contains('=') {
            handle_callback(&ctx, input)?
        } else {
            None
        };

        if let Some(reply) = reply {
            write_reply(&mut stdout, &reply)?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(()) // Return Success, shutdown cleanly
}

fn write_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    writeln!(out, "{}", reply.content)?;

    if !reply.keyboard.is_empty() {
        let row = reply
            .keyboard
            .buttons()
            .iter()
            .map(|button| format!("[{}]({})", button.text, button.callback_data))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{row}")?;
    }

    out.flush()
}
