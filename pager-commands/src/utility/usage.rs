use crate::{COMMANDS, CommandMeta, Reply};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "!usage <command>",
};

/// Show usage for a specific command.
///
/// Missing argument returns this command's usage; an unknown command returns
/// a short not-found message.
pub fn run(arg1: Option<&str>) -> Reply {
    let Some(raw_name) = arg1 else {
        return Reply::text(format!("Usage: `{}`", META.usage));
    };

    let lookup = raw_name.trim().trim_start_matches('!').to_ascii_lowercase();

    match COMMANDS.iter().find(|command| command.name == lookup) {
        Some(command) => Reply::text(format!("Usage: `{}` - {}", command.usage, command.desc)),
        None => Reply::text(format!("Unknown command: `{}`", lookup)),
    }
}
