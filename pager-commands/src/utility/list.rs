use tracing::debug;

use crate::{CommandMeta, Reply};
use pager_core::Context;
use pager_utils::pagination::{CallbackData, clamp_page, number_of_pages, parse_one_based_page};

pub const META: CommandMeta = CommandMeta {
    name: "list",
    desc: "Browse the sample catalog page by page.",
    category: "utility",
    usage: "!list [page]",
};

/// Render one page of the sample catalog.
///
/// Inputs:
/// - optional page number: `!list [page]`.
///
/// Error behavior:
/// - returns usage text on invalid page input.
/// - returns bounds text when the requested page is out of range.
pub fn run(ctx: &Context, arg1: Option<&str>) -> anyhow::Result<Reply> {
    let items = build_catalog(ctx.settings.catalog_size);
    let total = number_of_pages(items.len(), ctx.settings.items_per_page)?;

    let Some(requested_page) = parse_one_based_page(arg1) else {
        return Ok(Reply::text(format!(
            "Usage: `{}` (page starts at 1)",
            META.usage
        )));
    };

    if requested_page > total {
        return Ok(Reply::text(format!(
            "Page {} does not exist. Available pages: 1-{}.",
            requested_page, total
        )));
    }

    render_page(ctx, &items, requested_page)
}

/// Handle a keyboard button press for the catalog.
///
/// The target page is clamped in case the catalog shrank since the keyboard
/// was built.
pub fn handle_callback(ctx: &Context, callback: &CallbackData) -> anyhow::Result<Reply> {
    let items = build_catalog(ctx.settings.catalog_size);
    let total = number_of_pages(items.len(), ctx.settings.items_per_page)?;
    let target_page = clamp_page(callback.new_page, total);

    debug!(
        old_page = callback.old_page,
        new_page = callback.new_page,
        target_page,
        "catalog navigation"
    );

    render_page(ctx, &items, target_page)
}

fn render_page(ctx: &Context, items: &[String], page: usize) -> anyhow::Result<Reply> {
    let mut paginator = ctx.settings.paginator_builder().selected_page(page).build(items)?;
    let pagination = paginator.paginate(None)?;

    Ok(Reply {
        content: format!("- {}", pagination.items.join("\n- ")),
        keyboard: pagination.keyboard,
    })
}

fn build_catalog(size: usize) -> Vec<String> {
    (1..=size)
        .map(|index| format!("Sample item #{index}"))
        .collect()
}
