use pager_commands::{Reply, handle_callback, handle_message};
use pager_core::{Context, Settings};

fn context() -> Context {
    Context::new(Settings::default())
}

fn expect_reply(reply: anyhow::Result<Option<Reply>>) -> Reply {
    reply.unwrap().expect("a reply")
}

#[test]
fn list_renders_first_page_by_default() {
    let reply = expect_reply(handle_message(&context(), "!list"));

    assert!(reply.content.starts_with("- Sample item #1\n"));
    assert!(reply.content.ends_with("- Sample item #5"));
    assert_eq!(reply.keyboard.texts(), vec!["· 1 ·", "2", "3", "4 ›", "5 »"]);
    assert_eq!(
        reply.keyboard.callback_data()[1],
        "command=list&oldPage=1&newPage=2"
    );
}

#[test]
fn list_accepts_a_page_argument() {
    let reply = expect_reply(handle_message(&context(), "  !LIST 5  "));

    assert!(reply.content.starts_with("- Sample item #21"));
    assert_eq!(reply.content.lines().count(), 4);
    assert_eq!(reply.keyboard.texts(), vec!["« 1", "‹ 2", "3", "4", "· 5 ·"]);
}

#[test]
fn list_reports_bad_pages() {
    let ctx = context();

    let reply = expect_reply(handle_message(&ctx, "!list zero"));
    assert_eq!(reply.content, "Usage: `!list [page]` (page starts at 1)");
    assert!(reply.keyboard.is_empty());

    let reply = expect_reply(handle_message(&ctx, "!list 6"));
    assert_eq!(reply.content, "Page 6 does not exist. Available pages: 1-5.");
}

#[test]
fn list_uses_configured_keyboard() {
    let ctx = Context::new(Settings {
        items_per_page: 1,
        max_buttons: 8,
        force_button_count: true,
        catalog_size: 10,
        ..Settings::default()
    });

    let reply = expect_reply(handle_message(&ctx, "!list 5"));
    assert_eq!(reply.content, "- Sample item #5");
    assert_eq!(
        reply.keyboard.texts(),
        vec!["« 1", "‹ 2", "‹ 3", "‹ 4", "· 5 ·", "6 ›", "7 ›", "10 »"]
    );
}

#[test]
fn usage_looks_up_commands() {
    let ctx = context();

    let reply = expect_reply(handle_message(&ctx, "!usage !list"));
    assert!(reply.content.starts_with("Usage: `!list [page]`"));

    let reply = expect_reply(handle_message(&ctx, "!usage nope"));
    assert_eq!(reply.content, "Unknown command: `nope`");
}

#[test]
fn plain_text_and_unknown_commands_are_ignored() {
    let ctx = context();
    assert_eq!(handle_message(&ctx, "hello").unwrap(), None);
    assert_eq!(handle_message(&ctx, "!dance").unwrap(), None);
}

#[test]
fn callback_navigates_to_the_new_page() {
    let ctx = context();
    let first = expect_reply(handle_message(&ctx, "!list"));
    let next = first.keyboard.callback_data()[3].to_owned();

    let reply = expect_reply(handle_callback(&ctx, &next));
    assert!(reply.content.starts_with("- Sample item #16"));
    assert_eq!(
        reply.keyboard.callback_data()[0],
        "command=list&oldPage=4&newPage=1"
    );
}

#[test]
fn callback_clamps_stale_pages() {
    let reply = expect_reply(handle_callback(
        &context(),
        "command=list&oldPage=3&newPage=99",
    ));
    assert!(reply.content.starts_with("- Sample item #21"));
}

#[test]
fn foreign_or_malformed_callbacks_are_ignored() {
    let ctx = context();
    assert_eq!(
        handle_callback(&ctx, "command=other&oldPage=1&newPage=2").unwrap(),
        None
    );
    assert_eq!(handle_callback(&ctx, "list;1;2").unwrap(), None);
}
