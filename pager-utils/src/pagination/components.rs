//! Keyboard button builders.

use tracing::trace;

use super::labels::{ButtonRole, Labels};
use super::range::PageWindow;

/// One navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Page the button navigates to.
    pub page: usize,
    pub role: ButtonRole,
    /// Rendered label.
    pub text: String,
    /// Opaque token identifying the navigation intent.
    pub callback_data: String,
}

/// Buttons of one keyboard, ascending by page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard(Vec<Button>);

impl Keyboard {
    pub fn buttons(&self) -> &[Button] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Button> {
        self.0.iter()
    }

    /// Rendered labels in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|button| button.text.as_str()).collect()
    }

    /// Callback data in display order.
    pub fn callback_data(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|button| button.callback_data.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Keyboard {
    type Item = &'a Button;
    type IntoIter = std::slice::Iter<'a, Button>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build the labelled buttons for `window`.
///
/// Pages whose role has no label are left out.
pub fn build_keyboard(
    window: &PageWindow,
    labels: &Labels,
    callback_data: impl Fn(usize) -> String,
) -> Keyboard {
    let buttons = window
        .pages()
        .into_iter()
        .filter_map(|page| {
            let role = ButtonRole::resolve(page, window.selected_page, window.number_of_pages);
            let Some(text) = labels.render(role, page) else {
                trace!(page, %role, "button suppressed by empty label");
                return None;
            };

            Some(Button {
                page,
                role,
                text,
                callback_data: callback_data(page),
            })
        })
        .collect();

    Keyboard(buttons)
}
