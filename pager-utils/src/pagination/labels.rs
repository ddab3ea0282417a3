//! Button roles and the label templates rendered for them.

use std::collections::BTreeMap;
use std::fmt;

/// Placeholder replaced by the page number in a label template.
const PAGE_PLACEHOLDER: &str = "%d";

/// Symbolic role a keyboard button plays relative to the selected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ButtonRole {
    Default,
    First,
    Previous,
    Current,
    Next,
    Last,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 6] = [
        ButtonRole::Default,
        ButtonRole::First,
        ButtonRole::Previous,
        ButtonRole::Current,
        ButtonRole::Next,
        ButtonRole::Last,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonRole::Default => "default",
            ButtonRole::First => "first",
            ButtonRole::Previous => "previous",
            ButtonRole::Current => "current",
            ButtonRole::Next => "next",
            ButtonRole::Last => "last",
        }
    }

    /// Decide the role of `page` in a keyboard for `selected_page`.
    ///
    /// Pages inside the three-page block at either end of the list render as
    /// plain numbers while the selection is inside that same block.
    pub fn resolve(page: usize, selected_page: usize, number_of_pages: usize) -> Self {
        let last_block_start = number_of_pages.saturating_sub(2);
        let in_first_block = selected_page <= 3 && page <= 3;
        let in_last_block = selected_page >= last_block_start && page >= last_block_start;

        if page == selected_page {
            ButtonRole::Current
        } else if in_first_block || in_last_block {
            ButtonRole::Default
        } else if page == 1 {
            ButtonRole::First
        } else if page == number_of_pages {
            ButtonRole::Last
        } else if page < selected_page {
            ButtonRole::Previous
        } else {
            ButtonRole::Next
        }
    }
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label templates keyed by button role.
///
/// A role with no template, or an empty one, gets no button at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    templates: BTreeMap<ButtonRole, String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self::empty()
            .with(ButtonRole::Default, "%d")
            .with(ButtonRole::First, "« %d")
            .with(ButtonRole::Previous, "‹ %d")
            .with(ButtonRole::Current, "· %d ·")
            .with(ButtonRole::Next, "%d ›")
            .with(ButtonRole::Last, "%d »")
    }
}

impl Labels {
    /// Labels with no templates; every button is suppressed until one is set.
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    pub fn with(mut self, role: ButtonRole, template: impl Into<String>) -> Self {
        self.templates.insert(role, template.into());
        self
    }

    pub fn without(mut self, role: ButtonRole) -> Self {
        self.templates.remove(&role);
        self
    }

    /// Template for `role`, or `None` when the role's buttons are suppressed.
    pub fn get(&self, role: ButtonRole) -> Option<&str> {
        self.templates
            .get(&role)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }

    /// Iterate over every configured template, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonRole, &str)> {
        self.templates
            .iter()
            .map(|(role, template)| (*role, template.as_str()))
    }

    /// Render the button text for `page`, or `None` when suppressed.
    pub fn render(&self, role: ButtonRole, page: usize) -> Option<String> {
        self.get(role)
            .map(|template| template.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_wins_over_blocks() {
        assert_eq!(ButtonRole::resolve(2, 2, 10), ButtonRole::Current);
        assert_eq!(ButtonRole::resolve(10, 10, 10), ButtonRole::Current);
    }

    #[test]
    fn edge_blocks_render_plain() {
        assert_eq!(ButtonRole::resolve(3, 1, 10), ButtonRole::Default);
        assert_eq!(ButtonRole::resolve(1, 3, 10), ButtonRole::Default);
        assert_eq!(ButtonRole::resolve(10, 9, 10), ButtonRole::Default);
        assert_eq!(ButtonRole::resolve(8, 10, 10), ButtonRole::Default);
    }

    #[test]
    fn interior_selection_gets_directional_roles() {
        assert_eq!(ButtonRole::resolve(1, 5, 10), ButtonRole::First);
        assert_eq!(ButtonRole::resolve(4, 5, 10), ButtonRole::Previous);
        assert_eq!(ButtonRole::resolve(6, 5, 10), ButtonRole::Next);
        assert_eq!(ButtonRole::resolve(10, 5, 10), ButtonRole::Last);
    }

    #[test]
    fn every_role_has_a_default_template() {
        let labels = Labels::default();
        for role in ButtonRole::ALL {
            assert!(labels.get(role).is_some(), "{role}");
        }
        assert_eq!(labels.iter().count(), ButtonRole::ALL.len());
    }

    #[test]
    fn default_labels_render_page_numbers() {
        let labels = Labels::default();
        assert_eq!(labels.render(ButtonRole::First, 1).as_deref(), Some("« 1"));
        assert_eq!(labels.render(ButtonRole::Current, 5).as_deref(), Some("· 5 ·"));
        assert_eq!(labels.render(ButtonRole::Last, 12).as_deref(), Some("12 »"));
    }

    #[test]
    fn blank_or_missing_templates_suppress_buttons() {
        let labels = Labels::default()
            .with(ButtonRole::First, "")
            .without(ButtonRole::Last);
        assert_eq!(labels.render(ButtonRole::First, 1), None);
        assert_eq!(labels.render(ButtonRole::Last, 10), None);
        assert_eq!(labels.iter().count(), 5);
    }

    #[test]
    fn template_without_placeholder_is_literal() {
        let labels = Labels::empty().with(ButtonRole::Last, "last");
        assert_eq!(labels.render(ButtonRole::Last, 10).as_deref(), Some("last"));
    }
}
