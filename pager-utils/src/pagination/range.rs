//! Page-window shaping: which page numbers get a button.

use std::ops::Range;

use super::error::{PaginationError, Result};

/// Smallest supported keyboard width.
pub const MIN_BUTTONS: usize = 5;
/// Largest supported keyboard width.
pub const MAX_BUTTONS: usize = 8;
/// Keyboard width used when none is configured.
pub const DEFAULT_MAX_BUTTONS: usize = MIN_BUTTONS;

/// Reject keyboard widths outside `MIN_BUTTONS..=MAX_BUTTONS`.
pub fn validate_max_buttons(max_buttons: usize) -> Result<()> {
    if (MIN_BUTTONS..=MAX_BUTTONS).contains(&max_buttons) {
        Ok(())
    } else {
        Err(PaginationError::InvalidMaxButtons { max_buttons })
    }
}

/// Inputs of the page-window computation for one keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub selected_page: usize,
    pub number_of_pages: usize,
    pub max_buttons: usize,
    pub force_button_count: bool,
}

impl PageWindow {
    /// Whether the list has more pages than buttons and must be windowed.
    pub fn is_windowed(&self) -> bool {
        self.number_of_pages > self.max_buttons
    }

    /// Half-open range of middle pages shown between page 1 and the last page.
    ///
    /// Only meaningful when [`is_windowed`](Self::is_windowed) holds. The
    /// result always satisfies `2 <= start <= end <= number_of_pages`.
    pub fn middle_range(&self) -> Range<usize> {
        let Self {
            selected_page: selected,
            number_of_pages: pages,
            max_buttons,
            force_button_count,
        } = *self;
        let middle = max_buttons.saturating_sub(2);

        let (from, to) = if selected == 1 {
            (2, max_buttons)
        } else if selected == pages {
            (pages.saturating_sub(middle), pages)
        } else if selected < 3 {
            (selected, selected + middle)
        } else if pages.saturating_sub(selected) < 3 {
            (pages.saturating_sub(middle), pages)
        } else if force_button_count {
            // Page 3 is the pivot between the start-anchored and centered window.
            let pivot = usize::from(selected == 3 && max_buttons > MIN_BUTTONS);
            (
                selected.saturating_sub(middle / 2),
                selected + middle.div_ceil(2) + pivot,
            )
        } else {
            let tail = if selected == 3 {
                middle.saturating_sub(1)
            } else {
                2
            };
            (selected - 1, selected + tail)
        };

        let from = from.max(2);
        // The pivot slot alone cannot fill the width when the window clamps at page 2.
        let to = if force_button_count && selected == 3 {
            to.max(from + middle)
        } else {
            to
        };
        let to = to.min(pages);

        from.min(to)..to
    }

    /// Every page number that gets a button, ascending.
    pub fn pages(&self) -> Vec<usize> {
        if !self.is_windowed() {
            return (1..=self.number_of_pages).collect();
        }

        let middle = self.middle_range();
        let mut pages = Vec::with_capacity(middle.len() + 2);
        pages.push(1);
        pages.extend(middle);
        pages.push(self.number_of_pages);
        pages
    }
}
