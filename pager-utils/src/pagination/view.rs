//! Paginator composing page math, page windows, labels and callback data.

use tracing::debug;

use super::components::{Keyboard, build_keyboard};
use super::error::{PaginationError, Result};
use super::labels::Labels;
use super::page::{number_of_pages, offset, slice};
use super::range::{DEFAULT_MAX_BUTTONS, PageWindow, validate_max_buttons};
use super::token::{DEFAULT_CALLBACK_FORMAT, encode_callback_data};
use super::{DEFAULT_COMMAND, DEFAULT_ITEMS_PER_PAGE};

/// Items of the selected page together with its navigation keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<'a, T> {
    pub items: &'a [T],
    pub keyboard: Keyboard,
}

/// Builder for [`Paginator`], starting from the library defaults.
#[derive(Debug, Clone)]
pub struct PaginatorBuilder {
    command: String,
    selected_page: usize,
    items_per_page: usize,
    max_buttons: usize,
    force_button_count: bool,
    callback_format: String,
    labels: Labels,
}

impl Default for PaginatorBuilder {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_owned(),
            selected_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            force_button_count: false,
            callback_format: DEFAULT_CALLBACK_FORMAT.to_owned(),
            labels: Labels::default(),
        }
    }
}

impl PaginatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn selected_page(mut self, selected_page: usize) -> Self {
        self.selected_page = selected_page;
        self
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn max_buttons(mut self, max_buttons: usize, force_button_count: bool) -> Self {
        self.max_buttons = max_buttons;
        self.force_button_count = force_button_count;
        self
    }

    pub fn callback_format(mut self, callback_format: impl Into<String>) -> Self {
        self.callback_format = callback_format.into();
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Validate the configuration against `items` and build the paginator.
    ///
    /// Checks run in order: items per page, items, selected page, max buttons.
    pub fn build<T>(self, items: &[T]) -> Result<Paginator<'_, T>> {
        let pages = number_of_pages(items.len(), self.items_per_page)?;
        if items.is_empty() {
            return Err(PaginationError::EmptyItems);
        }
        validate_selected_page(self.selected_page, pages)?;
        validate_max_buttons(self.max_buttons)?;

        Ok(Paginator {
            items,
            command: self.command,
            selected_page: self.selected_page,
            items_per_page: self.items_per_page,
            max_buttons: self.max_buttons,
            force_button_count: self.force_button_count,
            callback_format: self.callback_format,
            labels: self.labels,
        })
    }
}

/// Paginated view over a borrowed, non-empty item list.
///
/// Every setter re-validates the invariants it can affect and leaves the
/// paginator untouched on failure.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    command: String,
    selected_page: usize,
    items_per_page: usize,
    max_buttons: usize,
    force_button_count: bool,
    callback_format: String,
    labels: Labels,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator with default keyboard settings.
    pub fn new(
        items: &'a [T],
        command: impl Into<String>,
        selected_page: usize,
        items_per_page: usize,
    ) -> Result<Self> {
        PaginatorBuilder::new()
            .command(command)
            .selected_page(selected_page)
            .items_per_page(items_per_page)
            .build(items)
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Replace the item list, keeping the selected page if it still exists.
    pub fn set_items(&mut self, items: &'a [T]) -> Result<&mut Self> {
        if items.is_empty() {
            return Err(PaginationError::EmptyItems);
        }
        let pages = number_of_pages(items.len(), self.items_per_page)?;
        validate_selected_page(self.selected_page, pages)?;

        self.items = items;
        Ok(self)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) -> &mut Self {
        self.command = command.into();
        self
    }

    pub fn selected_page(&self) -> usize {
        self.selected_page
    }

    pub fn set_selected_page(&mut self, selected_page: usize) -> Result<&mut Self> {
        validate_selected_page(selected_page, self.number_of_pages())?;

        self.selected_page = selected_page;
        Ok(self)
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Change the page size; the selected page must exist under the new size.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<&mut Self> {
        let pages = number_of_pages(self.items.len(), items_per_page)?;
        validate_selected_page(self.selected_page, pages)?;

        self.items_per_page = items_per_page;
        Ok(self)
    }

    pub fn max_buttons(&self) -> usize {
        self.max_buttons
    }

    pub fn force_button_count(&self) -> bool {
        self.force_button_count
    }

    /// Set the keyboard width and whether it is always filled.
    pub fn set_max_buttons(
        &mut self,
        max_buttons: usize,
        force_button_count: bool,
    ) -> Result<&mut Self> {
        validate_max_buttons(max_buttons)?;

        self.max_buttons = max_buttons;
        self.force_button_count = force_button_count;
        Ok(self)
    }

    pub fn callback_format(&self) -> &str {
        &self.callback_format
    }

    pub fn set_callback_format(&mut self, callback_format: impl Into<String>) -> &mut Self {
        self.callback_format = callback_format.into();
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: Labels) -> &mut Self {
        self.labels = labels;
        self
    }

    pub fn number_of_pages(&self) -> usize {
        // items_per_page is validated on every assignment
        self.items.len().div_ceil(self.items_per_page)
    }

    /// Build the items and keyboard for a page.
    ///
    /// `Some(page)` selects that page first, with the same validation as
    /// [`set_selected_page`](Self::set_selected_page).
    pub fn paginate(&mut self, selected_page: Option<usize>) -> Result<Pagination<'a, T>> {
        if let Some(page) = selected_page {
            self.set_selected_page(page)?;
        }

        let window = PageWindow {
            selected_page: self.selected_page,
            number_of_pages: self.number_of_pages(),
            max_buttons: self.max_buttons,
            force_button_count: self.force_button_count,
        };
        let items = slice(
            self.items,
            offset(self.items_per_page, self.selected_page),
            self.items_per_page,
        );
        let keyboard = build_keyboard(&window, &self.labels, |page| {
            encode_callback_data(&self.callback_format, &self.command, self.selected_page, page)
        });

        debug!(
            command = %self.command,
            selected_page = window.selected_page,
            number_of_pages = window.number_of_pages,
            windowed = window.is_windowed(),
            buttons = keyboard.len(),
            "built pagination keyboard"
        );

        Ok(Pagination { items, keyboard })
    }
}

fn validate_selected_page(selected_page: usize, number_of_pages: usize) -> Result<()> {
    if (1..=number_of_pages).contains(&selected_page) {
        Ok(())
    } else {
        Err(PaginationError::InvalidSelectedPage {
            selected_page,
            number_of_pages,
        })
    }
}
