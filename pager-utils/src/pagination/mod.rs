//! Stable facade for pagination helpers used by command handlers.
//!
//! A [`Paginator`] is not internally synchronized. Treat one instance as
//! owned by a single logical caller at a time; every mutation goes through
//! `&mut self`.

/// Default command name embedded in callback data.
pub const DEFAULT_COMMAND: &str = "pagination";
/// Default number of items rendered per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

mod components;
mod error;
mod labels;
mod page;
mod range;
pub mod token;
mod view;

pub use components::{Button, Keyboard};
pub use error::{PaginationError, Result};
pub use labels::{ButtonRole, Labels};
pub use page::{clamp_page, number_of_pages, offset, parse_one_based_page, slice};
pub use range::{DEFAULT_MAX_BUTTONS, MAX_BUTTONS, MIN_BUTTONS, PageWindow, validate_max_buttons};
pub use token::{
    CallbackData, DEFAULT_CALLBACK_FORMAT, decode_callback_data, encode_callback_data,
    parse_callback_data,
};
pub use view::{Pagination, Paginator, PaginatorBuilder};
