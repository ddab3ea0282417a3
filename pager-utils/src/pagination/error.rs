use thiserror::Error;

/// Caller-input validation failures raised by the paginator.
///
/// Every variant is reported at the offending constructor or setter call and
/// leaves the paginator unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Items list empty.")]
    EmptyItems,

    #[error("Invalid number of items per page, must be at least 1")]
    InvalidItemsPerPage,

    #[error("Invalid max buttons, must be between 5 and 8.")]
    InvalidMaxButtons { max_buttons: usize },

    #[error("Invalid selected page, must be between 1 and {number_of_pages}")]
    InvalidSelectedPage {
        selected_page: usize,
        number_of_pages: usize,
    },
}

pub type Result<T> = std::result::Result<T, PaginationError>;
