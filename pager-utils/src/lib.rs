/// Pagination math, page windows, button labels and callback tokens.
pub mod pagination;
