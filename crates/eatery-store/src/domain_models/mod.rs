//! Domain models owned by the store layer

pub mod pagination;

pub use pagination::{dedupe_by_id, merge_page, PageCursor};
