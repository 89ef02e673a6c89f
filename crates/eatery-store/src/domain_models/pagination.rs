//! List pagination primitives
//!
//! Both catalog listings follow the same continuation scheme: the cursor
//! remembers which page was last requested, the first page replaces the
//! list, later pages append, and the merged list never holds two records
//! with the same identifier.

use eatery_client::{PageQuery, DEFAULT_PAGE_SIZE, FIRST_PAGE};
use std::collections::HashMap;

/// Continuation cursor for one paginated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Page number of the last request (1-based)
    pub page_no: u32,
    /// Page size of the last request
    pub page_size: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page_no: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageCursor {
    /// Cursor for the page a request asked for, defaults applied
    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            page_no: query.page_no(),
            page_size: query.page_size(),
        }
    }

    /// Whether the cursor points at the listing's first page
    pub fn is_first(&self) -> bool {
        self.page_no == FIRST_PAGE
    }
}

/// Merge one response page into the current list under the given cursor.
///
/// A first-page response replaces the list; any later page appends. The
/// result is de-duplicated by identifier, so a record resent by the server
/// (retry, overlapping pages) appears exactly once.
pub fn merge_page<T: Clone>(
    current: Vec<T>,
    page: &[T],
    cursor: PageCursor,
    id: impl Fn(&T) -> &str,
) -> Vec<T> {
    let combined = if cursor.is_first() {
        page.to_vec()
    } else {
        let mut list = current;
        list.extend_from_slice(page);
        list
    };
    dedupe_by_id(combined, id)
}

/// Collapse a sequence to one element per identifier.
///
/// The first occurrence keeps its position; a later occurrence with the same
/// identifier replaces that slot's content.
pub fn dedupe_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &str) -> Vec<T> {
    let mut slot_of: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let key = id(&item).to_string();
        match slot_of.get(&key).copied() {
            Some(slot) => out[slot] = item,
            None => {
                slot_of.insert(key, out.len());
                out.push(item);
            }
        }
    }
    out
}
