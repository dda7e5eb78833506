//! Page envelopes.

use serde::Serialize;

use crate::{Cursor, CursorError, PageLimit};

/// One page of items together with the token for the following page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Assemble a page from already-encoded parts.
    pub const fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Build a page from up to [`PageLimit::probe_size`] fetched rows.
    ///
    /// When more rows than `limit` were fetched the surplus is dropped and the
    /// key of the last kept row becomes the next cursor. Otherwise this is the
    /// final page and no cursor is issued.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError`] if the key of the last kept row cannot be
    /// encoded.
    pub fn from_probe<K, F>(mut rows: Vec<T>, limit: PageLimit, key_of: F) -> Result<Self, CursorError>
    where
        K: Serialize,
        F: Fn(&T) -> K,
    {
        if rows.len() <= limit.get() {
            return Ok(Self::new(rows, None));
        }

        rows.truncate(limit.get());
        let next_cursor = rows
            .last()
            .map(|last| Cursor::new(key_of(last)).encode())
            .transpose()?;
        Ok(Self::new(rows, next_cursor))
    }

    /// Items on this page, in the order they were fetched.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Token for the following page, if one exists.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Split the page into its items and next cursor.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.next_cursor)
    }

    /// Convert every item while keeping the cursor.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }
}
