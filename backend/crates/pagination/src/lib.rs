//! Opaque cursor and pagination envelope primitives.
//!
//! Endpoints that page through ordered collections hand clients an opaque
//! `nextCursor` token. The token is the URL-safe base64 encoding of a JSON
//! key describing the last item served, so clients cannot depend on its
//! structure and servers remain free to change it.
//!
//! ```
//! use pagination::{Cursor, Page, PageLimit};
//!
//! let rows = vec![1_u32, 2, 3];
//! let page = Page::from_probe(rows, PageLimit::new(Some(2)), |row| *row)
//!     .expect("cursor encodes");
//! assert_eq!(page.items(), &[1, 2]);
//!
//! let token = page.next_cursor().expect("more rows remain");
//! let cursor: Cursor<u32> = Cursor::decode(token).expect("cursor decodes");
//! assert_eq!(*cursor.key(), 2);
//! ```

mod cursor;
mod limit;
mod page;

pub use cursor::{Cursor, CursorError};
pub use limit::PageLimit;
pub use page::Page;
