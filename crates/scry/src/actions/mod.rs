//! Endpoint functions, grouped by resource.
//!
//! Each group is a lightweight borrow of the client, obtained from the
//! matching [`ScryfallClient`](crate::ScryfallClient) accessor. Methods
//! build a URL and query, acquire the shared rate gate, and hand the
//! response to the interpreter; "get many" methods return a
//! [`ListIter`](crate::ListIter) over all pages.

mod bulk;
mod cards;
mod catalogs;
mod migrations;
mod rulings;
mod sets;
mod symbols;

pub use bulk::BulkDataActions;
pub use cards::{
    CardActions, CardIdentifier, CardName, CardRef, SearchOptions, SortDirection, SortOrder,
    UniqueMode,
};
pub use catalogs::{CatalogActions, CatalogKind};
pub use migrations::MigrationActions;
pub use rulings::RulingActions;
pub use sets::{SetActions, SetRef};
pub use symbols::SymbolActions;
