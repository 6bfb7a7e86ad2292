//! Index module: Cross-document symbol index
//!
//! The [`SymbolIndexer`] scans one document at a time and replaces that
//! document's contributions in the shared [`SymbolIndex`].

mod indexer;
mod store;
mod types;

pub use indexer::SymbolIndexer;
pub use store::SymbolIndex;
pub use types::{Occurrence, SymbolKind};
