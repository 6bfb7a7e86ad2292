//! Query module: Read-only answers over the index and open documents
//!
//! Every query takes the current [`SymbolIndex`](crate::index::SymbolIndex)
//! and [`DocumentStore`](crate::documents::DocumentStore). A document that is
//! not open yields an empty or absent result.

mod completion;
mod hover;
mod navigation;
mod symbols;
mod types;

pub use completion::completion;
pub use hover::hover;
pub use navigation::{definition, references, word_at_position, WordAt};
pub use symbols::document_symbols;
pub use types::{CompletionItem, CompletionKind, Hover, Location, SymbolDescriptor};

#[cfg(test)]
mod tests;
