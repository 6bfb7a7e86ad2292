
use crate::documents::DocumentStore;
use crate::index::{SymbolIndex, SymbolIndexer};

pub(super) const MAIN: &str = "file:///main.inmu";
pub(super) const LIB: &str = "file:///lib.inmu";

/// Open `docs` and index each one
pub(super) fn fixture(docs: &[(&str, &str)]) -> (SymbolIndex, DocumentStore) {
    let indexer = SymbolIndexer::new();
    let mut index = SymbolIndex::new();
    let mut documents = DocumentStore::new();
    for (uri, text) in docs {
        documents.upsert(*uri, *text);
        indexer.reindex(&mut index, uri, text);
    }
    (index, documents)
}
