//! Workspace module: Event handling and query entry points
//!
//! The [`Workspace`] owns the symbol index and the open-document snapshot.
//! Events take `&mut self` and run reindex-then-validate to completion;
//! queries take `&self`, so they never observe a half-rebuilt index.

mod events;
mod service;

pub use events::{ChangeKind, DiagnosticsReport, DocumentEvent};
pub use service::Workspace;
