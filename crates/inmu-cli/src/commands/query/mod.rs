//! Query module: Position queries over a source tree

mod run;

pub use run::{execute, run, to_position, QueryOutput};
