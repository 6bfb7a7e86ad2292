//! LSP module: Conversion to `lsp_types` shapes
//!
//! The engine speaks its own types; a host speaking the Language Server
//! Protocol converts results here before sending them.

mod convert;

pub use convert::{
    completion_item_to_lsp, diagnostic_to_lsp, formatting_options_from_lsp, from_lsp_position,
    hover_to_lsp, location_to_lsp, parse_uri, position_to_lsp, publish_diagnostics_params,
    range_to_lsp, symbol_to_lsp, text_edit_to_lsp, ConvertError,
};
