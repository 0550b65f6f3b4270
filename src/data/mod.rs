//! Dataset parsing and loading module
//!
//! This module turns raw dataset payloads into the typed tables that
//! chart configuration and rendering consume.
//!
//! ## Error Handling
//!
//! All operations return `DataResult<T>` which uses the `DataError`
//! type. Every failure is terminal for the current load attempt; the
//! caller decides whether to retry. Malformed numeric fields are never
//! an error, they degrade to text cells.

mod chart_engine;
mod csv_parser;
mod error;
mod loader;
mod table;

pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use loader::*;
pub use table::*;
