//! # ANSS
//! Code for locating catalog columns and formatting seismic events
//! into fixed-width ANSS-style report entries
mod columns;
mod entry;

pub use crate::columns::ColumnMap as ColumnMap;
pub use crate::entry::EntryError as EntryError;
pub use crate::entry::format_entry;
pub use crate::entry::{BANNER, RULE};
