//! Mapping lists: the record model and the text parser.

mod parser;
mod record;

pub use parser::parse_mappings;
pub use record::{MappingRecord, MappingStatus};
