//! Input line classification and argument extraction

pub mod classifier;
pub mod parser;

pub use classifier::{classify, CommandKind};
pub use parser::{extract_date_field, extract_description, parse_index};
