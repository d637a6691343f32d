mod parser;
mod types;

pub use parser::{DiffParser, parse};
pub use types::{DiffLine, FileDiff};
