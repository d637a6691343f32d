mod comment;
mod lines;

pub use comment::{CommentDetector, CommentRule};
pub use lines::{LineCounter, LineCounts};
