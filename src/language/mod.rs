mod registry;
mod tag;

pub use registry::{BUILTIN_PATTERNS, LanguageRegistry, classify};
pub use tag::LanguageTag;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
