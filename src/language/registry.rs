use indexmap::IndexMap;

use super::LanguageTag;

/// Built-in extension patterns, in priority order. First match wins.
pub const BUILTIN_PATTERNS: &[(&[&str], LanguageTag)] = &[
    (&["c", "cc", "cpp", "h"], LanguageTag::CFamily),
    (&["java"], LanguageTag::Java),
    (&["sh"], LanguageTag::Shell),
    (&["pl"], LanguageTag::Perl),
    (&["rb"], LanguageTag::Ruby),
    (&["py"], LanguageTag::Python),
    (&["xml"], LanguageTag::Xml),
    (&["txt", "md"], LanguageTag::Text),
];

/// Classify a file name with the built-in patterns only.
#[must_use]
pub fn classify(filename: &str) -> LanguageTag {
    BUILTIN_PATTERNS
        .iter()
        .find(|(extensions, _)| extensions.iter().any(|ext| has_extension(filename, ext)))
        .map_or(LanguageTag::Default, |&(_, tag)| tag)
}

/// `name` ends with `.ext` and has at least one character before the dot.
/// Case-sensitive.
fn has_extension(name: &str, ext: &str) -> bool {
    name.strip_suffix(ext)
        .and_then(|stem| stem.strip_suffix('.'))
        .is_some_and(|stem| !stem.is_empty())
}

/// Extension lookup with user-supplied mappings layered over the built-ins.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    custom: IndexMap<String, LanguageTag>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom mappings are consulted before the built-in patterns, in insertion order.
    #[must_use]
    pub fn with_custom_extensions(custom: &IndexMap<String, LanguageTag>) -> Self {
        let mut registry = Self::new();
        for (ext, &tag) in custom {
            registry.register(ext, tag);
        }
        registry
    }

    pub fn register(&mut self, ext: &str, tag: LanguageTag) {
        self.custom.insert(ext.to_string(), tag);
    }

    #[must_use]
    pub fn classify(&self, filename: &str) -> LanguageTag {
        self.custom
            .iter()
            .find(|(ext, _)| has_extension(filename, ext))
            .map_or_else(|| classify(filename), |(_, &tag)| tag)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
