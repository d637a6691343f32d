use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Language family of a changed file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LanguageTag {
    #[serde(rename = "c/c++")]
    CFamily,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "sh")]
    Shell,
    #[serde(rename = "perl")]
    Perl,
    #[serde(rename = "ruby")]
    Ruby,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "txt")]
    Text,
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl LanguageTag {
    pub const ALL: [Self; 9] = [
        Self::CFamily,
        Self::Java,
        Self::Shell,
        Self::Perl,
        Self::Ruby,
        Self::Python,
        Self::Xml,
        Self::Text,
        Self::Default,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CFamily => "c/c++",
            Self::Java => "java",
            Self::Shell => "sh",
            Self::Perl => "perl",
            Self::Ruby => "ruby",
            Self::Python => "python",
            Self::Xml => "xml",
            Self::Text => "txt",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|tag| tag.name()).collect();
                format!("Unknown language '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
