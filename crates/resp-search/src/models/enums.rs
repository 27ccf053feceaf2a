//! Enumeration types for node parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend source to search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Every source the backend knows about.
    #[default]
    All,
    /// ACM Digital Library.
    Acm,
    /// arXiv preprints.
    Arxiv,
    /// Google Scholar.
    GoogleScholar,
    /// Semantic Scholar.
    SemanticScholar,
}

impl Source {
    /// All sources, in the order the parameter form lists them.
    pub const ALL: [Self; 5] =
        [Self::All, Self::Acm, Self::Arxiv, Self::GoogleScholar, Self::SemanticScholar];

    /// Value sent to the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Acm => "acm",
            Self::Arxiv => "arxiv",
            Self::GoogleScholar => "google_scholar",
            Self::SemanticScholar => "semantic_scholar",
        }
    }

    /// Human-readable name for parameter forms.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Acm => "ACM",
            Self::Arxiv => "Arxiv",
            Self::GoogleScholar => "Google Scholar",
            Self::SemanticScholar => "Semantic Scholar",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a source string is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown source '{0}' (expected one of: all, acm, arxiv, google_scholar, semantic_scholar)"
)]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

impl clap::ValueEnum for Source {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()).help(self.display_name()))
    }
}
