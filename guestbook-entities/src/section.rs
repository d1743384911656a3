use std::fmt;

/// Name of the section that collects all comments which have been
/// posted without an explicit section.
pub const DEFAULT_SECTION_NAME: &str = "General_Submission";

/// The (case-sensitive) name of a section as requested by a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionName(String);

impl SectionName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_SECTION_NAME
    }
}

impl Default for SectionName {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_NAME)
    }
}

impl AsRef<str> for SectionName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies the partition a comment belongs to.
///
/// All comments of a partition are stored and queried together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey(String);

impl SectionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&SectionName> for SectionKey {
    fn from(from: &SectionName) -> Self {
        Self(from.0.clone())
    }
}

impl From<String> for SectionKey {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<SectionKey> for String {
    fn from(from: SectionKey) -> Self {
        from.0
    }
}

impl AsRef<str> for SectionKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Section:{}", self.0)
    }
}
