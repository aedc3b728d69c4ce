use crate::artifacts::revision::GIT_HASH_LENGTH;
use std::fmt;

/// Source-control dialect of a revision string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScmKind {
    Cvs,
    Subversion,
    Git,
}

impl ScmKind {
    /// Guess the dialect from the revision's shape
    ///
    /// The first matching rule wins: a period means a CVS dotted revision,
    /// anything shorter than a full hash is a Subversion changeset number and
    /// the rest are Git hashes.
    pub fn classify(revision: &str) -> Self {
        if revision.contains('.') {
            ScmKind::Cvs
        } else if revision.chars().count() < GIT_HASH_LENGTH {
            ScmKind::Subversion
        } else {
            ScmKind::Git
        }
    }

    /// Name substituted for the `[scm]` placeholder
    pub fn as_str(&self) -> &'static str {
        match self {
            ScmKind::Cvs => "cvs",
            ScmKind::Subversion => "subversion",
            ScmKind::Git => "git",
        }
    }
}

impl fmt::Display for ScmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
