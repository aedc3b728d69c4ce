use std::fmt;

/// Named token recognised in URL templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Repository,
    File,
    Revision,
    ShortRevision,
    Scm,
    OldRevision,
}

const PLACEHOLDERS: phf::Map<&'static str, Placeholder> = phf::phf_map! {
    "[repository]" => Placeholder::Repository,
    "[file]" => Placeholder::File,
    "[revision]" => Placeholder::Revision,
    "[short_revision]" => Placeholder::ShortRevision,
    "[scm]" => Placeholder::Scm,
    "[old_revision]" => Placeholder::OldRevision,
};

/// Length in bytes of the longest token, `[short_revision]`
pub const MAX_TOKEN_LENGTH: usize = 16;

impl Placeholder {
    /// Look up a bracketed token such as `[file]`
    pub fn from_token(token: &str) -> Option<Self> {
        PLACEHOLDERS.get(token).copied()
    }

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Repository => "[repository]",
            Placeholder::File => "[file]",
            Placeholder::Revision => "[revision]",
            Placeholder::ShortRevision => "[short_revision]",
            Placeholder::Scm => "[scm]",
            Placeholder::OldRevision => "[old_revision]",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Placeholder; 6] = [
        Placeholder::Repository,
        Placeholder::File,
        Placeholder::Revision,
        Placeholder::ShortRevision,
        Placeholder::Scm,
        Placeholder::OldRevision,
    ];

    #[test]
    fn tokens_round_trip_through_lookup() {
        for placeholder in ALL {
            assert_eq!(Placeholder::from_token(placeholder.token()), Some(placeholder));
        }
    }

    #[test]
    fn longest_token_fits_the_scan_window() {
        let longest = ALL.iter().map(|p| p.token().len()).max();
        assert_eq!(longest, Some(MAX_TOKEN_LENGTH));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Placeholder::from_token("[commit]"), None);
        assert_eq!(Placeholder::from_token("file"), None);
        assert_eq!(Placeholder::from_token("[FILE]"), None);
    }
}
