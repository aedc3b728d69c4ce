use crate::artifacts::links::CVS_ROOT_PREFIXES;
use crate::artifacts::links::placeholder::Placeholder;
use crate::artifacts::revision::revision_info::RevisionInfo;
use crate::artifacts::rows::row::Row;
use std::collections::HashMap;

/// Placeholder values available to a URL template
///
/// Values are stored raw; escaping happens when they are substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProperties {
    values: HashMap<Placeholder, String>,
}

impl LinkProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive all placeholder values for one row
    ///
    /// `[old_revision]` is only provided for CVS revisions.
    pub fn from_row(row: &Row) -> Self {
        let info = RevisionInfo::interpret(row.revision());

        let mut properties = LinkProperties::new();
        properties.insert(Placeholder::Repository, repository_display_name(row.repository()));
        properties.insert(Placeholder::File, row.file());
        properties.insert(Placeholder::Revision, info.revision());
        properties.insert(Placeholder::ShortRevision, info.short_revision());
        properties.insert(Placeholder::Scm, info.kind().as_str());
        if let Some(previous) = info.previous_revision() {
            properties.insert(Placeholder::OldRevision, previous);
        }

        properties
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

impl<V: Into<String>> FromIterator<(Placeholder, V)> for LinkProperties {
    fn from_iter<I: IntoIterator<Item = (Placeholder, V)>>(iter: I) -> Self {
        let mut properties = LinkProperties::new();
        for (placeholder, value) in iter {
            properties.insert(placeholder, value);
        }
        properties
    }
}

/// Repository name without the server-side CVS root
pub fn repository_display_name(repository: &str) -> &str {
    CVS_ROOT_PREFIXES
        .iter()
        .find_map(|prefix| repository.strip_prefix(prefix))
        .unwrap_or(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(repository: &str, file: &str, revision: &str) -> Row {
        Row::from_fields([repository, "2024-01-01", "alice", file, revision, "", "", "msg"])
    }

    #[test]
    fn cvs_rows_provide_old_revision() {
        let properties = LinkProperties::from_row(&row("/srv/cvs/repoA", "src/a.c", "1.5"));

        assert_eq!(properties.get(Placeholder::Repository), Some("repoA"));
        assert_eq!(properties.get(Placeholder::File), Some("src/a.c"));
        assert_eq!(properties.get(Placeholder::Revision), Some("1.5"));
        assert_eq!(properties.get(Placeholder::ShortRevision), Some("1.5"));
        assert_eq!(properties.get(Placeholder::Scm), Some("cvs"));
        assert_eq!(properties.get(Placeholder::OldRevision), Some("1.4"));
    }

    #[test]
    fn git_rows_abbreviate_and_omit_old_revision() {
        let hash = "0123456789abcdef0123456789abcdef01234567";
        let properties = LinkProperties::from_row(&row("repoG", "lib.rs", hash));

        assert_eq!(properties.get(Placeholder::Revision), Some(hash));
        assert_eq!(properties.get(Placeholder::ShortRevision), Some("01234567"));
        assert_eq!(properties.get(Placeholder::Scm), Some("git"));
        assert_eq!(properties.get(Placeholder::OldRevision), None);
    }

    #[test]
    fn subversion_rows_keep_revision() {
        let properties = LinkProperties::from_row(&row("repoS", "trunk/x.c", "4711"));

        assert_eq!(properties.get(Placeholder::ShortRevision), Some("4711"));
        assert_eq!(properties.get(Placeholder::Scm), Some("subversion"));
        assert_eq!(properties.get(Placeholder::OldRevision), None);
    }

    #[rstest]
    #[case("/srv/cvs/project", "project")]
    #[case("/var/lib/cvs/project", "project")]
    #[case("/home/cvs/project", "/home/cvs/project")]
    #[case("project", "project")]
    fn strips_cvs_roots(#[case] repository: &str, #[case] expected: &str) {
        assert_eq!(repository_display_name(repository), expected);
    }

    #[test]
    fn collects_from_pairs() {
        let properties: LinkProperties =
            [(Placeholder::File, "a.c"), (Placeholder::Revision, "1.2")].into_iter().collect();

        assert_eq!(properties.get(Placeholder::File), Some("a.c"));
        assert_eq!(properties.get(Placeholder::Scm), None);
    }
}
