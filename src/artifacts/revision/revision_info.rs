use crate::artifacts::core::text::truncate_chars;
use crate::artifacts::revision::scm_kind::ScmKind;
use crate::artifacts::revision::{MALFORMED_REVISION, SHORT_HASH_LENGTH};
use anyhow::Context;

/// Values derived from one row's revision
///
/// Each dialect carries only the fields that make sense for it; the CVS
/// predecessor exists for dotted revisions alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionInfo {
    Cvs { revision: String, previous: String },
    Subversion { revision: String },
    Git { hash: String },
}

impl RevisionInfo {
    pub fn interpret(revision: &str) -> Self {
        match ScmKind::classify(revision) {
            ScmKind::Cvs => {
                let previous = derive_previous(revision).unwrap_or_else(|err| {
                    tracing::warn!(revision, error = %err, "cannot compute previous CVS revision");
                    MALFORMED_REVISION.to_string()
                });
                RevisionInfo::Cvs {
                    revision: revision.to_string(),
                    previous,
                }
            }
            ScmKind::Subversion => RevisionInfo::Subversion {
                revision: revision.to_string(),
            },
            ScmKind::Git => RevisionInfo::Git {
                hash: revision.to_string(),
            },
        }
    }

    pub fn kind(&self) -> ScmKind {
        match self {
            RevisionInfo::Cvs { .. } => ScmKind::Cvs,
            RevisionInfo::Subversion { .. } => ScmKind::Subversion,
            RevisionInfo::Git { .. } => ScmKind::Git,
        }
    }

    pub fn revision(&self) -> &str {
        match self {
            RevisionInfo::Cvs { revision, .. } | RevisionInfo::Subversion { revision } => revision,
            RevisionInfo::Git { hash } => hash,
        }
    }

    pub fn short_revision(&self) -> &str {
        match self {
            RevisionInfo::Git { hash } => truncate_chars(hash, SHORT_HASH_LENGTH),
            RevisionInfo::Cvs { revision, .. } | RevisionInfo::Subversion { revision } => revision,
        }
    }

    pub fn previous_revision(&self) -> Option<&str> {
        match self {
            RevisionInfo::Cvs { previous, .. } => Some(previous.as_str()),
            RevisionInfo::Subversion { .. } | RevisionInfo::Git { .. } => None,
        }
    }
}

pub fn classify(revision: &str) -> ScmKind {
    ScmKind::classify(revision)
}

/// Display form of a revision: Git hashes are abbreviated, everything else is kept
pub fn derive_short(revision: &str, kind: ScmKind) -> String {
    match kind {
        ScmKind::Git => truncate_chars(revision, SHORT_HASH_LENGTH).to_string(),
        ScmKind::Cvs | ScmKind::Subversion => revision.to_string(),
    }
}

/// Predecessor of a CVS dotted revision
///
/// The first revision on a branch (`1.3.2.1`) follows the branch point, so
/// its predecessor is the revision the branch was cut from (`1.3`). Any other
/// revision is preceded by decrementing its last component (`1.5` -> `1.4`).
///
/// A non-numeric last component, or one that cannot be decremented, is
/// reported as an error.
pub fn derive_previous(revision: &str) -> anyhow::Result<String> {
    let components: Vec<&str> = revision.split('.').collect();
    let (last, prefix) = components
        .split_last()
        .with_context(|| format!("empty CVS revision: {revision}"))?;

    if *last == "1" && components.len() > 2 {
        return Ok(components[..components.len() - 2].join("."));
    }

    let number: u64 = last.parse().with_context(|| {
        format!("malformed CVS revision {revision}: '{last}' is not a revision number")
    })?;
    let previous = number.checked_sub(1).ok_or_else(|| {
        anyhow::anyhow!("malformed CVS revision {revision}: no revision precedes '{last}'")
    })?;

    let mut result = prefix.join(".");
    if !prefix.is_empty() {
        result.push('.');
    }
    result.push_str(&previous.to_string());

    Ok(result)
}
