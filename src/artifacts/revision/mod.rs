//! Revision interpretation per source-control dialect
//!
//! The search backend stores revisions from several version control systems
//! in the same column. The dialect is guessed from the shape of the string:
//!
//! - **CVS**: dotted numbers (`1.5`, `1.3.2.1`)
//! - **Subversion**: short repository-wide changeset numbers (`12345`)
//! - **Git**: 40-character content hashes
//!
//! - `scm_kind`: dialect classification
//! - `revision_info`: per-row derived values (short form, CVS predecessor)

pub mod revision_info;
pub mod scm_kind;

/// Length of a full Git commit hash in hexadecimal format
pub const GIT_HASH_LENGTH: usize = 40;

/// Number of hash characters shown for Git revisions
pub const SHORT_HASH_LENGTH: usize = 8;

/// Substituted for a CVS predecessor that cannot be computed
pub const MALFORMED_REVISION: &str = "invalid";
