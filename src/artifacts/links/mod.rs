//! Hyperlinks to external file browsers, diff viewers and issue trackers
//!
//! - `placeholder`: the fixed vocabulary of `[name]` tokens in URL templates
//! - `properties`: placeholder values derived from one result row
//! - `template`: single-pass placeholder substitution
//! - `formatter`: per-column cell rendering with plain-text fallbacks

pub mod formatter;
pub mod placeholder;
pub mod properties;
pub mod template;

/// Repository roots that are hidden from the `[repository]` placeholder
pub const CVS_ROOT_PREFIXES: [&str; 2] = ["/srv/cvs/", "/var/lib/cvs/"];

/// Issue references (`#123`) in commit descriptions
pub const ISSUE_REFERENCE_REGEX: &str = r"#([0-9]+)";

/// Token in tracker URL templates replaced by the issue number
pub const ISSUE_NUMBER_TOKEN: &str = "$1";
