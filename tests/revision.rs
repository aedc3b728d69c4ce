use common::command::{run_commitsearch_command, stdout_of};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

mod common;

#[rstest]
#[case("1.5", "cvs", "1.5", json!("1.4"))]
#[case("1.3.2.1", "cvs", "1.3.2.1", json!("1.3"))]
#[case("1.2.4.3", "cvs", "1.2.4.3", json!("1.2.4.2"))]
#[case("4711", "subversion", "4711", Value::Null)]
#[case(
    "9fceb02d0ae598e95dc970b74767f19372d61af8",
    "git",
    "9fceb02d",
    Value::Null
)]
fn interpret_revision(
    #[case] revision: &str,
    #[case] scm: &str,
    #[case] short_revision: &str,
    #[case] old_revision: Value,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = stdout_of(&mut run_commitsearch_command(&[
        "revision", revision, "--format", "json",
    ]));
    let info: Value = serde_json::from_str(&output)?;

    assert_eq!(info["scm"], scm);
    assert_eq!(info["revision"], revision);
    assert_eq!(info["short_revision"], short_revision);
    assert_eq!(info["old_revision"], old_revision);

    Ok(())
}

#[test]
fn render_link_template_for_revision() {
    run_commitsearch_command(&[
        "revision",
        "1.7",
        "--repository",
        "/var/lib/cvs/tools",
        "--file",
        "make <all>.sh",
        "--template",
        "https://cvs.example/[repository]/[file]?r1=[old_revision]&r2=[revision]&[unknown]",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("scm:      cvs"))
    .stdout(predicate::str::contains("previous: 1.6"))
    .stdout(predicate::str::contains(
        "link:     https://cvs.example/tools/make &lt;all&gt;.sh?r1=1.6&r2=1.7&[unknown]",
    ));
}

#[test]
fn report_malformed_cvs_revision_as_invalid_predecessor() {
    run_commitsearch_command(&["revision", "1.0", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"old_revision\":\"invalid\""));
}
