use assert_cmd::Command;

pub fn run_commitsearch_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("commitsearch").expect("Failed to find commitsearch binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("COMMITSEARCH_QUERY");
    cmd.env_remove("COMMITSEARCH_TRACKER_URL");
    cmd.arg("--no-pager");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
