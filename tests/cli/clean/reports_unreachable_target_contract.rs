use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn clean_fails_when_build_directory_cannot_be_inspected() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);
    let marker = ctx.repo_dir().join("marker");
    fs::write(&marker, "not a directory").expect("write marker file");

    ctx.cli()
        .args(["clean", "--offset", "../../marker/build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to delete"))
        .stdout(predicate::str::contains("Nothing to clean").not());

    assert_eq!(fs::read_to_string(&marker).expect("marker survives"), "not a directory");
}
