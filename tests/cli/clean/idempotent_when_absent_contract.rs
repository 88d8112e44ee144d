use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn clean_succeeds_when_shared_build_is_absent() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);
    ctx.assert_shared_build_not_exists();

    ctx.cli()
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
}

#[test]
fn clean_twice_succeeds_both_times() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);
    ctx.seed_output("app/outputs/app.apk");

    ctx.cli().args(["clean"]).assert().success().stdout(predicate::str::contains("Removed"));
    ctx.cli()
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
    ctx.assert_shared_build_not_exists();
}
