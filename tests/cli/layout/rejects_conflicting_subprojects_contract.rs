use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn layout_rejects_duplicate_subprojects() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app", "app"]);

    ctx.cli()
        .args(["layout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Projects 'app' and 'app' both resolve to"));
}

#[test]
fn layout_rejects_subproject_with_separator() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["libs/app"]);

    ctx.cli()
        .args(["layout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name 'libs/app'"));
}
