use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn layout_rejects_offset_escaping_filesystem_root() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);

    let too_far = vec![".."; ctx.project_dir().components().count() + 2].join("/");
    ctx.cli()
        .args(["layout", "--offset", &too_far])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the filesystem root"));
}

#[test]
fn layout_rejects_absolute_offset() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);

    ctx.cli()
        .args(["layout", "--offset", "/tmp/build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("offset must be relative"));
}
