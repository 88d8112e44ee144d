use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn clean_removes_root_and_subproject_outputs() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app", "camera"]);
    ctx.seed_output("app/outputs/app.apk");
    ctx.seed_output("camera/intermediates/classes.jar");
    ctx.seed_output("reports/problems.html");

    let sibling = ctx.repo_dir().join("README.md");
    fs::write(&sibling, "keep me").expect("write sibling");

    ctx.cli()
        .args(["clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"))
        .stdout(predicate::str::contains("build"));

    ctx.assert_shared_build_not_exists();
    assert!(sibling.exists(), "files outside the shared build directory must survive");
    assert!(ctx.project_dir().join("outdir.toml").exists(), "config must survive");
}

#[test]
fn clean_honors_offset_override() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);
    ctx.seed_output("app/outputs/app.apk");

    let custom = ctx.project_dir().join("out").join("app").join("classes.dex");
    fs::create_dir_all(custom.parent().unwrap()).expect("create custom output");
    fs::write(&custom, "dex").expect("write custom output");

    ctx.cli().args(["clean", "--offset", "../out"]).assert().success();

    assert!(!ctx.project_dir().join("out").exists(), "overridden base should be removed");
    ctx.assert_shared_build_exists();
}
