use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn layout_prints_root_and_subproject_paths() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app", "camera"]);

    let base = ctx.shared_build_dir();
    ctx.cli()
        .args(["layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Config: {}",
            ctx.project_dir().join("outdir.toml").display()
        )))
        .stdout(predicate::str::contains("Offset: ../../build"))
        .stdout(predicate::str::contains(format!("android -> {}", base.display())))
        .stdout(predicate::str::contains(format!("app -> {}", base.join("app").display())))
        .stdout(predicate::str::contains(format!(
            "camera -> {}",
            base.join("camera").display()
        )));
}

#[test]
fn layout_json_is_single_line_object() {
    let ctx = TestContext::new();
    ctx.write_config(
        "[project]\nname = \"android\"\nsubprojects = [\"camera\", \"app\"]\nevaluation_depends_on = [\"app\"]\n",
    );

    let output = ctx.cli().args(["layout", "--json"]).output().expect("run layout");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid json");
    let base = ctx.shared_build_dir();
    assert_eq!(value["base"], base.display().to_string());
    assert_eq!(value["root"]["name"], "android");
    assert_eq!(value["root"]["output_dir"], base.display().to_string());
    assert_eq!(value["subprojects"][0]["name"], "app");
    assert_eq!(value["subprojects"][1]["name"], "camera");
}

#[test]
fn layout_reports_overridden_offset() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);

    ctx.cli()
        .args(["layout", "--offset", "../out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Offset: ../out"))
        .stdout(predicate::str::contains(format!(
            "android -> {}",
            ctx.project_dir().join("out").display()
        )));
}

#[test]
fn layout_does_not_create_directories() {
    let ctx = TestContext::new();
    ctx.write_subprojects(&["app"]);

    ctx.cli().args(["layout"]).assert().success();
    ctx.assert_shared_build_not_exists();
}
