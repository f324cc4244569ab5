use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn hsite(xdg: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hsite"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd
}

#[test]
fn menu_prints_builtin_tree() {
    let tmp = tempdir().unwrap();
    let assert = hsite(tmp.path()).arg("menu").assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    insta::assert_snapshot!(out, @r"
    帮助中心  /docs
      用户手册  /docs/user_manual/user_register
        快速开始  /docs/user_manual/user_register
        基础功能  /docs/user_manual/jyqy
        高级功能  /docs/user_manual/yljg
    ");
}

#[test]
fn menu_json_uses_config_override() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        "version = 1\n[[menu]]\nlabel = \"Docs\"\npath = \"/docs\"\ndefault_expanded = true\n",
    )
    .unwrap();

    let assert = hsite(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "menu", "--json"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json[0]["label"], "Docs");
    assert_eq!(json[0]["default_expanded"], true);
    assert!(json[0].get("children").is_none());
}

#[test]
fn videos_quiet_lists_urls_under_base() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 1\n[site]\nbase_url = \"/help/\"\n").unwrap();

    hsite(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "videos", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/help/videos/intro.mp4\n"))
        .stdout(predicate::str::contains("/help/videos/permission.mp4"));
}

#[test]
fn videos_table_shows_totals() {
    let tmp = tempdir().unwrap();
    hsite(tmp.path())
        .arg("videos")
        .assert()
        .success()
        .stdout(predicate::str::contains("平台介绍"))
        .stdout(predicate::str::contains("Total: 6 videos in 3 categories"));
}
