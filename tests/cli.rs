use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn doodle_cmd() -> Command {
    Command::cargo_bin("swift-doodle").expect("binary exists")
}

#[test]
fn help_prints_about() {
    doodle_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hand-drawn sketching surface for Wayland compositors",
        ));
}

#[test]
fn no_flags_prints_usage() {
    doodle_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .success()
        .stdout(predicate::str::contains("swift-doodle --active"));
}

#[test]
fn active_mode_requires_wayland_env() {
    doodle_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("RUST_LOG", "error")
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn unknown_mode_is_rejected() {
    doodle_cmd()
        .args(["--active", "--mode", "hexagon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode 'hexagon'"));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();

    doodle_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("swift-doodle").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[canvas]"));
    assert!(contents.contains("initial_mode = \"freehand\""));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("swift-doodle");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[canvas]\nwidth = 640\n").unwrap();

    doodle_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let contents = std::fs::read_to_string(dir.join("config.toml")).unwrap();
    assert_eq!(contents, "[canvas]\nwidth = 640\n");
}
