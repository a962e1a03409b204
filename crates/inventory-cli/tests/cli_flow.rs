use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_inventory"))
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("tempdir"),
        }
    }

    fn inventory_path(&self) -> PathBuf {
        self.dir.path().join("inventory.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.dir.path())
            .env("INVENTORY_CONFIG", self.config_path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env_remove("INVENTORY_PATH")
            .env_remove("INVENTORY_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run inventory")
    }

    fn read_inventory(&self) -> serde_json::Value {
        read_json(&self.inventory_path())
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("read inventory");
    serde_json::from_str(&contents).expect("parse inventory")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_add_remove_get_flow() {
    let ws = Workspace::new();

    let add = ws.run(&["add", "apple", "10"]);
    assert!(add.status.success(), "stderr: {}", stderr(&add));
    assert!(stdout(&add).contains("Added 10 of apple (now 10)"));
    assert!(stderr(&add).contains("Added 10 of apple"));

    assert!(ws.run(&["add", "banana", "5"]).status.success());
    let remove = ws.run(&["remove", "apple", "3"]);
    assert!(remove.status.success());
    assert!(stdout(&remove).contains("now 7"));

    let get = ws.run(&["get", "apple", "--json"]);
    assert!(get.status.success());
    let value: serde_json::Value = serde_json::from_slice(&get.stdout).expect("parse get json");
    assert_eq!(value["quantity"], 7);

    assert_eq!(
        ws.read_inventory(),
        serde_json::json!({ "apple": 7, "banana": 5 })
    );
}

#[test]
fn test_cli_file_is_two_space_indented() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "7"]).status.success());
    assert!(ws.run(&["add", "banana", "5"]).status.success());

    let raw = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");
    assert_eq!(raw, "{\n  \"apple\": 7,\n  \"banana\": 5\n}\n");
}

#[test]
fn test_cli_remove_unknown_item_exits_not_found() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "2"]).status.success());
    let before = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");

    let remove = ws.run(&["remove", "orange", "1"]);
    assert_eq!(remove.status.code(), Some(3));
    let err = stderr(&remove);
    assert!(err.contains("Item 'orange' not found in inventory"));
    assert!(err.contains("Hint:"));

    let after = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");
    assert_eq!(before, after);
}

#[test]
fn test_cli_remove_everything_deletes_key() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "2"]).status.success());

    let remove = ws.run(&["remove", "apple", "5"]);
    assert!(remove.status.success());
    assert!(stderr(&remove).contains("Removed all 'apple' from inventory"));
    assert_eq!(ws.read_inventory(), serde_json::json!({}));
}

#[test]
fn test_cli_negative_add_takes_stock() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "4"]).status.success());

    let add = ws.run(&["add", "apple", "-1"]);
    assert!(add.status.success(), "stderr: {}", stderr(&add));
    assert_eq!(ws.read_inventory(), serde_json::json!({ "apple": 3 }));
}

#[test]
fn test_cli_low_uses_threshold_and_config() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "3"]).status.success());
    assert!(ws.run(&["add", "banana", "10"]).status.success());

    let low = ws.run(&["low", "--json"]);
    assert!(low.status.success());
    let value: serde_json::Value = serde_json::from_slice(&low.stdout).expect("parse low json");
    assert_eq!(value["threshold"], 5);
    assert_eq!(value["items"], serde_json::json!(["apple"]));

    std::fs::write(ws.config_path(), "[report]\nlow_stock_threshold = 11\n")
        .expect("write config");
    let low = ws.run(&["low", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&low.stdout).expect("parse low json");
    assert_eq!(value["items"], serde_json::json!(["apple", "banana"]));

    let low = ws.run(&["low", "--json", "--threshold", "1"]);
    let value: serde_json::Value = serde_json::from_slice(&low.stdout).expect("parse low json");
    assert_eq!(value["items"], serde_json::json!([]));
}

#[test]
fn test_cli_config_inventory_path() {
    let ws = Workspace::new();
    let custom = ws.dir.path().join("stock.json");
    std::fs::write(
        ws.config_path(),
        format!("[inventory]\npath = \"{}\"\n", custom.display()),
    )
    .expect("write config");

    assert!(ws.run(&["add", "pear", "2"]).status.success());
    assert!(!ws.inventory_path().exists());
    assert_eq!(read_json(&custom), serde_json::json!({ "pear": 2 }));
}

#[test]
fn test_cli_file_flag_overrides_config() {
    let ws = Workspace::new();
    let flagged = ws.dir.path().join("flagged.json");

    let add = ws.run(&["add", "kiwi", "1", "--file", flagged.to_str().expect("utf8 path")]);
    assert!(add.status.success());
    assert_eq!(read_json(&flagged), serde_json::json!({ "kiwi": 1 }));
    assert!(!ws.inventory_path().exists());
}

#[test]
fn test_cli_report_missing_file_is_empty() {
    let ws = Workspace::new();

    let report = ws.run(&["report"]);
    assert!(report.status.success());
    assert!(stdout(&report).contains("INVENTORY REPORT"));
    assert!(stdout(&report).contains("No items in inventory"));
    assert!(stderr(&report).contains("not found. Starting with empty inventory."));
    assert!(!ws.inventory_path().exists());
}

#[test]
fn test_cli_no_subcommand_prints_report() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "7"]).status.success());

    let report = ws.run(&[]);
    assert!(report.status.success());
    assert!(stdout(&report).contains("apple                ->     7"));
}

#[test]
fn test_cli_malformed_file_is_not_overwritten() {
    let ws = Workspace::new();
    std::fs::write(ws.inventory_path(), "{ broken").expect("write inventory");

    let add = ws.run(&["add", "apple", "1"]);
    assert_eq!(add.status.code(), Some(4));
    assert!(stderr(&add).contains("Invalid JSON in"));

    let raw = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");
    assert_eq!(raw, "{ broken");
}

#[test]
fn test_cli_quiet_suppresses_info_logs() {
    let ws = Workspace::new();

    let add = ws.run(&["--quiet", "add", "apple", "1"]);
    assert!(add.status.success());
    assert!(stdout(&add).is_empty());
    assert!(!stderr(&add).contains("Added 1 of apple"));
}

#[test]
fn test_cli_json_log_format() {
    let ws = Workspace::new();

    let add = ws
        .command()
        .env("INVENTORY_LOG_FORMAT", "json")
        .args(["add", "apple", "1"])
        .output()
        .expect("run inventory");
    assert!(add.status.success());
    let first_line = stderr(&add)
        .lines()
        .next()
        .map(String::from)
        .expect("log line");
    let value: serde_json::Value = serde_json::from_str(&first_line).expect("json log line");
    assert_eq!(value["level"], "WARN");
}

#[test]
fn test_cli_demo_scenario() {
    let ws = Workspace::new();

    let demo = ws.run(&["demo"]);
    assert!(demo.status.success(), "stderr: {}", stderr(&demo));
    let out = stdout(&demo);
    assert!(out.contains("Apple stock: 7"));
    assert!(out.contains("Low items: []"));
    assert!(out.contains("apple                ->     7"));
    assert!(out.contains("banana               ->     5"));

    let err = stderr(&demo);
    assert!(err.contains("Invalid item type: integer. Expected string."));
    assert!(err.contains("Item 'orange' not found in inventory"));

    assert_eq!(
        ws.read_inventory(),
        serde_json::json!({ "apple": 7, "banana": 5 })
    );
}

#[test]
fn test_cli_completions() {
    let ws = Workspace::new();
    let completions = ws.run(&["completions", "bash"]);
    assert!(completions.status.success());
    assert!(stdout(&completions).contains("inventory"));
}

#[test]
fn test_cli_save_failure_is_reported() {
    let ws = Workspace::new();
    let target = ws.dir.path().join("missing").join("inventory.json");

    let add = ws.run(&["add", "apple", "1", "--file", target.to_str().expect("utf8 path")]);
    assert!(!add.status.success());
    let err = stderr(&add);
    assert!(err.contains("Error saving to"), "stderr: {}", err);
    assert!(err.contains("Could not save inventory to"));
    assert!(!target.exists());
    assert!(!ws.dir.path().join("missing").exists());
}

#[test]
fn test_cli_report_json_keeps_ledger_order() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "banana", "5"]).status.success());
    assert!(ws.run(&["add", "apple", "7"]).status.success());

    let report = ws.run(&["report", "--json"]);
    assert!(report.status.success(), "stderr: {}", stderr(&report));
    assert_eq!(
        stdout(&report),
        "{\n  \"banana\": 5,\n  \"apple\": 7\n}\n"
    );
}

#[test]
fn test_cli_add_overflow_keeps_file() {
    let ws = Workspace::new();
    assert!(ws.run(&["add", "apple", "10"]).status.success());
    let before = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");

    let add = ws.run(&["add", "apple", &i64::MAX.to_string()]);
    assert_eq!(add.status.code(), Some(4));
    let err = stderr(&add);
    assert!(err.contains("Quantity overflow adding"));
    assert!(err.contains("would overflow"));

    let after = std::fs::read_to_string(ws.inventory_path()).expect("read inventory");
    assert_eq!(before, after);
}
