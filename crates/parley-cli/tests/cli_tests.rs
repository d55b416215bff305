//! End-to-end tests for the `parley` binary
//!
//! Every test points `--data-dir` at a fresh temp directory and clears the
//! system-message override so results do not depend on the caller's env.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn parley(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("parley").unwrap();
    cmd.env_remove("PARLEY_DEFAULT_SYSTEM_MESSAGE")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

fn run_json(cmd: &mut Command) -> Result<Value> {
    let output = cmd.arg("--format").arg("json").output()?;
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_models_lists_selectable_options() -> Result<()> {
    let dir = TempDir::new()?;
    parley(&dir)
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("openai:gpt-3.5-turbo-16k *"))
        .stdout(predicate::str::contains("pai-001-light-beta"))
        .stdout(predicate::str::contains("gpt-4-0314").not());
    Ok(())
}

#[test]
fn test_models_all_includes_snapshots() -> Result<()> {
    let dir = TempDir::new()?;
    parley(&dir)
        .args(["models", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openai:gpt-4-0314 (snapshot)"));
    Ok(())
}

#[test]
fn test_models_json() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(parley(&dir).arg("models"))?;

    let content = &json["content"];
    assert_eq!(content["default_model"], "openai:gpt-3.5-turbo-16k");

    let models = content["models"].as_array().expect("models array");
    assert_eq!(models.len(), 16);
    assert_eq!(models[0]["id"], "openai:gpt-3.5-turbo");
    assert_eq!(models[0]["provider"], "openai");
    assert_eq!(models[0]["max_tokens"], 4096);
    assert_eq!(models[0]["prompt"]["unit"], 1000);
    Ok(())
}

#[test]
fn test_cost_estimate() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(parley(&dir).args([
        "cost",
        "openai:gpt-4",
        "--prompt-tokens",
        "1000",
        "--completion-tokens",
        "1000",
    ]))?;

    let total = json["content"]["estimate"]["total"].as_f64().unwrap();
    assert!((total - 0.09).abs() < 1e-9, "unexpected total {}", total);
    Ok(())
}

#[test]
fn test_cost_unknown_model_fails() -> Result<()> {
    let dir = TempDir::new()?;
    parley(&dir)
        .args(["cost", "openai:gpt-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown model 'openai:gpt-99'"));
    Ok(())
}

#[test]
fn test_new_chat_with_builtin_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(parley(&dir).arg("new"))?;

    let chat = &json["content"];
    assert_eq!(chat["title"], "New Chat");
    assert_eq!(chat["title_set"], false);
    assert!(chat.get("folder").is_none());
    assert_eq!(chat["config"]["model"], "openai:gpt-3.5-turbo-16k");
    assert_eq!(chat["config"]["max_tokens"], 4000);

    let messages = chat["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "system");
    Ok(())
}

#[test]
fn test_new_chat_title_and_folder() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(parley(&dir).args(["new", "--title", "My Title", "--folder", "work"]))?;

    assert_eq!(json["content"]["title"], "My Title");
    assert_eq!(json["content"]["folder"], "work");
    Ok(())
}

#[test]
fn test_new_chat_empty_env_system_message() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(
        parley(&dir)
            .env("PARLEY_DEFAULT_SYSTEM_MESSAGE", "")
            .arg("new"),
    )?;

    assert_eq!(json["content"]["messages"].as_array().unwrap().len(), 0);
    Ok(())
}

#[test]
fn test_new_chat_uses_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[defaults]
system_message = "Be concise."

[defaults.chat_config]
model = "openai:gpt-4"
temperature = 0.5
"#,
    )?;

    let json = run_json(parley(&dir).arg("new"))?;
    let chat = &json["content"];
    assert_eq!(chat["messages"][0]["content"], "Be concise.");
    assert_eq!(chat["config"]["model"], "openai:gpt-4");
    assert_eq!(chat["config"]["temperature"], 0.5);
    assert_eq!(chat["config"]["top_p"], 1.0);
    Ok(())
}

#[test]
fn test_config_file_system_message_beats_env() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("config.toml"),
        "[defaults]\nsystem_message = \"From file\"\n",
    )?;

    let json = run_json(
        parley(&dir)
            .env("PARLEY_DEFAULT_SYSTEM_MESSAGE", "From env")
            .arg("new"),
    )?;

    let messages = json["content"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], "From file");
    Ok(())
}

#[test]
fn test_new_chat_env_system_message_without_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let json = run_json(
        parley(&dir)
            .env("PARLEY_DEFAULT_SYSTEM_MESSAGE", "From env")
            .arg("new"),
    )?;

    assert_eq!(json["content"]["messages"][0]["content"], "From env");
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("config.toml"),
        "[defaults.chat_config]\nmodel = \"openai:gpt-4\"\nmax_tokens = 9000\n",
    )?;

    parley(&dir)
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the 8192 token limit"));
    Ok(())
}

#[test]
fn test_config_init_then_show() -> Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("config.toml");

    parley(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using built-in defaults"))
        .stdout(predicate::str::contains("(not found)"));

    parley(&dir).args(["config", "init"]).assert().success();
    assert!(config_path.exists());

    let written = std::fs::read_to_string(&config_path)?;
    assert!(written.contains("[defaults.chat_config]"));
    assert!(written.contains("openai:gpt-3.5-turbo-16k"));

    let json = run_json(parley(&dir).args(["config", "show"]))?;
    assert_eq!(json["content"]["file_exists"], true);
    assert!(json.get("badge").is_none());

    parley(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    parley(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_languages() -> Result<()> {
    let dir = TempDir::new()?;
    let output = parley(&dir).arg("languages").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let languages: Vec<&str> = stdout.lines().collect();
    assert_eq!(languages.len(), 35);
    assert_eq!(languages.first(), Some(&"python"));
    assert_eq!(languages.last(), Some(&"yaml"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_catalog_commands_need_no_workspace() -> Result<()> {
    for args in [
        vec!["models"],
        vec!["cost", "openai:gpt-4"],
        vec!["languages"],
    ] {
        Command::cargo_bin("parley")?
            .env_remove("PARLEY_PATH")
            .env_remove("XDG_DATA_HOME")
            .env_remove("HOME")
            .args(&args)
            .assert()
            .success();
    }
    Ok(())
}
