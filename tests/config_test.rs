//! Configuration files feeding a shell

use shellkit::config::{self, ShellConfig};
use shellkit::{ScriptedPrompter, Shell};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = config::load_from_file(&dir.path().join("shellkit.json")).unwrap();
    assert_eq!(config.prompt, ShellConfig::default().prompt);
}

#[tokio::test]
async fn test_prompt_and_margin_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shell.toml");
    fs::write(&path, "prompt = \"orc>\"\nhelp_margin = 3\n").unwrap();

    let config = config::load_from_file(&path).unwrap();
    let mut shell = Shell::new(config);
    let mut prompter = ScriptedPrompter::lines(["help"]);
    shell.run(&mut prompter).await.unwrap();

    assert_eq!(prompter.prompts[0], "orc>");
    assert!(prompter.printed(" scope [name] change the active scope"));
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shell.yaml");
    fs::write(&path, "prompt: [unclosed").unwrap();

    let err = config::load_from_file(&path).unwrap_err();
    assert_eq!(err.error_code(), "SHELL_CONFIG");
    assert_eq!(err.exit_code(), 1);
}
