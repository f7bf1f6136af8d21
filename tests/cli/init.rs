use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(parsed["supportedLocales"], serde_json::json!(["en", "ko"]));
    assert!(
        parsed.get("dataDir").is_some(),
        "Config should have 'dataDir' field"
    );

    // 2-space indentation
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .oasisrc.json\n");
    assert!(test.root().join(".oasisrc.json").exists());

    let content = test.read_file(".oasisrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".oasisrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".oasisrc.json already exists"));
    assert_eq!(test.read_file(".oasisrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.run(&["init"])?;
    test.write_file("messages/en.json", r#"{"title": "Oasis"}"#)?;
    test.write_file("messages/ko.json", r#"{"title": "오아시스"}"#)?;

    let output = test.run(&["check"])?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert!(output.status.success());
    let help = stdout(&output);
    for command in ["init", "translate", "lang", "check", "record", "analytics", "serve"] {
        assert!(help.contains(command), "help should list {}", command);
    }

    Ok(())
}
