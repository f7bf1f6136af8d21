use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lang_defaults_to_default_locale() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "en\n");

    Ok(())
}

#[test]
fn test_lang_switch_is_persisted() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang", "ko"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Language set to ko\n");
    assert_eq!(test.read_file(".oasis/language")?.trim(), "ko");

    let output = test.run(&["lang"])?;
    assert_eq!(stdout(&output), "ko\n");

    Ok(())
}

#[test]
fn test_lang_same_language_is_noop() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang", "en"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "en\n");

    Ok(())
}

#[test]
fn test_lang_toggle_cycles() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang", "--toggle"])?;
    assert_eq!(stdout(&output), "✓ Language set to ko\n");

    let output = test.run(&["lang", "--toggle"])?;
    assert_eq!(stdout(&output), "✓ Language set to en\n");

    Ok(())
}

#[test]
fn test_lang_unsupported_is_rejected() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang", "fr"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported language \"fr\""));
    assert!(!test.root().join(".oasis/language").exists());

    Ok(())
}

#[test]
fn test_lang_unloadable_falls_back_to_default() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", r#"{"title": "Oasis"}"#)?;

    let output = test.run(&["lang", "ko"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "en\n");
    assert!(stderr(&output).contains("Could not load \"ko\" translations, using en"));

    Ok(())
}

#[test]
fn test_lang_ignores_unsupported_saved_language() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file(".oasis/language", "fr\n")?;

    let output = test.run(&["lang"])?;

    assert_eq!(stdout(&output), "en\n");

    Ok(())
}

#[test]
fn test_lang_toggle_conflicts_with_code() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["lang", "ko", "--toggle"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
