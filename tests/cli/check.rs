use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["check"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 2 locale files (3 keys) - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_reports_missing_translation() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        "{\n  \"title\": \"Oasis\",\n  \"subtitle\": \"Breathe\"\n}\n",
    )?;
    test.write_file("messages/ko.json", "{\n  \"title\": \"오아시스\"\n}\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"subtitle\"  missing-translation"), "{}", out);
    assert!(out.contains("en.json:3"), "{}", out);
    assert!(
        out.contains("missing in: ko (\"Breathe\" will be shown from en)"),
        "{}",
        out
    );
    assert!(out.contains("✘ 1 problems (1 error, 0 warnings)"), "{}", out);

    Ok(())
}

#[test]
fn test_check_orphan_keys_are_warnings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{\n  \"title\": \"Oasis\"\n}\n")?;
    test.write_file(
        "messages/ko.json",
        "{\n  \"title\": \"오아시스\",\n  \"extra\": \"추가\"\n}\n",
    )?;

    let output = test.run(&["check"])?;

    assert!(output.status.success(), "orphans alone should not fail");
    let out = stdout(&output);
    assert!(out.contains("warning: \"extra\"  orphan-translation"), "{}", out);
    assert!(out.contains("only in ko, not defined by en"), "{}", out);

    Ok(())
}

#[test]
fn test_check_reports_parse_errors() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"title": "Oasis"}"#)?;
    test.write_file("messages/ko.json", r#"{"title": "#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("parse-error"), "{}", out);
    assert!(out.contains("ko.json:1"), "{}", out);

    Ok(())
}

#[test]
fn test_check_with_default_locale_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"title": "Oasis"}"#)?;
    test.write_file(
        "messages/ko.json",
        r#"{"title": "오아시스", "subtitle": "숨쉬기"}"#,
    )?;

    let output = test.run(&["check", "--default-locale", "ko"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("error: \"subtitle\"  missing-translation"));

    Ok(())
}

#[test]
fn test_check_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("does not exist"));

    Ok(())
}

#[test]
fn test_check_reports_missing_default_locale_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/ko.json", r#"{"title": "오아시스"}"#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"en\"  missing-locale"), "{}", out);
    assert!(out.contains("en.json:1"), "{}", out);
    assert!(
        out.contains("default locale has no message file, lookups show the raw key"),
        "{}",
        out
    );

    Ok(())
}

#[test]
fn test_check_reports_supported_locale_without_file() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file(
        ".oasisrc.json",
        r#"{"defaultLocale": "en", "supportedLocales": ["en", "ko", "ja"]}"#,
    )?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"ja\"  missing-locale"), "{}", out);
    assert!(out.contains("ja.json:1"), "{}", out);
    assert!(
        out.contains("supported locale has no message file, every key falls back to en"),
        "{}",
        out
    );
    assert!(out.contains("✘ 1 problems (1 error, 0 warnings)"), "{}", out);

    Ok(())
}
