use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn read_record(test: &CliTest) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(".oasis/oasis_user.json")?)?)
}

#[test]
fn test_register_saves_record() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["register", "--name", "  Jinae  "])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Registered Jinae\n");

    let record = read_record(&test)?;
    assert_eq!(record["name"], "Jinae");
    assert_eq!(record["history"], serde_json::json!([]));
    assert!(record.get("credential").is_none_or(Value::is_null));

    Ok(())
}

#[test]
fn test_register_fails_when_record_cannot_be_saved() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file(".oasis", "not a directory")?;

    let output = test.run(&["register", "--name", "Jinae"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("could not be saved"));

    Ok(())
}

#[test]
fn test_register_requires_name() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["register", "--name", "   "])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please enter your name"));
    assert!(!test.root().join(".oasis/oasis_user.json").exists());

    Ok(())
}

#[test]
fn test_register_rejects_short_password() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["register", "--name", "Jinae", "--password", "abc"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Password must be at least 6 characters"));

    Ok(())
}

#[test]
fn test_check_in_with_password() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.run(&["register", "--name", "Jinae", "--password", "secret1"])?;

    let record = test.read_file(".oasis/oasis_user.json")?;
    assert!(!record.contains("secret1"), "password must not be stored");

    let wrong = test.run(&["check-in", "--password", "nope123"])?;
    assert_eq!(wrong.status.code(), Some(1));
    assert!(stderr(&wrong).contains("Incorrect password"));

    let right = test.run(&["check-in", "--password", "secret1"])?;
    assert!(right.status.success());
    assert_eq!(stdout(&right), "✓ Checked in as Jinae\n");

    Ok(())
}

#[test]
fn test_check_in_without_credential() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.run(&["register", "--name", "Jinae"])?;

    let output = test.run(&["check-in"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked in as Jinae\n");

    Ok(())
}

#[test]
fn test_check_in_without_record() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["check-in"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No patient record found"));

    Ok(())
}

#[test]
fn test_check_out_keeps_record() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.run(&["register", "--name", "Jinae"])?;

    let output = test.run(&["check-out"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Checked out\n");
    assert!(test.root().join(".oasis/oasis_user.json").exists());

    Ok(())
}

#[test]
fn test_reset_deletes_record_and_is_idempotent() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.run(&["register", "--name", "Jinae"])?;

    let output = test.run(&["reset"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Patient record deleted\n");
    assert!(!test.root().join(".oasis/oasis_user.json").exists());

    let again = test.run(&["reset"])?;
    assert!(again.status.success());
    assert_eq!(stdout(&again), "✓ No patient record to delete\n");

    Ok(())
}

#[test]
fn test_reset_keeps_language() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.run(&["lang", "ko"])?;
    test.run(&["register", "--name", "Jinae"])?;

    test.run(&["reset"])?;

    assert_eq!(test.read_file(".oasis/language")?.trim(), "ko");

    Ok(())
}

#[test]
fn test_corrupt_record_is_treated_as_missing() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file(".oasis/oasis_user.json", "{not json")?;

    let output = test.run(&["check-in"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No patient record found"));

    Ok(())
}

#[test]
fn test_data_dir_override() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test.run(&["register", "--name", "Jinae", "--data-dir", "state"])?;

    assert!(output.status.success());
    assert!(test.root().join("state/oasis_user.json").exists());

    Ok(())
}
