use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ Created .parlancerc.json");
    assert!(test.root().join(".parlancerc.json").exists());

    let content = test.read_file(".parlancerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["messagesRoot"], "./i18n");
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["formatters"], serde_json::json!([]));
    assert_eq!(parsed["ignores"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".parlancerc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert_snapshot!(output.stderr.trim_end(), @"Error: .parlancerc.json already exists");
    assert_eq!(test.read_file(".parlancerc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file("i18n/en.json", r#"{"a": "{0}"}"#)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );
    Ok(())
}
