use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

fn dictionaries() -> Result<CliTest> {
    let test = CliTest::with_file(
        "i18n/en.json",
        r#"{
  "apples": "{0} apple{{s}}",
  "greeting": "Hi {name|uppercase}, you have {count} {{count:message|messages}}",
  "price": "{0|currency}"
}"#,
    )?;
    test.write_file(
        "i18n/pl.json",
        r#"{"apples": "{0} {{one=jabłko|few=jabłka|many=jabłek|other=jabłka}}"}"#,
    )?;
    Ok(test)
}

#[test]
fn test_render_positional() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.render_command().args(["apples", "3"]))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"3 apples");
    Ok(())
}

#[test]
fn test_render_keyed() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.render_command().args([
        "greeting",
        "--arg",
        "name=ann",
        "--arg",
        "count=1",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"Hi ANN, you have 1 message");
    Ok(())
}

#[test]
fn test_render_locale_plural_rules() -> Result<()> {
    let test = dictionaries()?;

    let few = run(test.render_command().args(["apples", "2", "--locale", "pl"]))?;
    let many = run(test.render_command().args(["apples", "5", "--locale", "pl"]))?;

    assert_snapshot!(few.stdout.trim_end(), @"2 jabłka");
    assert_snapshot!(many.stdout.trim_end(), @"5 jabłek");
    Ok(())
}

#[test]
fn test_render_unregistered_formatter() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.render_command().args(["price", "10"]))?;

    assert_eq!(output.code, Some(2));
    assert_snapshot!(output.stderr.trim_end(), @"Error: Failed to render 'price': formatter 'currency' is not registered");

    test.write_file(".parlancerc.json", r#"{"formatters": ["currency"]}"#)?;
    let output = run(test.render_command().args(["price", "10"]))?;
    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"10");
    Ok(())
}

#[test]
fn test_render_rejects_mixed_inputs() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.render_command().args(["apples", "3", "--arg", "count=3"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("cannot be combined"));
    Ok(())
}
