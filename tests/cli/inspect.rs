use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

fn dictionaries() -> Result<CliTest> {
    let test = CliTest::with_file(
        "i18n/en.json",
        r#"{
  "apples": "{count:number} apple{{s}}",
  "greeting": "Hi {name|uppercase}"
}"#,
    )?;
    test.write_file("i18n/de.json", r#"{"apples": "{count} {{Apfel|Äpfel}}"}"#)?;
    Ok(test)
}

#[test]
fn test_inspect_key() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.inspect_command().arg("apples"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "apples = \"{count:number} apple{{s}}\"\n  --> ./i18n/en.json:2\n  {count}  type: number, plural\n"
    );
    Ok(())
}

#[test]
fn test_inspect_all_keys() -> Result<()> {
    let test = dictionaries()?;

    let output = run(&mut test.inspect_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("apples = "));
    assert!(output.stdout.contains("greeting = \"Hi {name|uppercase}\""));
    assert!(output.stdout.contains("  {name}  formatters: uppercase\n"));
    Ok(())
}

#[test]
fn test_inspect_json() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.inspect_command().args(["apples", "--locale", "de", "--json"]))?;

    assert_eq!(output.code, Some(0));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["key"], "apples");
    assert_eq!(json["locale"], "de");
    assert_eq!(json["arguments"][0]["identity"], "count");
    assert_eq!(json["arguments"][0]["type"], Value::Null);
    assert_eq!(json["arguments"][0]["pluralized"], true);
    Ok(())
}

#[test]
fn test_inspect_unknown_key() -> Result<()> {
    let test = dictionaries()?;

    let output = run(test.inspect_command().arg("pears"))?;

    assert_eq!(output.code, Some(2));
    assert_snapshot!(output.stderr.trim_end(), @"Error: Key 'pears' not found in locale 'en'");
    Ok(())
}
