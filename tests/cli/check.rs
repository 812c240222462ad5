use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

#[test]
fn test_clean_dictionaries() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"apples": "{0} apple{{s}}"}"#)?;
    test.write_file("i18n/de.json", r#"{"apples": "{0} {{Apfel|Äpfel}}"}"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ Checked 2 templates in 2 locale files - no issues found");
    Ok(())
}

#[test]
fn test_skipped_index_is_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/en.json",
        r#"{
  "pair": "{0} and {2}"
}"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        r#"warning: "translation 'pair' => argument {1} expected, but {2} found"  skipped-index
  --> ./i18n/en.json:2:1
  = note: in en ("{0} and {2}")

warning: "translation 'pair' => make sure to not skip an index"  skipped-index
  --> ./i18n/en.json:2:1
  = note: in en ("{0} and {2}")

✘ 2 problems (0 errors, 2 warnings)
"#
    );
    Ok(())
}

#[test]
fn test_argument_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file(
        "i18n/en.json",
        r#"{
  "greeting": "Hi {name}"
}"#,
    )?;
    test.write_file(
        "i18n/de.json",
        r#"{
  "greeting": "Hallo {nme}"
}"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "error: \"translation 'greeting' => argument {nme} is not declared in 'en'\"  argument-mismatch"
    ));
    assert!(output.stdout.contains("--> ./i18n/de.json:2:1"));
    assert!(output.stdout.contains("= note: in de (\"Hallo {nme}\"), expected: {name}"));
    assert!(output.stdout.ends_with("✘ 1 problem (1 error, 0 warnings)\n"));
    Ok(())
}

#[test]
fn test_unknown_formatter_needs_declared_formatters() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"price": "{0|money}"}"#)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(0));

    test.write_file(".parlancerc.json", r#"{"formatters": ["currency"]}"#)?;
    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("formatter 'money' is not registered"));
    assert!(output.stdout.contains("= hint: add it to 'formatters' in .parlancerc.json"));
    Ok(())
}

#[test]
fn test_selected_rules() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"mixed": "{a} {0}", "gap": "{0} {2}"}"#)?;

    let output = run(test.check_command().arg("mixed-args"))?;

    assert!(output.stdout.contains("mixed-args"));
    assert!(!output.stdout.contains("skipped-index"));
    Ok(())
}

#[test]
fn test_namespaced_dictionaries() -> Result<()> {
    let test = CliTest::with_file("i18n/en/auth.json", r#"{"login": "Hi {name}"}"#)?;
    test.write_file("i18n/de/auth.json", r#"{"login": "Hallo {user}"}"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("translation 'auth.login' => argument {user}"));
    assert!(output.stdout.contains("--> ./i18n/de/auth.json:1:1"));
    Ok(())
}

#[test]
fn test_invalid_json_is_reported() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"a": "A"}"#)?;
    test.write_file("i18n/fr.json", "{ not json")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("--> ./i18n/fr.json\n"));
    assert_snapshot!(output.stderr.trim_end(), @"warning: 1 file(s) could not be parsed (use -v for details)");
    Ok(())
}

#[test]
fn test_verbose_notes_go_to_stderr() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"a": "A"}"#)?;

    let output = run(test.check_command().arg("-v"))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stderr.trim_end(), @"Note: No .parlancerc.json found, using default configuration");
    Ok(())
}

#[test]
fn test_missing_messages_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: "));
    Ok(())
}

#[test]
fn test_missing_primary_locale() -> Result<()> {
    let test = CliTest::with_file("i18n/de.json", r#"{"a": "A"}"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert_snapshot!(output.stderr.trim_end(), @"Error: Primary locale 'en' dictionary not found in './i18n'");

    let output = run(test.check_command().args(["--primary-locale", "de"]))?;
    assert_eq!(output.code, Some(0));
    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"legacy": {"gap": "{0} {2}"}}"#)?;
    test.write_file(".parlancerc.json", r#"{"ignores": ["legacy.*"]}"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"✓ Checked 0 templates in 1 locale file - no issues found");
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "inspect", "render", "init"] {
        assert!(output.stdout.contains(command));
    }
    Ok(())
}
