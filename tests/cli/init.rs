use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, RU_TS, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.init_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .tsglotrc.json"));
    assert!(test.root().join(".tsglotrc.json").exists());

    let content = test.read_file(".tsglotrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");
    assert!(parsed.get("ignoreContexts").is_some());
    assert!(parsed.get("language").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tsglotrc.json", "{}")?;

    let (code, _, stderr) = run(test.init_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains(".tsglotrc.json already exists"));
    assert_eq!(test.read_file(".tsglotrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.init_command())?;
    test.write_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, stderr) = run(test.check_command())?;
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("unfinished"));

    Ok(())
}
