use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, RU_TS, run};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, _) = run(test.stats_command())?;
    assert_eq!(code, 0);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("File"));
    assert!(lines[1].starts_with("./translations/app_ru.ts  ru_RU"));
    assert!(lines[1].ends_with("66.7%"));

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;
    test.write_file(
        "translations/app_de.ts",
        r#"<TS version="2.1" language="de"><context><name>A</name><message><source>Yes</source><translation>Ja</translation></message></context></TS>"#,
    )?;

    let mut cmd = test.stats_command();
    cmd.arg("--json");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["path"], "./translations/app_de.ts");
    assert_eq!(files[0]["completion"], 100.0);
    assert_eq!(files[1]["messages"], 4);
    assert_eq!(files[1]["obsolete"], 1);
    assert_eq!(files[1]["numerus"], 1);
    assert_eq!(value["total"]["messages"], 5);
    assert_eq!(value["total"]["finished"], 3);

    Ok(())
}

#[test]
fn test_stats_with_parse_error() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;
    test.write_file("translations/broken_de.ts", "<TS><context>")?;

    let (code, stdout, stderr) = run(test.stats_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("app_ru.ts"));
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}
