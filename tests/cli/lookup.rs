use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, RU_TS, run};

fn lookup(test: &CliTest, args: &[&str]) -> Result<(i32, String, String)> {
    let mut cmd = test.lookup_command();
    cmd.arg("translations/app_ru.ts").args(args);
    run(cmd)
}

#[test]
fn test_lookup_finished() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, stderr) = lookup(&test, &["MainWindow", "Open"])?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Открыть\n");
    assert!(stderr.is_empty());

    Ok(())
}

#[test]
fn test_lookup_numerus() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    for (n, expected) in [
        ("1", "1 файл\n"),
        ("3", "3 файла\n"),
        ("5", "5 файлов\n"),
        ("21", "21 файл\n"),
        ("0", "0 файлов\n"),
    ] {
        let (_, stdout, _) = lookup(&test, &["MainWindow", "%n file(s)", "-n", n])?;
        assert_eq!(stdout, expected, "n = {}", n);
    }

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, stderr) = lookup(&test, &["MainWindow", "Close"])?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Close\n");
    assert!(stderr.contains("translation is unfinished"));

    let (_, stdout, stderr) = lookup(&test, &["MainWindow", "Missing"])?;
    assert_eq!(stdout, "Missing\n");
    assert!(stderr.contains("no such message"));

    // Vanished entries are not looked up.
    let (_, stdout, stderr) = lookup(&test, &["MainWindow", "Old"])?;
    assert_eq!(stdout, "Old\n");
    assert!(stderr.contains("no such message"));

    Ok(())
}

#[test]
fn test_lookup_unknown_language() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, _, stderr) = lookup(&test, &["MainWindow", "Open", "--language", "xx"])?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Unknown language"));

    Ok(())
}

#[test]
fn test_lookup_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.args(["missing.ts", "MainWindow", "Open"]);
    let (code, _, stderr) = run(cmd)?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));

    Ok(())
}
