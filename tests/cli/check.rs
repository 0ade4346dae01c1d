use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, RU_TS, run};

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>MainWindow</name>
    <message>
        <source>Open %1</source>
        <translation>%1 öffnen</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 translation file - no issues found"));

    Ok(())
}

#[test]
fn test_unfinished_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Close\"  unfinished"));
    assert!(stdout.contains("--> ./translations/app_ru.ts:10\n"));
    assert!(stdout.contains("= context: MainWindow"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));
    // Vanished messages are not checked.
    assert!(!stdout.contains("\"Old\""));

    Ok(())
}

#[test]
fn test_placeholder_and_numerus_errors() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_ru.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru">
<context>
    <name>ProgressBarWidget</name>
    <message>
        <source>Elements: %1/%2</source>
        <translation>Элементы: %1</translation>
    </message>
    <message numerus="yes">
        <source>%n tab(s)</source>
        <translation>
            <numerusform>%n вкладка</numerusform>
            <numerusform>%n вкладки</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Elements: %1/%2\"  placeholder"));
    assert!(stdout.contains("missing %2"));
    assert!(stdout.contains("error: \"%n tab(s)\"  numerus"));
    assert!(stdout.contains("expected 4 form(s) for ru"));
    assert!(stdout.contains("2 problems (2 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_select_rules() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let mut cmd = test.check_command();
    cmd.arg("placeholder").arg("numerus");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_duplicate_messages() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_fr.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Ouvrir</translation>
    </message>
    <message>
        <source>Open</source>
        <translation>Ouvre</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("duplicate"));
    assert!(stdout.contains("already defined at line 6"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;
    test.write_file(
        "translations/broken_de.ts",
        "<TS version=\"2.1\"><context><name>X</name>",
    )?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> ./translations/broken_de.ts"));

    Ok(())
}

#[test]
fn test_ignore_contexts_from_config() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;
    test.write_file(".tsglotrc.json", r#"{ "ignoreContexts": ["MainWindow"] }"#)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_translations_root_override() -> Result<()> {
    let test = CliTest::with_file("i18n/app_ru.ts", RU_TS)?;

    let (code, _, stderr) = run(test.check_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Translations directory not found"));

    let mut cmd = test.check_command();
    cmd.arg("--translations-root").arg("./i18n");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("unfinished"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;
    test.write_file(".tsglotrc.json", r#"{ "language": "xx" }"#)?;

    let (code, _, stderr) = run(test.check_command())?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    for command in ["check", "stats", "lookup", "clean", "init"] {
        assert!(stdout.contains(command));
    }

    Ok(())
}
