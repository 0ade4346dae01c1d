use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, RU_TS, run};

#[test]
fn test_clean_dry_run_keeps_files() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let (code, stdout, _) = run(test.clean_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("./translations/app_ru.ts:23  MainWindow::\"Old\" (vanished)"));
    assert!(stdout.contains("Would remove 1 message in 1 file."));
    assert!(stdout.contains("--apply"));

    assert_eq!(test.read_file("translations/app_ru.ts")?, RU_TS);

    Ok(())
}

#[test]
fn test_clean_apply_rewrites_files() -> Result<()> {
    let test = CliTest::with_file("translations/app_ru.ts", RU_TS)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 message in 1 file."));

    let content = test.read_file("translations/app_ru.ts")?;
    assert!(!content.contains("Old"));
    assert!(!content.contains("vanished"));
    assert!(content.contains("<source>Open</source>"));
    assert!(content.contains("<translation type=\"unfinished\"></translation>"));
    assert!(content.contains("<numerusform>%n файлов</numerusform>"));

    // Nothing left to clean.
    let (code, stdout, _) = run(test.clean_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("No vanished or obsolete messages found"));

    // The rewritten file still checks the same way.
    let (_, stdout, _) = run(test.check_command())?;
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_clean_drops_empty_contexts() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>Legacy</name>
    <message>
        <source>Gone</source>
        <translation type="obsolete">Weg</translation>
    </message>
</context>
<context>
    <name>MainWindow</name>
    <message>
        <source>Open</source>
        <translation>Öffnen</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, _, _) = run(cmd)?;
    assert_eq!(code, 0);

    let content = test.read_file("translations/app_de.ts")?;
    assert!(!content.contains("Legacy"));
    assert!(content.contains("<name>MainWindow</name>"));

    Ok(())
}

#[test]
fn test_clean_apply_keeps_unknown_elements() -> Result<()> {
    let test = CliTest::with_file(
        "translations/app_ru.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ru">
<dependencies>
<dependency catalog="qtbase_ru"/>
</dependencies>
<context>
    <name>MainWindow</name>
    <message>
        <source>Old</source>
        <translation type="vanished">Старое</translation>
    </message>
    <message numerus="yes">
        <source>%n tab(s)</source>
        <translation>
            <numerusform variants="yes">
                <lengthvariant>%n открытая вкладка</lengthvariant>
                <lengthvariant>%n вкл.</lengthvariant>
            </numerusform>
            <numerusform>%n вкладки</numerusform>
            <numerusform>%n вкладок</numerusform>
        </translation>
        <extra-po-flags>c-format</extra-po-flags>
    </message>
    <message>
        <source>Open</source>
        <translation variants="yes">
            <lengthvariant>Открыть</lengthvariant>
        </translation>
        <userdata>42</userdata>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 message in 1 file."));

    let content = test.read_file("translations/app_ru.ts")?;
    assert!(!content.contains("Old"));
    assert!(content.contains("<dependency catalog=\"qtbase_ru\"/>"));
    assert!(content.contains("<extra-po-flags>c-format</extra-po-flags>"));
    assert!(content.contains("<userdata>42</userdata>"));
    assert!(content.contains("<lengthvariant>%n вкл.</lengthvariant>"));
    assert!(content.contains("<translation variants=\"yes\">"));
    assert!(content.contains("<lengthvariant>Открыть</lengthvariant>"));

    Ok(())
}
