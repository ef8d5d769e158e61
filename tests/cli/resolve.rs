use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn resolves_reference_at_offset() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_100 = Hello\n")?;
    test.write_lang_file("home", "ar", "[general]\nLNG_100 = مرحبا\n")?;
    test.write_file("page.html", "{#LNG_100#}\n")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["resolve", "page.html", "--offset", "3"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("LNG_100"));
    assert!(stdout.contains("English: Hello"));
    assert!(stdout.contains("العربية: مرحبا"));
    assert!(stdout.contains("Module: home"));
    assert!(stdout.contains("Section: general"));

    Ok(())
}

#[test]
fn unresolved_reference_reports_not_found_and_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_1 = One\n")?;
    test.write_file("page.html", "{#LNG_999#}\n")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["resolve", "page.html", "--offset", "3"]));

    assert_eq!(code, 1);
    assert!(stdout.contains("LNG_999"));
    assert!(stdout.contains("Translation not found"));

    Ok(())
}

#[test]
fn position_without_reference_is_not_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_1 = One\n")?;
    test.write_file("page.html", "plain text {#LNG_1#}\n")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["resolve", "page.html", "--offset", "0"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("no localization reference at page.html:0"));

    Ok(())
}

#[test]
fn call_syntax_resolves_too() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_5 = OK\n")?;
    test.write_file("ctrl.php", "$this->cLang('LNG_5')\n")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["resolve", "ctrl.php", "--offset", "2"]));

    assert_eq!(code, 0);
    assert!(stdout.contains("LNG_5"));
    assert!(stdout.contains("English: OK"));

    Ok(())
}

#[test]
fn disabled_hover_tooltips_print_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langconfrc.json", r#"{"enableHoverTooltips": false}"#)?;
    test.write_lang_file("home", "en", "[general]\nLNG_1 = One\n")?;
    test.write_file("page.html", "{#LNG_1#}\n")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["resolve", "page.html", "--offset", "3"]));

    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    Ok(())
}

#[test]
fn offset_past_end_of_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_1 = One\n")?;
    test.write_file("page.html", "{#LNG_1#}\n")?;

    let (code, _, stderr) = run(test
        .command()
        .args(["resolve", "page.html", "--offset", "999"]));

    assert_eq!(code, 2);
    assert!(stderr.contains("past the end"));

    Ok(())
}

#[test]
fn missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test
        .command()
        .args(["resolve", "missing.html", "--offset", "0"]));

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read file"));

    Ok(())
}
