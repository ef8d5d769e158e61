use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn lists_keys_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_2 = Two\nLNG_1 = One\n")?;
    test.write_lang_file("admin", "en", "[labels]\nLKP_3 = Third\n")?;

    let (code, stdout, _) = run(test.command().arg("keys"));

    assert_eq!(code, 0);
    assert_eq!(stdout, "LKP_3\nLNG_1\nLNG_2\n");

    Ok(())
}

#[test]
fn count_prints_number_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_lang_file("home", "en", "[general]\nLNG_1 = One\nLNG_2 = Two\n")?;
    // The same key in the other locale must not double-count.
    test.write_lang_file("home", "ar", "[general]\nLNG_1 = واحد\n")?;

    let (code, stdout, _) = run(test.command().args(["keys", "--count"]));

    assert_eq!(code, 0);
    assert_eq!(stdout, "2\n");

    Ok(())
}

#[test]
fn empty_index_lists_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, stderr) = run(test.command().arg("keys"));

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("no translations found"));

    Ok(())
}
