use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"));

    assert_eq!(code, 0);
    assert!(stdout.contains("created .langconfrc.json"));

    let content = std::fs::read_to_string(test.root().join(".langconfrc.json"))?;
    assert!(content.contains("enableInlineHints"));
    assert!(content.contains("enableHoverTooltips"));
    assert!(content.contains("displayLanguage"));

    Ok(())
}

#[test]
fn refuses_to_overwrite_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langconfrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"));

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}
