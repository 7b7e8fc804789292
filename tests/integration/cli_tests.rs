/*!
 * Tests for the srtscribe command line
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

fn run_cli(args: &[&str], cwd: &Path) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_srtscribe"))
        .args(args)
        .current_dir(cwd)
        .output()?)
}

/// Test a successful conversion exits 0 and reports counts on stdout
#[test]
fn test_cli_withValidFolder_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("subs");
    fs::create_dir(&input)?;
    common::create_test_subtitle(&input, "a.srt")?;

    let output = run_cli(&["subs", "out.txt"], temp_dir.path())?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Found 1 SRT file(s):"));
    assert!(stdout.contains("  - a.srt"));
    assert!(stdout.contains("Extracted 2 text segments"));
    assert!(stdout.contains("Total lines written: 3"));
    assert!(stdout.contains("Conversion completed successfully!"));
    assert!(temp_dir.path().join("out.txt").exists());
    Ok(())
}

/// Test the --no-headers flag
#[test]
fn test_cli_withNoHeaders_shouldOmitHeaderLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("subs");
    fs::create_dir(&input)?;
    common::create_test_subtitle(&input, "a.srt")?;

    let output = run_cli(&["--no-headers", "subs", "out.txt"], temp_dir.path())?;

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("out.txt"))?,
        "Hello world\nSecond line\n"
    );
    Ok(())
}

/// Test an empty folder exits 1 without writing output
#[test]
fn test_cli_withEmptyFolder_shouldExitWithOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    fs::create_dir(temp_dir.path().join("subs"))?;

    let output = run_cli(&["subs", "out.txt"], temp_dir.path())?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("No SRT files found"));
    assert!(stdout.contains("Conversion failed."));
    assert!(!temp_dir.path().join("out.txt").exists());
    Ok(())
}

/// Test a missing folder exits 1
#[test]
fn test_cli_withMissingFolder_shouldExitWithOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(&["absent", "out.txt"], temp_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("does not exist"));
    Ok(())
}

/// Test a config file in the working directory is honored
#[test]
fn test_cli_withConfigFile_shouldApplySettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("subs");
    fs::create_dir(&input)?;
    common::create_test_file(&input, "a.sub", &common::build_srt(&["from config"]))?;
    common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "subtitle_extension": "sub", "include_headers": false }"#,
    )?;

    let output = run_cli(&["subs", "out.txt"], temp_dir.path())?;

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(temp_dir.path().join("out.txt"))?, "from config\n");
    Ok(())
}

/// Test completions are generated without positionals
#[test]
fn test_cli_withGenerateCompletions_shouldPrintScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(&["--generate-completions", "bash"], temp_dir.path())?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("srtscribe"));
    Ok(())
}

/// Test an input folder named like a command word is still an input folder
#[test]
fn test_cli_withFolderNamedCompletions_shouldConvertIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("completions");
    fs::create_dir(&input)?;
    common::create_test_subtitle(&input, "a.srt")?;

    let output = run_cli(&["completions", "out.txt"], temp_dir.path())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("out.txt"))?,
        "=== a.srt ===\nHello world\nSecond line\n\n"
    );
    Ok(())
}

/// Test a missing output argument is a failure with exit status 1
#[test]
fn test_cli_withMissingOutputArgument_shouldExitWithOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    fs::create_dir(temp_dir.path().join("subs"))?;

    let output = run_cli(&["subs"], temp_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
