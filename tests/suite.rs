// Centralized integration suite for the outfit recommender; drives the real
// binary over scripted stdin so catalog loading, the session loop, and
// selection behavior surface in one place.
mod support;

use anyhow::Result;
use support::{
    SAMPLE_CATALOG, outfit_command, run_with_input, stderr_text, stdout_text, write_catalog,
};
use tempfile::TempDir;

#[test]
fn find_reports_a_full_outfit() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), SAMPLE_CATALOG);

    let mut cmd = outfit_command();
    cmd.arg("--catalog").arg(&path);
    let output = run_with_input(cmd, "find\n10\ncasual\nrainy\nquit\n")?;

    assert!(output.status.success());
    let stdout = stdout_text(&output);
    assert!(stdout.contains("Today's Outfit:"));
    assert!(stdout.contains("Jacket: Parka/Blue"));
    assert!(stdout.contains("Shirt: Flannel/Red"));
    assert!(stdout.contains("Pants: Jeans/Blue"));
    assert!(stdout.contains("Shoes: Boots/Brown"));
    Ok(())
}

#[test]
fn jacket_line_is_absent_on_a_warm_sunny_day() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), SAMPLE_CATALOG);

    let mut cmd = outfit_command();
    cmd.arg("--catalog").arg(&path);
    let output = run_with_input(cmd, "find\n25\ncasual\nsunny\nquit\n")?;

    assert!(output.status.success());
    let stdout = stdout_text(&output);
    assert!(stdout.contains("Shirt: Tee/White"));
    assert!(stdout.contains("Pants: Sorry, no suitable pants"));
    assert!(!stdout.contains("Jacket:"));
    Ok(())
}

#[test]
fn add_survives_a_fresh_process() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), SAMPLE_CATALOG);

    let mut add_cmd = outfit_command();
    add_cmd.arg("--catalog").arg(&path);
    let added = run_with_input(
        add_cmd,
        "add\nshoes\nLoafers\nBlack\nhot\nsunny\nformal\nquit\n",
    )?;
    assert!(added.status.success());
    assert!(stdout_text(&added).contains("Item added successfully."));

    let raw = std::fs::read_to_string(&path)?;
    assert!(raw.contains("shoes,Loafers,Black,hot,formal,sunny"));

    let mut find_cmd = outfit_command();
    find_cmd.arg("--catalog").arg(&path);
    let found = run_with_input(find_cmd, "find\n25\nformal\nsunny\nquit\n")?;
    assert!(found.status.success());
    assert!(stdout_text(&found).contains("Shoes: Loafers/Black"));
    Ok(())
}

#[test]
fn malformed_records_warn_and_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    let contents = "category,name,color,temperature,style,weather\n\
                    jacket,Parka,Blue,cold,casual,rainy\n\
                    shirt,Weird,Plaid,hot,fancy,sunny\n\
                    shirt,Flannel,Red,cold,casual,sunny\n";
    let path = write_catalog(dir.path(), contents);

    let mut cmd = outfit_command();
    cmd.arg("--catalog").arg(&path);
    let output = run_with_input(cmd, "find\n10\ncasual\nsunny\nquit\n")?;

    assert!(output.status.success());
    let stderr = stderr_text(&output);
    assert!(stderr.contains("warning: skipping catalog record"));
    assert!(stderr.contains("line 3"));
    let stdout = stdout_text(&output);
    assert!(stdout.contains("Jacket: Parka/Blue"));
    assert!(stdout.contains("Shirt: Flannel/Red"));
    Ok(())
}

#[test]
fn missing_catalog_file_aborts_startup() -> Result<()> {
    let dir = TempDir::new()?;
    let mut cmd = outfit_command();
    cmd.arg("--catalog").arg(dir.path().join("absent.csv"));
    let output = run_with_input(cmd, "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("loading catalog from"));
    Ok(())
}

#[test]
fn bad_header_aborts_with_line_one() -> Result<()> {
    let dir = TempDir::new()?;
    let contents = "category,name,color,temperature,style\n\
                    jacket,Parka,Blue,cold,casual\n";
    let path = write_catalog(dir.path(), contents);

    let mut cmd = outfit_command();
    cmd.arg("--catalog").arg(&path);
    let output = run_with_input(cmd, "")?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("catalog line 1"));
    assert!(stderr.contains("'weather'"));
    Ok(())
}

#[test]
fn env_var_names_the_catalog() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(dir.path(), SAMPLE_CATALOG);

    let mut cmd = outfit_command();
    cmd.env("OUTFIT_CATALOG", &path);
    let output = run_with_input(cmd, "find\n10\ncasual\nrainy\nquit\n")?;

    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Jacket: Parka/Blue"));
    Ok(())
}

#[test]
fn empty_env_value_falls_back_to_the_default_file() -> Result<()> {
    let dir = TempDir::new()?;
    write_catalog(dir.path(), SAMPLE_CATALOG);

    let mut cmd = outfit_command();
    cmd.env("OUTFIT_CATALOG", "").current_dir(dir.path());
    let output = run_with_input(cmd, "find\n10\ncasual\nrainy\nquit\n")?;

    assert!(output.status.success());
    assert!(stdout_text(&output).contains("Jacket: Parka/Blue"));
    Ok(())
}

#[test]
fn seeded_sessions_repeat_their_choices() -> Result<()> {
    let dir = TempDir::new()?;
    let contents = "category,name,color,temperature,style,weather\n\
                    shirt,Tee,White,hot,casual,sunny\n\
                    shirt,Henley,Gray,hot,casual,sunny\n\
                    shirt,Camp,Green,hot,casual,sunny\n";
    let path = write_catalog(dir.path(), contents);
    let script = "find\n25\ncasual\nsunny\nquit\n";

    let mut first_cmd = outfit_command();
    first_cmd.arg("--catalog").arg(&path).arg("--seed").arg("7");
    let first = run_with_input(first_cmd, script)?;

    let mut second_cmd = outfit_command();
    second_cmd.arg("--catalog").arg(&path).arg("--seed").arg("7");
    let second = run_with_input(second_cmd, script)?;

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(stdout_text(&first), stdout_text(&second));
    Ok(())
}

#[test]
fn unknown_flags_print_usage_and_fail() -> Result<()> {
    let mut cmd = outfit_command();
    cmd.arg("--frobnicate");
    let output = run_with_input(cmd, "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Usage: outfit"));
    Ok(())
}

#[test]
fn help_prints_usage_and_exits_zero() -> Result<()> {
    let mut cmd = outfit_command();
    cmd.arg("--help");
    let output = run_with_input(cmd, "")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_text(&output).contains("Usage: outfit"));
    Ok(())
}

#[test]
fn invalid_seed_values_are_rejected() -> Result<()> {
    let mut cmd = outfit_command();
    cmd.arg("--seed").arg("banana");
    let output = run_with_input(cmd, "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Invalid --seed value"));
    Ok(())
}
