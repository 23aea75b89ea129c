use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Catalog used by most end-to-end scripts. Cold-casual days have exactly one
/// match per slot, so assertions do not depend on the picker's seed.
pub const SAMPLE_CATALOG: &str = "category,name,color,temperature,style,weather\n\
                                  jacket,Parka,Blue,cold,casual,rainy\n\
                                  shirt,Flannel,Red,cold,casual,sunny\n\
                                  pants,Jeans,Blue,cold,casual,sunny\n\
                                  shoes,Boots,Brown,cold,casual,rainy\n\
                                  shirt,Tee,White,hot,casual,sunny\n";

pub fn write_catalog(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("items.csv");
    std::fs::write(&path, contents).expect("failed to write catalog fixture");
    path
}

pub fn outfit_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_outfit"))
}

/// Run the binary with `script` piped to stdin and capture everything.
pub fn run_with_input(mut cmd: Command, script: &str) -> Result<Output> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    let mut stdin = child.stdin.take().context("child stdin not captured")?;
    stdin
        .write_all(script.as_bytes())
        .context("failed to write the session script")?;
    drop(stdin);
    child
        .wait_with_output()
        .context("failed to collect session output")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
