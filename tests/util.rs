#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tempfile::{TempDir, tempdir};

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

pub struct Script {
    pub dir: TempDir,
    pub path: PathBuf,
}

pub fn write_script(name: &str, src: &str) -> Script {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, src).expect("write script");
    Script { dir, path }
}

pub fn run_bhn_source(src: &str) -> CommandOutput {
    let script = write_script("script.bhn", src);
    run_chalau([script.path.as_os_str()])
}

pub fn run_chalau<I, S>(args: I) -> CommandOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_chalau"));
    command.args(args);
    execute(command)
}

/// Runs `chalau` with `input` written to its stdin, which is then closed.
pub fn run_chalau_with_input<I, S>(args: I, input: &str) -> CommandOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let config_home = tempdir().expect("create config dir");
    let mut command = Command::new(env!("CARGO_BIN_EXE_chalau"));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    isolate(&mut command, config_home.path());
    let mut child = command.spawn().expect("failed to spawn chalau");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("failed to wait for chalau");
    CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        status: output.status,
    }
}

// Silences tracing and keeps any per-user config.toml out of the run.
fn isolate(command: &mut Command, config_home: &Path) {
    command
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("BHANAI_LOG", "off")
        .env("XDG_CONFIG_HOME", config_home);
}

pub fn run_examples(dir: &Path) -> CommandOutput {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bhanai_examples"));
    command.arg(dir);
    execute(command)
}

pub fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn execute(mut command: Command) -> CommandOutput {
    let config_home = tempdir().expect("create config dir");
    isolate(&mut command, config_home.path());
    let output = command.output().expect("failed to run command");
    CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        status: output.status,
    }
}
