//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use parlour_core::LineConsole;
use tempfile::TempDir;

pub type ScriptedConsole<'a> = LineConsole<&'a [u8], Vec<u8>>;

/// A console that reads `input` and captures everything written.
pub fn scripted(input: &str) -> ScriptedConsole<'_> {
    LineConsole::new(input.as_bytes(), Vec::new())
}

pub fn transcript(console: ScriptedConsole<'_>) -> String {
    String::from_utf8(console.into_writer()).expect("transcript is UTF-8")
}

/// Run a built binary with `stdin` piped in.
///
/// `HOME` points at a scratch directory so logs and config never touch the
/// real home. When `config` is given it is written there and selected with
/// `PARLOUR_CONFIG`.
pub fn run_binary(binary: &str, stdin: &str, config: Option<&str>) -> Output {
    let home = TempDir::new().expect("create scratch home");
    let mut command = Command::new(binary);
    command
        .env("HOME", home.path())
        .env_remove("PARLOUR_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(body) = config {
        let path = home.path().join("config.toml");
        fs::write(&path, body).expect("write config");
        command.env("PARLOUR_CONFIG", &path);
    }

    let mut child = command.spawn().expect("spawn binary");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        // The binary may exit before reading everything; that is fine.
        let _ = pipe.write_all(stdin.as_bytes());
    }
    child.wait_with_output().expect("wait for binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
