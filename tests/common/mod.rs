//! Shared helpers for running the `bfmt` binary in integration tests.

#![allow(dead_code)]

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Captured result of one `bfmt` invocation.
#[derive(Debug)]
pub struct RunOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

/// Path of a file under tests/fixtures/.
pub fn fixture_path(name: &str) -> PathBuf {
    manifest_dir().join("tests/fixtures").join(name)
}

pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()))
}

/// An isolated config home so a developer's own settings never leak in.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create sandbox dir"),
        }
    }

    /// Write `<config dir>/bible-fmt/config.json` inside the sandbox.
    pub fn write_default_settings(&self, json: &str) {
        let dir = self.home.path().join("bible-fmt");
        std::fs::create_dir_all(&dir).expect("create settings dir");
        std::fs::write(dir.join("config.json"), json).expect("write settings");
    }

    /// Install a SWORD module conf under the sandbox home.
    pub fn write_module_conf(&self, file: &str, contents: &str) {
        let dir = self.home.path().join(".sword").join("mods.d");
        std::fs::create_dir_all(&dir).expect("create mods.d");
        std::fs::write(dir.join(file), contents).expect("write module conf");
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        std::fs::write(&path, contents).expect("write sandbox file");
        path
    }

    /// Run `bfmt` with `args`, feeding `stdin` when given.
    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> RunOutput {
        let mut child = Command::new(env!("CARGO_BIN_EXE_bfmt"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("HOME", self.home.path())
            .env_remove("BFMT_LOG")
            .env_remove("SWORD_PATH")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn bfmt");
        {
            let mut pipe = child.stdin.take().expect("stdin pipe");
            if let Some(text) = stdin {
                pipe.write_all(text.as_bytes()).expect("write stdin");
            }
        }
        let output = child.wait_with_output().expect("wait for bfmt");
        RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
