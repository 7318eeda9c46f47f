//! Fake `yt-dlp` executable: a shell script that logs its arguments, fails
//! the first `fails` invocations with a given stderr, then prints `stdout`.
//! Neither text may contain a single quote.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct FakeYtDlp {
    pub fails: u32,
    pub stderr: &'static str,
    pub stdout: &'static str,
}

impl FakeYtDlp {
    /// Write the script into `dir` and return its path.
    pub fn install(&self, dir: &Path) -> PathBuf {
        let log = dir.join("calls.log");
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> '{log}'
if [ "$1" = "--version" ]; then
  echo "2024.12.13"
  exit 0
fi
n=$(( $(wc -l < '{log}') ))
if [ "$n" -le {fails} ]; then
  printf '%s\n' '{stderr}' >&2
  exit 1
fi
echo "WARNING: fake engine" >&2
printf '%s\n' '{stdout}'
exit 0
"#,
            log = log.display(),
            fails = self.fails,
            stderr = self.stderr,
            stdout = self.stdout,
        );
        let path = dir.join("yt-dlp");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Argument lines recorded by the fake, one per invocation.
pub fn calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
