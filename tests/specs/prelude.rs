//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing acscan CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the acscan binary.
///
/// Color and config environment variables are cleared so the host
/// environment cannot leak into assertions.
pub fn acscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("acscan"));
    for var in ["NO_COLOR", "COLOR", "ACSCAN_CONFIG", "ACSCAN_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a scan command builder.
pub fn scan() -> ScanBuilder {
    ScanBuilder::new("scan")
}

/// Create a stats command builder.
pub fn stats() -> ScanBuilder {
    ScanBuilder::new("stats")
}

/// Fluent builder around one acscan invocation.
pub struct ScanBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    stdin: Option<Vec<u8>>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ScanBuilder {
    fn new(command: &str) -> Self {
        Self {
            args: vec![command.to_string()],
            dir: None,
            stdin: None,
            envs: Vec::new(),
        }
    }

    /// Add `-e <pattern>` for each pattern.
    pub fn patterns(mut self, patterns: &[&str]) -> Self {
        for p in patterns {
            self.args.push("-e".to_string());
            self.args.push(p.to_string());
        }
        self
    }

    /// Add raw arguments.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Request JSON output.
    pub fn json(self) -> Self {
        self.args(&["-o", "json"])
    }

    /// Set working directory.
    pub fn pwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Feed bytes on stdin.
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Expect exit code 0 (at least one match).
    pub fn matches(self) -> RunAssert {
        self.exits(0)
    }

    /// Expect exit code 1 (no match).
    pub fn no_match(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    fn output(self) -> std::process::Output {
        // Without an explicit directory, run in a scratch project so config
        // discovery cannot wander into the repository.
        let scratch = Project::empty();
        let mut cmd = acscan_cmd();
        cmd.args(&self.args)
            .current_dir(self.dir.as_deref().unwrap_or(scratch.path()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("command should run");
        {
            use std::io::Write;
            let mut pipe = child.stdin.take().expect("stdin should be piped");
            if let Some(input) = &self.stdin {
                // The binary may exit before reading all of stdin.
                match pipe.write_all(input) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Err(e) => panic!("stdin write failed: {e}"),
                }
            }
        }
        child.wait_with_output().expect("command should finish")
    }
}

/// Captured output with assertion helpers.
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory acting as a project root.
///
/// A `.git` directory is created so config discovery stops here.
///
/// # Examples
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[dictionary]\npatterns = [\"he\"]");
/// temp.file("docs/a.txt", "she sells");
/// scan().args(&["docs"]).pwd(temp.path()).matches();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write acscan.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("acscan.toml", &content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}
