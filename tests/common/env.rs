//! Test environment for isolated Aligner runs.
//!
//! Provides `TestEnv` - a temp project directory and a temp config home, plus
//! helpers to run the `aligner` binary against them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an Aligner CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }

    /// Parse stdout as NDJSON, one value per line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Project that gets analysed
    pub project_root: TempDir,
    /// Stands in for HOME and XDG_CONFIG_HOME so user config never leaks in
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_aligner")),
        }
    }

    /// Environment with the given files written into the project.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (rel, content) in files {
            env.write(rel, content);
        }
        env
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Write the user-level config file where `dirs::config_dir` looks for it
    pub fn write_user_config(&self, content: &str) {
        let home = self.config_home.path();
        for base in [home.to_path_buf(), home.join("Library/Application Support")] {
            let dir = base.join("aligner");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("config.toml"), content).unwrap();
        }
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root())
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("ALIGNER_THRESHOLD")
            .env_remove("ALIGNER_BASE_OFFSET")
            .env_remove("ALIGNER_EXTENSIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute aligner");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
