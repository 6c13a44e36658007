#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use roster::Company;
use tempfile::TempDir;

/// Helper struct to run roster commands in an isolated temp directory
pub struct RosterTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl RosterTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        RosterTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_roster")),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables set for the child process only
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("ROSTER_ENDPOINT")
            .env_remove("ROSTER_PAGE_SIZE")
            .envs(vars.iter().copied())
            .output()
            .expect("Failed to execute roster command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Write a company data file and return its file name
    pub fn write_companies(&self, name: &str, companies: &[Company]) -> String {
        let path = self.temp_dir.path().join(name);
        let content = serde_json::to_string_pretty(companies).expect("Failed to encode companies");
        fs::write(path, content).expect("Failed to write company data");
        name.to_string()
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".roster");
        fs::create_dir_all(&dir).expect("Failed to create .roster directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.temp_dir.path().join(".roster").join("config.yaml"))
            .expect("Failed to read config")
    }

    pub fn read_store(&self, dir: &str) -> Vec<Company> {
        let path = self.temp_dir.path().join(dir).join("companies.json");
        let content = fs::read_to_string(path).expect("Failed to read persisted companies");
        serde_json::from_str(&content).expect("Persisted companies should be valid JSON")
    }
}
