use anyhow::Result;
use std::process::Command;

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn run(bin: &str, env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    let output = Command::new(bin)
        .args(args)
        .envs(env.vars())
        .env("NO_COLOR", "1")
        .current_dir(env.path())
        .output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

pub fn run_deskwall(env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    run(env!("CARGO_BIN_EXE_deskwall"), env, args)
}

pub fn run_sync(env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    run(env!("CARGO_BIN_EXE_deskwall-sync"), env, args)
}
