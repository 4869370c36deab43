//! Build tasks for the superdesign workspace.
//!
//! `cargo run -p superdesign-xtask -- build-ui` compiles the Dioxus app with
//! `trunk` into `crates/superdesign-ui/dist/`, which the native host embeds.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "superdesign build tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Build the WASM UI bundle with trunk.
    BuildUi {
        /// Debug build (faster, larger).
        #[arg(long)]
        dev: bool,
    },
    /// Build the UI bundle, then run the native host.
    Run {
        /// Arguments forwarded to the host binary.
        #[arg(last = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = workspace_root();
    match cli.task {
        Task::BuildUi { dev } => build_ui(&root, dev),
        Task::Run { args } => {
            build_ui(&root, false)?;
            run_host(&root, &args)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn build_ui(root: &Path, dev: bool) -> Result<()> {
    let ui_dir = root.join("crates/superdesign-ui");
    let mut cmd = Command::new("trunk");
    let _ = cmd.arg("build").current_dir(&ui_dir);
    if !dev {
        let _ = cmd.arg("--release");
    }
    let status = cmd.status().context(
        "failed to launch trunk (install with `cargo install trunk`)",
    )?;
    if !status.success() {
        bail!("trunk build failed with {status}");
    }
    Ok(())
}

fn run_host(root: &Path, args: &[String]) -> Result<()> {
    let status = Command::new(env!("CARGO"))
        .args(["run", "-p", "superdesign", "--"])
        .args(args)
        .current_dir(root)
        .status()
        .context("failed to launch cargo")?;
    if !status.success() {
        bail!("superdesign exited with {status}");
    }
    Ok(())
}
