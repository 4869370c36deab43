//! Standalone superdesign host: opens a window and serves the webview
//! panel the way an editor extension would.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use superdesign::options::HostOptions;
use superdesign::{HostWindow, SuperdesignError, ViewKind};

/// Serve the superdesign webview in a native window.
#[derive(Debug, Parser)]
#[command(name = "superdesign", version, about)]
struct Cli {
    /// Surface to show (overrides the options file).
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Publish a context with this layout (overrides the options file).
    #[arg(long)]
    layout: Option<String>,

    /// Do not publish a context; the chat stays on its placeholder.
    #[arg(long, conflicts_with = "layout")]
    no_context: bool,

    /// Host options file (TOML).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Print the options JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Chat,
    Canvas,
}

impl From<ViewArg> for ViewKind {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Chat => Self::Chat,
            ViewArg::Canvas => Self::Canvas,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.print_schema {
        print_schema();
        return;
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SuperdesignError> {
    let mut options = match &cli.options {
        Some(path) => {
            log::info!("loading host options from {}", path.display());
            HostOptions::load(path)?
        }
        None => HostOptions::default(),
    };
    if cli.no_context {
        options.context.publish = false;
    }

    let mut builder = HostWindow::builder().with_options(options);
    if let Some(view) = cli.view {
        builder = builder.with_view(view.into());
    }
    if let Some(layout) = cli.layout {
        builder = builder.with_layout(layout);
    }
    builder.build().run()
}

#[allow(clippy::print_stdout)]
fn print_schema() {
    let schema = HostOptions::json_schema();
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize schema: {e}"),
    }
}
