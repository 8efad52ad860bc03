//! # vimbridge Console Entry Point
//!
//! Loads a document into the in-memory host and drives the platform from
//! commands read on stdin.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use vimbridge::cmd_args::CommandLineArgs;
use vimbridge::config::{self, PlatformOptions};
use vimbridge::console::Console;
use vimbridge::platform::{EditorPlatform, MemoryEditor, MemoryHost};

const SAMPLE_TEXT: &str = "fn main() {\n    let greeting = \"hello\";\n    println!(\"{greeting}\");\n}\n";

fn main() -> Result<()> {
    init_tracing_subscriber();

    let args = CommandLineArgs::parse();

    let editor = match args.file() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            MemoryEditor::new(&text).with_save_path(path.clone())
        }
        None => MemoryEditor::new(SAMPLE_TEXT),
    }
    .with_viewport_height(config::get_viewport_height());

    let host = MemoryHost::from_editor(editor);
    for &(start, end) in args.folds() {
        if !host.fold(start, end) {
            tracing::warn!("ignoring fold {}:{}", start, end);
        }
    }

    let options = PlatformOptions {
        initial_space: args.space(),
        ..PlatformOptions::default()
    };
    let platform = EditorPlatform::with_options(host.handles(), options);
    let mut console = Console::new(host, platform);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console.run(stdin.lock(), stdout.lock())
}

fn init_tracing_subscriber() {
    let filter = EnvFilter::try_new(config::get_log_level())
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
