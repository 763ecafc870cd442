use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sigpad::config::Config;
use sigpad::export::{self, Exporter};
use sigpad::input::InputState;
use sigpad::replay::{self, Replay};

#[derive(Parser, Debug)]
#[command(name = "sigpad")]
#[command(
    version,
    about = "Freehand signature pad with eraser, reveal animation and hold-to-export"
)]
struct Cli {
    /// Replay a JSON pointer script (down/move/up/cancel/tool/color/width/reset/undo/hold)
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write downloads to this file instead of the configured directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write a single reveal frame at this progress (0.0 - 1.0) to --output instead
    #[arg(long, value_name = "P", requires = "output", requires = "replay")]
    reveal: Option<f64>,

    /// Load configuration from this file instead of ~/.config/sigpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.replay.as_ref() else {
        // No script: show usage
        println!("sigpad: Freehand signature pad with hold-to-export");
        println!();
        println!("Usage:");
        println!("  sigpad --replay <FILE>                   Replay a pointer script");
        println!("  sigpad --replay <FILE> --output <FILE>   Save downloads to FILE");
        println!("  sigpad --replay <FILE> --reveal <P> --output <FILE>");
        println!("                                           Write one reveal frame");
        println!("  sigpad --help                            Show help");
        println!();
        println!("Downloads happen only when the script holds the export control");
        println!("long enough, e.g. {{ \"type\": \"hold\", \"ms\": 1500 }}.");
        return Ok(());
    };

    let config = load_config(cli.config.as_ref())?;
    let events = replay::load_script(script_path)?;
    let state = InputState::from_config(&config);

    if let Some(progress) = cli.reveal {
        let mut replay = Replay::new(state, None);
        replay.run(&events);
        let state = replay.into_state();

        let output = cli.output.context("--reveal requires --output")?;
        let image = export::render_png(
            state.strokes(),
            state.canvas_width,
            state.canvas_height,
            Some((progress, state.reveal_basis)),
        )
        .context("failed to render reveal frame")?;
        export::file::write_image(&image, &output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("Wrote reveal frame ({progress:.2}) to {}", output.display());
        return Ok(());
    }

    let mut exporter = Exporter::from_config(&config.export);
    if let Some(output) = cli.output {
        exporter = exporter.with_output(output);
    }

    let mut replay = Replay::new(state, Some(exporter));
    replay.run(&events);

    for result in replay.exports() {
        match &result.saved_path {
            Some(path) => println!("Saved signature to {}", path.display()),
            None if result.copied_to_clipboard => println!("Copied signature to clipboard"),
            None => {}
        }
    }
    println!(
        "Replayed {} events: {} strokes, {} exports",
        events.len(),
        replay.state().strokes().len(),
        replay.exports().len()
    );

    Ok(())
}
