use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wallscriber::{Config, WallEditor, replay};

#[derive(Parser, Debug)]
#[command(name = "wallscriber")]
#[command(version, about = "Wall drawing core for 2D floor-plan editors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON pointer-event script and print the resulting walls
    Replay {
        /// Script file: {"walls": [...], "events": [...]}
        script: PathBuf,

        /// Config file to use instead of ~/.config/wallscriber/config.toml
        #[arg(long, short = 'c', value_name = "PATH")]
        config: Option<PathBuf>,

        /// Print compact JSON instead of pretty-printed output
        #[arg(long, action = ArgAction::SetTrue)]
        compact: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Replay {
            script,
            config,
            compact,
        }) => {
            let config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };

            let script_data = replay::load_script(&script)?;
            let mut editor = WallEditor::from_config(&config);
            let walls = replay::run_script(&mut editor, &script_data)
                .with_context(|| format!("Failed to replay {}", script.display()))?;

            let output = if compact {
                serde_json::to_string(&walls)?
            } else {
                serde_json::to_string_pretty(&walls)?
            };
            println!("{output}");
        }
        None => {
            // No subcommand: show usage
            println!("wallscriber: Wall drawing core for 2D floor-plan editors");
            println!();
            println!("Usage:");
            println!("  wallscriber replay <SCRIPT>    Replay pointer events and print walls as JSON");
            println!("  wallscriber --help             Show help");
            println!();
            println!("Script format:");
            println!("  {{\"walls\": [{{\"x1\": 0, \"y1\": 0, \"x2\": 100, \"y2\": 0}}],");
            println!("   \"events\": [{{\"press\": {{\"x\": 50, \"y\": -50}}}},");
            println!("              {{\"move\": {{\"x\": 50, \"y\": 50}}}}, \"release\"]}}");
            println!();
            println!("Logging is controlled with RUST_LOG (e.g. RUST_LOG=debug).");
        }
    }

    Ok(())
}
