use clap::{ArgAction, Parser};

mod backend;
mod config;
mod draw;
mod input;

use input::ShapeMode;

#[derive(Parser, Debug)]
#[command(name = "swift-doodle")]
#[command(version, about = "Hand-drawn sketching surface for Wayland compositors")]
struct Cli {
    /// Open the drawing surface immediately
    #[arg(long, short = 'a', action = ArgAction::SetTrue)]
    active: bool,

    /// Initial mode (freehand, rectangle, circle, ellipse, or triangle)
    #[arg(long, short = 'm', value_name = "MODE", value_parser = parse_mode)]
    mode: Option<ShapeMode>,

    /// Write the documented default config to ~/.config/swift-doodle/config.toml
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "active")]
    init_config: bool,
}

fn parse_mode(value: &str) -> Result<ShapeMode, String> {
    value.parse().map_err(|_| {
        format!("unknown mode '{value}' (expected freehand, rectangle, circle, ellipse, or triangle)")
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = config::Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() && cli.active {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor with wlr-layer-shell support.");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    if cli.active {
        log::info!("Starting drawing surface...");
        log::info!("Controls:");
        log::info!("  - Draw: press and drag");
        log::info!("  - Switch mode: click (freehand -> rectangle -> circle -> ellipse -> triangle)");
        log::info!("  - Exit: Escape");
        log::info!("");

        backend::run_wayland(cli.mode)?;

        log::info!("Drawing surface closed.");
    } else {
        // No flags: show usage
        println!("swift-doodle: Hand-drawn sketching surface for Wayland compositors");
        println!();
        println!("Usage:");
        println!("  swift-doodle --active               Open the drawing surface");
        println!("  swift-doodle --active --mode MODE   Open in a specific mode");
        println!("  swift-doodle --init-config          Write the default config file");
        println!("  swift-doodle --help                 Show help");
        println!();
        println!("Modes cycle on every click:");
        println!("  freehand -> rectangle -> circle -> ellipse -> triangle -> freehand");
        println!();
        println!("Requirements:");
        println!("  - Wayland compositor (Hyprland, Sway, etc.)");
        println!("  - wlr-layer-shell protocol support");
    }

    Ok(())
}
