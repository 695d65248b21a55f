use anyhow::{bail, Result};
use clap::Parser;
use pocket_snake::game::GameConfig;
use pocket_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "pocket-snake")]
#[command(version, about = "Snake on a fixed grid, played in the terminal")]
struct Cli {
    /// Side length of the square grid, in cells
    #[arg(long, default_value = "20")]
    grid_size: usize,

    /// Pixel size of one cell in the rendered snapshot
    #[arg(long, default_value = "20")]
    cell_size: u32,

    /// Frames per head move; smaller is faster
    #[arg(long, default_value = "10")]
    speed: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.grid_size < 2 {
        bail!("grid size must be at least 2 so food has somewhere to go");
    }
    if cli.speed == 0 {
        bail!("speed must be at least 1 frame per move");
    }

    let config = GameConfig {
        grid_size: cli.grid_size,
        cell_size: cli.cell_size,
        update_frequency: cli.speed,
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
