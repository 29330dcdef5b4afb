//! CLI entry point for the sprite sheet generation pipeline

use clap::Parser;
use spritegen::io::cli::{Cli, SpritePipeline};

#[tokio::main]
async fn main() -> spritegen::Result<()> {
    let cli = Cli::parse();
    let mut pipeline = SpritePipeline::new(cli);
    pipeline.run().await
}
