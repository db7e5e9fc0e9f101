//! Headless runner: spawns a player and one enemy and reports how the chase
//! went after a fixed number of frames.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;
use log::info;
use ukemochi::{
    init_logging, spawn_enemy, spawn_player, EnemyBrain, ScriptPlugin, SoulType, Tuning,
};

/// Headless run of the Ukemochi gameplay scripts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding gameplay tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 120)]
    ticks: u32,

    /// Player start position, x
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    player_x: f32,

    /// Player start position, y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    player_y: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let tuning = match &args.config {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut app = App::new();
    app.insert_resource(tuning)
        .add_plugins(MinimalPlugins)
        .add_plugins(ScriptPlugin);

    let world = app.world_mut();
    spawn_player(world, Vec2::new(args.player_x, args.player_y));
    let enemy = spawn_enemy(world, Vec2::ZERO, SoulType::Fish);

    for _ in 0..args.ticks {
        app.update();
    }

    let brain = app
        .world()
        .get::<EnemyBrain>(enemy)
        .context("enemy despawned during the run")?;
    let transform = app
        .world()
        .get::<Transform>(enemy)
        .context("enemy lost its transform")?;
    info!(
        "after {} ticks the enemy is {:?} at {:?}, heading {:?}",
        args.ticks,
        brain.enemy.state(),
        transform.translation.truncate(),
        brain.enemy.pursuit_direction()
    );
    Ok(())
}
