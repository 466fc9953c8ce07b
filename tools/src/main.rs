//! grid-viewer: headless text viewer for the dojo_starter treasure grid.
//!
//! Usage:
//!   grid-viewer --updates updates.jsonl [--data-dir ./data]
//!   grid-viewer --updates -             (read updates from stdin)
//!   grid-viewer --seed 12345 --steps 8  (seeded demo feed)
//!
//! Each update is one JSON line: {"model": "<model id>", "values": [...]},
//! with values in the model's canonical field order.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dojo_starter_core::{
    codec::ModelUpdate,
    config::ClientConfig,
    grid::GRID_SIZE,
    model::{Entity, PlayerSpawned, Position, TreasureFound, TreasurePosition, Vec2},
    registry::SchemaRegistry,
    render::render_text,
    types::{Coord, Timestamp},
    view::GridView,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

const DEMO_PLAYER: &str = "0x0demo";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let steps = parse_arg(&args, "--steps", 5u32);
    let updates = find_arg(&args, "--updates");

    let config = match find_arg(&args, "--data-dir") {
        Some(dir) => ClientConfig::load(dir)?,
        None => ClientConfig::default(),
    };
    let registry = SchemaRegistry::with_namespace(&config.namespace);
    let mut view = match &config.player_filter {
        Some(player) => GridView::for_player(player.clone()),
        None => GridView::new(),
    };

    println!("dojo_starter grid-viewer");
    println!("  namespace: {}", registry.namespace());
    match updates {
        Some(path) => println!("  updates:   {path}"),
        None => println!("  demo seed: {seed} ({steps} steps)"),
    }
    println!();

    let feed = match updates {
        Some(path) => read_updates(path)?,
        None => demo_updates(&registry, seed, steps)?,
    };

    let mut applied = 0usize;
    for (line_no, update) in feed.iter().enumerate() {
        let entity = match registry.decode_update(update) {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping update {}: {e}", line_no + 1);
                continue;
            }
        };
        applied += 1;
        describe(&entity);
        if view.apply(&entity) {
            println!("{}", render_text(&view.render(), &config.glyphs));
            println!();
        }
    }

    println!("=== SUMMARY ===");
    println!("  updates read:    {}", feed.len());
    println!("  updates applied: {applied}");
    match view.position() {
        Some(p) => println!("  player at:       ({}, {})", p.vec.x, p.vec.y),
        None => println!("  player at:       (none)"),
    }
    match view.treasure() {
        Some(t) => println!("  treasure at:     ({}, {})", t.vec.x, t.vec.y),
        None => println!("  treasure at:     (none)"),
    }
    Ok(())
}

fn read_updates(path: &str) -> Result<Vec<ModelUpdate>> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path).with_context(|| format!("Cannot open {path}"))?;
        Box::new(BufReader::new(file))
    };

    let mut updates = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ModelUpdate>(&line) {
            Ok(u) => updates.push(u),
            Err(e) => log::warn!("Line {} is not a model update: {e}", idx + 1),
        }
    }
    Ok(updates)
}

/// A seeded feed: spawn, place the treasure, then wander the player.
/// Updates go through the same encoder the world uses.
fn demo_updates(registry: &SchemaRegistry, seed: u64, steps: u32) -> Result<Vec<ModelUpdate>> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let grid = GRID_SIZE as Coord;
    let now = Utc::now().timestamp().max(0) as Timestamp;

    let mut entities: Vec<Entity> = vec![
        PlayerSpawned {
            player: DEMO_PLAYER.into(),
            timestamp: now,
        }
        .into(),
        TreasurePosition {
            player: DEMO_PLAYER.into(),
            vec: Vec2::new(rng.gen_range(0..grid), rng.gen_range(0..grid)),
            ..TreasurePosition::default()
        }
        .into(),
    ];

    let mut at = Vec2::new(rng.gen_range(0..grid), rng.gen_range(0..grid));
    entities.push(position(at));
    for _ in 0..steps {
        at = Vec2::new(step(&mut rng, at.x, grid), step(&mut rng, at.y, grid));
        entities.push(position(at));
    }

    if let Some(Entity::TreasurePosition(t)) = entities.get(1) {
        if t.vec == at {
            entities.push(
                TreasureFound {
                    player: DEMO_PLAYER.into(),
                    timestamp: now,
                    treasure_position: at,
                }
                .into(),
            );
        }
    }

    entities
        .iter()
        .map(|e| registry.encode_update(e).map_err(Into::into))
        .collect()
}

fn position(vec: Vec2) -> Entity {
    Position {
        player: DEMO_PLAYER.into(),
        vec,
    }
    .into()
}

fn step(rng: &mut Pcg64Mcg, coord: Coord, grid: Coord) -> Coord {
    match rng.gen_range(0..3) {
        0 => (coord - 1).max(0),
        1 => coord,
        _ => (coord + 1).min(grid - 1),
    }
}

fn describe(entity: &Entity) {
    match entity {
        Entity::PlayerSpawned(p) => {
            println!("{} spawned at {}", p.player, format_timestamp(p.timestamp))
        }
        Entity::TreasureFound(t) => println!(
            "{} found the treasure at ({}, {}) on {}",
            t.player,
            t.treasure_position.x,
            t.treasure_position.y,
            format_timestamp(t.timestamp)
        ),
        Entity::Moves(m) => println!(
            "{} has {} moves left (last: {}, can move: {})",
            m.player, m.remaining, m.last_direction, m.can_move
        ),
        Entity::DirectionsAvailable(d) => {
            let dirs: Vec<String> = d.directions.iter().map(|d| d.to_string()).collect();
            println!("{} can go: {}", d.player, dirs.join(", "))
        }
        Entity::Position(_) | Entity::TreasurePosition(_) => {
            log::debug!("{} update for {}", entity.type_name(), entity.player())
        }
    }
}

fn format_timestamp(ts: Timestamp) -> String {
    i64::try_from(ts)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("t={ts}"))
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
