//! crossing — four agents crossing a walled field through two gaps.
//!
//! The terrain is a 20 × 20 m square split by a wall running north–south,
//! open only at two gaps.  Agents on either side are planned in priority
//! order; each reserved path becomes an obstacle for the agents after it.
//!
//! Usage: `crossing [config.json]`.  The optional JSON file overrides any
//! subset of the planner configuration, e.g. `{"resolution": 20}`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mapf_core::{Bounds, PlannerConfig, WorldPos};
use mapf_lattice::TraversabilityGrid;
use mapf_planner::{AgentId, AgentRequest, PlannedPath, Planner};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIDE_METRES: f32   = 20.0;
const RASTER:      usize = 10;     // terrain samples per axis
const WALL_COLUMN: usize = 5;
const GAPS:        [usize; 2] = [2, 7];

// (start, target) in raster cells; each raster cell is 2 m wide.
const AGENTS: [((usize, usize), (usize, usize)); 4] = [
    ((0, 2), (9, 1)),
    ((9, 7), (0, 8)),
    ((0, 7), (9, 9)),
    ((9, 3), (0, 0)),
];

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: PlannerConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn build_terrain(bounds: Bounds) -> Result<TraversabilityGrid> {
    let mut terrain = TraversabilityGrid::open(bounds, RASTER, RASTER)?;
    for y in (0..RASTER).filter(|y| !GAPS.contains(y)) {
        terrain.set_wall(WALL_COLUMN, y);
    }
    Ok(terrain)
}

/// Centre of raster cell `(x, y)` in world coordinates.
fn raster_centre((x, y): (usize, usize)) -> WorldPos {
    let step = SIDE_METRES / RASTER as f32;
    WorldPos::ground((x as f32 + 0.5) * step, (y as f32 + 0.5) * step)
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_path(agent: AgentId, path: &PlannedPath) {
    let cells: Vec<String> = path.states.iter().map(ToString::to_string).collect();
    println!(
        "{agent}: {} moves, arrives t={}, cost {:.1}",
        path.moves(),
        path.arrival_step(),
        path.cost,
    );
    println!("    {}", cells.join(" -> "));
}

/// Count (cell, t) pairs claimed by more than one planned agent, counting
/// parked tails.
fn vertex_conflicts(paths: &[(AgentId, &PlannedPath)], horizon: u32) -> usize {
    let mut conflicts = 0;
    for t in 0..horizon {
        let mut claims = BTreeMap::new();
        for (_, path) in paths {
            if let Some(cell) = path.cell_at(t) {
                *claims.entry(cell).or_insert(0usize) += 1;
            }
        }
        conflicts += claims.values().filter(|&&n| n > 1).count();
    }
    conflicts
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;
    info!(?config, "planner configuration");

    let bounds = Bounds::new(0.0, SIDE_METRES, 0.0, SIDE_METRES)?;
    let terrain = build_terrain(bounds)?;

    let t0 = Instant::now();
    let mut planner = Planner::new(config, &terrain).context("building planner")?;
    println!(
        "Lattice: {0}x{0} cells x {1} steps (built in {2:.2?})",
        planner.config().resolution,
        planner.config().max_time_steps,
        t0.elapsed(),
    );
    println!();

    let requests: Vec<AgentRequest> = AGENTS
        .iter()
        .zip(0u32..)
        .map(|(&(start, target), id)| AgentRequest {
            agent:  AgentId(id),
            start:  raster_centre(start),
            target: raster_centre(target),
        })
        .collect();

    let t1 = Instant::now();
    let results = planner.plan_fleet(&requests);
    let elapsed = t1.elapsed();

    let mut planned = Vec::new();
    for (agent, result) in &results {
        match result {
            Ok(path) => {
                print_path(*agent, path);
                planned.push((*agent, path));
            }
            Err(e) => println!("{agent}: no plan ({e})"),
        }
    }

    println!();
    println!(
        "Planned {}/{} agents in {elapsed:.2?}; {} reserved cells",
        planned.len(),
        requests.len(),
        planner.lattice().occupied_count(),
    );
    let horizon = u32::try_from(planner.config().max_time_steps).context("horizon exceeds u32")?;
    println!("Vertex conflicts: {}", vertex_conflicts(&planned, horizon));
    Ok(())
}
