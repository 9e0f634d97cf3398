use std::collections::HashMap;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use getier_anim::FrameAnimator;
use getier_core::capabilities::{Gravity, LateralBounce, LinearMovement, WallCrawler};
use getier_core::{Entity, EntityId, EntityState, Rect, SimConfig, Vector, World};

const SPRITE_SIZE: f64 = 32.0;
const WALK_SPEED: f64 = 30.0;

/// Spawn creatures into a fresh world, run the tick loop, and report where
/// everyone ended up.
#[allow(clippy::too_many_arguments)]
pub fn run(
    ticks: u64,
    dt: f64,
    width: f64,
    height: f64,
    walkers: u32,
    crawlers: u32,
    seed: u64,
    verbose: bool,
) -> Result<(), String> {
    if dt <= 0.0 {
        return Err("tick duration must be positive".into());
    }
    if width <= 0.0 || height <= 0.0 {
        return Err("world bounds must be nonzero".into());
    }
    if walkers + crawlers == 0 {
        return Err("nothing to simulate: spawn at least one creature".into());
    }

    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::new(Rect::new(0.0, 0.0, width, height));

    let mut creatures: Vec<EntityId> = Vec::new();
    for i in 0..walkers {
        let x = rng.random_range(0.0..(width - SPRITE_SIZE).max(1.0));
        let y = rng.random_range(0.0..height / 2.0);
        let mut entity = Entity::new(
            EntityId::new(format!("walker-{i}")),
            Rect::new(x, y, SPRITE_SIZE, SPRITE_SIZE),
        );
        entity.install(Gravity::new(config.gravity.clone()));
        entity.install(LateralBounce::new());
        entity.install(LinearMovement::new());
        entity.set_state(EntityState::Move);
        entity.direction = Vector::new(1.0, 0.0);
        entity.speed = WALK_SPEED;
        creatures.push(world.insert(entity).map_err(|e| e.to_string())?);
    }
    for i in 0..crawlers {
        let x = rng.random_range(0.0..(width - SPRITE_SIZE).max(1.0));
        let mut entity = Entity::new(
            EntityId::new(format!("crawler-{i}")),
            Rect::new(x, height - SPRITE_SIZE, SPRITE_SIZE, SPRITE_SIZE),
        );
        entity.install(WallCrawler::new());
        entity.install(LinearMovement::new());
        entity.set_state(EntityState::Move);
        entity.direction = Vector::new(1.0, 0.0);
        entity.speed = WALK_SPEED;
        creatures.push(world.insert(entity).map_err(|e| e.to_string())?);
    }

    log::info!("spawned {} creatures into {width}x{height}", creatures.len());

    // One shared sprite loop stands in for the per-creature animators a
    // frontend would own; it runs off the same tick deltas.
    let mut animator = FrameAnimator::new((0..8).collect::<Vec<u32>>(), config.frame_time);
    let mut frame_changes: u64 = 0;

    let mut last_states: HashMap<EntityId, EntityState> = HashMap::new();
    for id in &creatures {
        if let Some(entity) = world.get(id) {
            last_states.insert(id.clone(), entity.state().clone());
        }
    }

    for tick in 0..ticks {
        world.update(dt);
        if animator.next_frame(dt).is_some() {
            frame_changes += 1;
        }

        if verbose {
            for id in &creatures {
                let Some(entity) = world.get(id) else { continue };
                let state = entity.state().clone();
                if last_states.get(id) != Some(&state) {
                    let tick_label = format!("[tick {tick:>4}]").dimmed();
                    println!("  {tick_label} {id} -> {}", state_label(&state));
                    last_states.insert(id.clone(), state);
                }
            }
        }
    }

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({ticks} ticks, dt={dt}s, seed={seed}, world {width}x{height})").dimmed()
    );
    println!(
        "  {} creatures simulated, {} animation frame changes, {} sprite loops",
        creatures.len(),
        frame_changes,
        animator.completed_loops()
    );
    println!();

    // Creature status table
    println!("  {}", "Creature Status".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Creature",
        "State",
        "Position",
        "Direction",
        "Upside down",
    ]);
    for id in &creatures {
        let Some(entity) = world.get(id) else { continue };
        table.add_row(vec![
            id.to_string(),
            state_label(entity.state()),
            format!(
                "({:.1}, {:.1})",
                entity.frame.origin.x, entity.frame.origin.y
            ),
            format!("({:.1}, {:.1})", entity.direction.dx, entity.direction.dy),
            if entity.is_upside_down { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

fn state_label(state: &EntityState) -> String {
    match state {
        EntityState::Idle => "idle".normal().to_string(),
        EntityState::Move => "move".green().to_string(),
        EntityState::FreeFall => "free-fall".yellow().to_string(),
        EntityState::Drag => "drag".cyan().to_string(),
        EntityState::Action(animation) => format!("action:{}", animation.id.magenta()),
    }
}
