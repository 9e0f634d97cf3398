use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use getier_core::{Hotspot, Rect, World};

/// Build a world with the given bounds and print where its boundary
/// sentinels ended up.
pub fn run(width: f64, height: f64) -> Result<(), String> {
    if width <= 0.0 || height <= 0.0 {
        return Err("world bounds must be nonzero".into());
    }

    let world = World::new(Rect::new(0.0, 0.0, width, height));

    println!(
        "  {} {}",
        "World Layout".bold(),
        format!("({width}x{height})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Sentinel", "Origin", "Size"]);
    for entity in world.entities().iter().filter(|e| Hotspot::is_bound(&e.id)) {
        table.add_row(vec![
            entity.id.to_string(),
            format!(
                "({:.0}, {:.0})",
                entity.frame.origin.x, entity.frame.origin.y
            ),
            format!("{:.0} x {:.0}", entity.frame.width(), entity.frame.height()),
        ]);
    }
    println!("{table}");

    Ok(())
}
