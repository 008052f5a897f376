use anyhow::{Context, Result};
use house_icon_gen::geometry::{Placement, Point};
use house_icon_gen::icon_gen::{BRAND_BLUE, GLYPH_WHITE};
use image::io::Reader as ImageReader;
use image::Rgba;

/// A point inside the left wall of the house, on the logical grid
const WALL: Point = Point::new(7.0, 16.0);
/// A point inside the door notch, which shows the background
const DOOR: Point = Point::new(12.0, 17.0);

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "App_Icon.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .decode()
        .with_context(|| format!("Failed to decode {path}"))?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking house icon in: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    if width != height {
        println!("⚠ Not a square icon, nothing to verify");
        return Ok(());
    }

    let placement = Placement::padded(width);
    let sample = |p: Point| {
        let mapped = placement.apply(p);
        let x = (mapped.x as u32).min(width - 1);
        let y = (mapped.y as u32).min(height - 1);
        (x, y, *rgba_img.get_pixel(x, y))
    };

    let corner = *rgba_img.get_pixel(0, 0);
    let (wall_x, wall_y, wall) = sample(WALL);
    let (door_x, door_y, door) = sample(DOOR);

    println!("\nSamples:");
    println!("  corner (0, 0): {:?}", corner.0);
    println!("  wall ({wall_x}, {wall_y}): {:?}", wall.0);
    println!("  door ({door_x}, {door_y}): {:?}", door.0);

    let shape = match corner {
        c if c == BRAND_BLUE => "square",
        Rgba([_, _, _, 0]) => "round",
        _ => "unknown",
    };
    println!("\nBackground shape: {shape}");

    if wall == GLYPH_WHITE && door == BRAND_BLUE {
        println!("✓ House glyph detected!");
    } else {
        println!("⚠ House glyph not found at the expected position");
    }

    Ok(())
}
