use crate::geometry::{Placement, HOUSE};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    DynamicImage, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

/// #2196F3
pub const BRAND_BLUE: Rgba<u8> = Rgba([33, 150, 243, 255]);
pub const GLYPH_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub const ANDROID_RES_DIR: &str = "app/src/main/res";

/// Launcher icon size per Android density bucket
pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

pub const LAUNCHER_FILE: &str = "ic_launcher.png";
pub const LAUNCHER_ROUND_FILE: &str = "ic_launcher_round.png";

pub const STORE_ICON_SIZE: u32 = 512;
pub const STORE_ICON_FILE: &str = "App_Icon.png";

pub const FEATURE_GRAPHIC_WIDTH: u32 = 1024;
pub const FEATURE_GRAPHIC_HEIGHT: u32 = 500;
pub const FEATURE_ICON_SIZE: u32 = 300;
pub const FEATURE_GRAPHIC_FILE: &str = "feature_graphic_1024x500.png";

/// Background shape drawn behind the house glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Fills the whole canvas
    Square,
    /// Circle inscribed in the canvas; the corners stay transparent
    Circle,
}

/// Generate every launcher icon, the store icon and the feature graphic
/// under `out_dir`.
///
/// Runs sequentially and stops at the first failure. Files written before
/// the failure are left in place.
pub fn generate_all(out_dir: &Path) -> Result<()> {
    generate_android_icons(out_dir)?;
    generate_store_icon(out_dir)?;
    generate_feature_graphic(out_dir)?;

    println!("Done.");
    Ok(())
}

fn generate_android_icons(out_dir: &Path) -> Result<()> {
    println!("Generating Android launcher icons...");
    let res_dir = out_dir.join(ANDROID_RES_DIR);

    for (density, size) in ANDROID_DENSITIES {
        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));

        render_icon(size, &mipmap_dir.join(LAUNCHER_FILE), Shape::Square)?;
        render_icon(size, &mipmap_dir.join(LAUNCHER_ROUND_FILE), Shape::Circle)?;
    }

    Ok(())
}

fn generate_store_icon(out_dir: &Path) -> Result<()> {
    println!("Generating store icon...");
    render_icon(
        STORE_ICON_SIZE,
        &out_dir.join(STORE_ICON_FILE),
        Shape::Square,
    )
}

fn generate_feature_graphic(out_dir: &Path) -> Result<()> {
    println!("Generating feature graphic...");
    render_feature_graphic(&out_dir.join(FEATURE_GRAPHIC_FILE))
}

/// Render a `size` x `size` icon: a blue background shape with the white
/// house glyph inside 25% padding, written as an RGBA PNG.
pub fn render_icon(size: u32, output_path: &Path, shape: Shape) -> Result<()> {
    let icon = draw_icon(size, shape)
        .with_context(|| format!("Can't draw {}", output_path.display()))?;

    save_png(&DynamicImage::ImageRgba8(icon), output_path)?;
    println!("  ✓ Generated {}", output_path.display());
    Ok(())
}

/// Render the 1024x500 banner: opaque blue with a 300 px house centered on
/// it, written as an RGB PNG.
pub fn render_feature_graphic(output_path: &Path) -> Result<()> {
    let banner = draw_feature_graphic()?;

    // The banner has no transparent pixels, drop the alpha channel
    let banner = DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(banner).into_rgb8());
    save_png(&banner, output_path)?;
    println!("  ✓ Generated {}", output_path.display());
    Ok(())
}

/// Draw an icon in memory, anti-aliased, with straight (not premultiplied)
/// alpha.
pub fn draw_icon(size: u32, shape: Shape) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size)
        .with_context(|| format!("Icon size must be positive (got {size})"))?;

    match shape {
        Shape::Square => pixmap.fill(skia_color(BRAND_BLUE)),
        Shape::Circle => {
            let radius = size as f32 / 2.0;
            let circle = PathBuilder::from_circle(radius, radius, radius)
                .context("Can't build the round background")?;
            fill_path(&mut pixmap, &circle, BRAND_BLUE);
        }
    }

    let house = house_path(&Placement::padded(size))?;
    fill_path(&mut pixmap, &house, GLYPH_WHITE);

    pixmap_to_rgba(&pixmap)
}

/// Draw the feature graphic banner in memory
pub fn draw_feature_graphic() -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(FEATURE_GRAPHIC_WIDTH, FEATURE_GRAPHIC_HEIGHT)
        .context("Can't allocate the feature graphic canvas")?;
    pixmap.fill(skia_color(BRAND_BLUE));

    let placement = Placement::centered(
        FEATURE_GRAPHIC_WIDTH,
        FEATURE_GRAPHIC_HEIGHT,
        FEATURE_ICON_SIZE,
    );
    let house = house_path(&placement)?;
    fill_path(&mut pixmap, &house, GLYPH_WHITE);

    pixmap_to_rgba(&pixmap)
}

/// Closed outline of the house mapped through `placement`
fn house_path(placement: &Placement) -> Result<tiny_skia::Path> {
    let points = placement.place(&HOUSE);
    let (first, rest) = points
        .split_first()
        .context("House outline has no vertices")?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.close();

    pb.finish().context("Can't build the house outline")
}

fn fill_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, color: Rgba<u8>) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;

    pixmap.fill_path(path, &paint, FillRule::EvenOdd, Transform::identity(), None);
}

fn skia_color(color: Rgba<u8>) -> Color {
    Color::from_rgba8(color[0], color[1], color[2], color[3])
}

// tiny-skia stores premultiplied alpha, PNG wants straight alpha
fn pixmap_to_rgba(pixmap: &Pixmap) -> Result<RgbaImage> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .context("Pixmap size does not match its pixel data")
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Can't create directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Maximum compression. Same input always yields the same bytes.
fn write_png<W: Write>(image: &DynamicImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_bytes(), image.width(), image.height(), image.color())?;
    Ok(())
}
