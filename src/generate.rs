use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::RgbaImage;
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut, draw_text_mut, text_size,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::{font, palette};

/// PWA manifest icon sizes, in pixels.
pub const SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Shortcut icons are always 96x96.
const SHORTCUT_SIZE: u32 = 96;

const LABEL: &str = "JIN";

/// App-manifest shortcut actions that get their own icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKind {
    Quickmatch,
    Create,
}

impl ShortcutKind {
    pub const ALL: [ShortcutKind; 2] = [ShortcutKind::Quickmatch, ShortcutKind::Create];

    pub fn name(self) -> &'static str {
        match self {
            ShortcutKind::Quickmatch => "quickmatch",
            ShortcutKind::Create => "create",
        }
    }
}

/// Generate one main app icon: accent circle on the dark background with
/// centered "JIN" text, plus a small AI marker dot on the larger sizes.
pub fn generate_main_icon(size: u32, output_path: &Path, font: &FontVec) -> Result<()> {
    let mut img = RgbaImage::from_pixel(size, size, palette::BACKGROUND);

    let s = size as i32;
    let margin = s / 8;

    // Circle inscribed in the square minus margins
    let radius = (s - 2 * margin) / 2;
    draw_filled_ellipse_mut(&mut img, (s / 2, s / 2), radius, radius, palette::ACCENT);

    // Center the label using its measured bounding box. This matches the
    // measured extents, not the optical baseline center.
    let scale = PxScale::from(size as f32 / 4.0);
    let (text_w, text_h) = text_size(scale, font, LABEL);
    let text_x = (s - text_w as i32) / 2;
    let text_y = (s - text_h as i32) / 2;
    draw_text_mut(&mut img, palette::TEXT, text_x, text_y, scale, font, LABEL);

    // Small AI marker dot in the bottom-right quadrant
    if size >= 128 {
        let dot = s / 8;
        let x = s - dot - margin / 2;
        let y = s - dot - margin / 2;
        draw_filled_ellipse_mut(
            &mut img,
            (x + dot / 2, y + dot / 2),
            dot / 2,
            dot / 2,
            palette::HIGHLIGHT,
        );
    }

    img.save(output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("Generated {} ({}x{})", output_path.display(), size, size);

    Ok(())
}

/// Generate one 96x96 shortcut icon with a simple glyph for the action.
pub fn generate_shortcut_icon(kind: ShortcutKind, output_path: &Path) -> Result<()> {
    let mut img = RgbaImage::from_pixel(SHORTCUT_SIZE, SHORTCUT_SIZE, palette::BACKGROUND);

    match kind {
        ShortcutKind::Quickmatch => {
            // Lightning bolt
            let bolt = [
                (30, 20),
                (50, 20),
                (40, 45),
                (60, 45),
                (35, 76),
                (45, 50),
                (25, 50),
            ]
            .map(|(x, y)| Point::new(x, y));
            draw_polygon_mut(&mut img, &bolt, palette::WARNING);
        }
        ShortcutKind::Create => {
            // Plus sign as two overlapping bars
            draw_filled_rect_mut(&mut img, Rect::at(35, 25).of_size(26, 11), palette::HIGHLIGHT);
            draw_filled_rect_mut(&mut img, Rect::at(45, 15).of_size(6, 66), palette::HIGHLIGHT);
        }
    }

    img.save(output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("Generated {}", output_path.display());

    Ok(())
}

/// Generate the full icon set into `output_dir`, creating it if needed.
pub fn generate_all(output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let font = font::load();

    for &size in &SIZES {
        let path = output_dir.join(format!("icon-{size}x{size}.png"));
        generate_main_icon(size, &path, &font)?;
    }

    for kind in ShortcutKind::ALL {
        let path = output_dir.join(format!("shortcut-{}.png", kind.name()));
        generate_shortcut_icon(kind, &path)?;
    }

    println!("All icons generated successfully!");

    Ok(())
}
