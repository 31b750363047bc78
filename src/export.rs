//! PNG export of the rendered board.
//!
//! egui delivers screenshots asynchronously: the viewer asks for one with
//! [`request_screenshot`] and writes it out when the `Screenshot` event shows
//! up in a later frame. The screenshot covers the whole viewport, so it is
//! cropped to the chart panel before encoding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::{self, ColorImage};

pub const DEFAULT_FILE_NAME: &str = "yamazumi.png";

/// Ask the user where to save the PNG.
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export chart")
        .set_file_name(DEFAULT_FILE_NAME)
        .add_filter("PNG", &["png"])
        .save_file()
}

pub fn request_screenshot(ctx: &egui::Context) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
}

/// The screenshot delivered this frame, if any.
pub fn take_screenshot(ctx: &egui::Context) -> Option<std::sync::Arc<ColorImage>> {
    ctx.input(|i| {
        i.raw.events.iter().find_map(|e| match e {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    })
}

/// Cut the chart area (`rect`, in points) out of a viewport screenshot.
///
/// The rect is clamped to the image; if nothing of it is on screen the whole
/// image is kept.
pub fn crop_to_rect(image: &ColorImage, rect: egui::Rect, pixels_per_point: f32) -> ColorImage {
    let [width, height] = image.size;
    let bounds = egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(width as f32, height as f32) / pixels_per_point,
    );
    let clipped = rect.intersect(bounds);
    if !clipped.is_positive() {
        return image.clone();
    }
    image.region(&clipped, Some(pixels_per_point))
}

/// Encode an RGBA image as PNG at `path`.
pub fn save_png(image: &ColorImage, path: &Path) -> Result<()> {
    let [width, height] = image.size;
    let bytes: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    image::save_buffer(
        path,
        &bytes,
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {width}x{height} chart to {}", path.display());
    Ok(())
}
