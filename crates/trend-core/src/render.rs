// File: crates/trend-core/src/render.rs
// Summary: Headless raster backend painting a scene with Skia CPU surfaces (feature `raster`).

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::Point;
use crate::scene::{Anchor, Node, Scene};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixels per scene unit.
    pub scale: f32,
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true }
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RasterOptions) {
    canvas.clear(color(scene.background));
    canvas.save();
    canvas.scale((opts.scale, opts.scale));

    for node in &scene.nodes {
        match node {
            Node::GridLine { from, to, color: c, width, dash, opacity } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(color(*c));
                paint.set_alpha_f(*opacity as f32);
                paint.set_stroke_width(*width as f32);
                paint.set_path_effect(skia::PathEffect::dash(&[dash[0] as f32, dash[1] as f32], 0.0));
                canvas.draw_line(pt(*from), pt(*to), &paint);
            }
            Node::Polyline { points, color: c, width, .. } => {
                let Some((first, rest)) = points.split_first() else { continue };
                let mut path = skia::Path::new();
                path.move_to(pt(*first));
                for p in rest {
                    path.line_to(pt(*p));
                }
                let mut stroke = skia::Paint::default();
                stroke.set_anti_alias(true);
                stroke.set_style(skia::paint::Style::Stroke);
                stroke.set_stroke_width(*width as f32);
                stroke.set_stroke_cap(skia::paint::Cap::Round);
                stroke.set_stroke_join(skia::paint::Join::Round);
                stroke.set_color(color(*c));
                canvas.draw_path(&path, &stroke);
            }
            Node::Marker { center, radius, color: c, opacity, .. } => {
                if *opacity <= 0.0 { continue; }
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_style(skia::paint::Style::Fill);
                fill.set_color(color(*c));
                fill.set_alpha_f(*opacity as f32);
                canvas.draw_circle(pt(*center), *radius as f32, &fill);
            }
            Node::Text { text, at, anchor, color: c, size, opacity } => {
                if !opts.draw_labels || *opacity <= 0.0 { continue; }
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(color(*c));
                paint.set_alpha_f((c.alpha_f() * opacity) as f32);
                let mut font = skia::Font::default();
                font.set_size(*size as f32);
                let (advance, _) = font.measure_str(text, Some(&paint));
                let x = match anchor {
                    Anchor::Start => at.x as f32,
                    Anchor::Middle => at.x as f32 - advance * 0.5,
                    Anchor::End => at.x as f32 - advance,
                };
                canvas.draw_str(text, (x, at.y as f32), &font, &paint);
            }
        }
    }
    canvas.restore();
}

fn raster_surface(scene: &Scene, opts: &RasterOptions) -> Result<skia::Surface> {
    let w = (scene.width as f32 * opts.scale).round().max(1.0) as i32;
    let h = (scene.height as f32 * opts.scale).round().max(1.0) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    paint_scene(surface.canvas(), scene, opts);
    Ok(surface)
}

/// Paint into an RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster_surface(scene, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w, h, row_bytes))
}

/// Paint and encode as PNG.
pub fn render_to_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
    let (pixels, w, h, _) = render_to_rgba8(scene, opts)?;
    let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Paint, encode and write a PNG to `path`.
pub fn render_to_png(scene: &Scene, opts: &RasterOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
