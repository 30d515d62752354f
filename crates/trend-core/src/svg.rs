// File: crates/trend-core/src/svg.rs
// Summary: SVG serialization of a scene (chart body only; the legend is host-rendered).

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::geometry::path_data;
use crate::scene::{Node, Scene};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Scene {
    /// Serialize to a standalone `<svg>` element with a `0 0 width height` viewBox.
    pub fn to_svg(&self) -> String {
        let mut s = String::new();
        // fmt::Write into a String is infallible; results are ignored below.
        let _ = writeln!(
            s,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" role="img" aria-label="{}">"#,
            self.width,
            self.height,
            escape(self.title)
        );
        for node in &self.nodes {
            match node {
                Node::GridLine { from, to, color, width, dash, opacity } => {
                    let _ = writeln!(
                        s,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-dasharray="{} {}" opacity="{}"/>"#,
                        from.x, from.y, to.x, to.y, color.to_hex(), width, dash[0], dash[1], opacity
                    );
                }
                Node::Polyline { series, points, color, width } => {
                    let _ = writeln!(
                        s,
                        r#"  <path class="{}" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                        series.key(),
                        path_data(points),
                        color.to_hex(),
                        width
                    );
                }
                Node::Marker { series, center, radius, color, opacity, .. } => {
                    let _ = writeln!(
                        s,
                        r#"  <circle class="{}" cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
                        series.key(),
                        center.x,
                        center.y,
                        radius,
                        color.to_hex(),
                        opacity
                    );
                }
                Node::Text { text, at, anchor, color, size, opacity } => {
                    let _ = writeln!(
                        s,
                        r#"  <text x="{}" y="{}" text-anchor="{}" font-size="{}" font-weight="600" fill="{}" fill-opacity="{}" opacity="{}">{}</text>"#,
                        at.x,
                        at.y,
                        anchor.as_svg(),
                        size,
                        color.to_hex(),
                        color.alpha_f(),
                        opacity,
                        escape(text)
                    );
                }
            }
        }
        s.push_str("</svg>\n");
        s
    }

    /// Write [`Scene::to_svg`] to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.to_svg()).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
