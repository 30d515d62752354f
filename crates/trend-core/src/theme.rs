// File: crates/trend-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, including the per-series palette.

use crate::series::SeriesKind;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        match s.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// `#rrggbb`; alpha is carried separately as an opacity attribute.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn alpha_f(&self) -> f64 { self.a as f64 / 255.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_label: Rgba,
    pub title: Rgba,
    pub pain: Rgba,
    pub bloating: Rgba,
    pub fatigue: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            grid: Rgba::rgb(0xd1, 0xd5, 0xdb),
            axis_label: Rgba::rgba(0x1f, 0x29, 0x37, 178), // foreground at 70%
            title: Rgba::rgb(0x1f, 0x29, 0x37),
            pain: Rgba::rgb(0xef, 0x44, 0x44),
            bloating: Rgba::rgb(0xf5, 0x9e, 0x0b),
            fatigue: Rgba::rgb(0x63, 0x66, 0xf1),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_label: Rgba::rgba(235, 235, 245, 178),
            title: Rgba::rgb(235, 235, 245),
            pain: Rgba::rgb(0xf8, 0x71, 0x71),
            bloating: Rgba::rgb(0xfb, 0xbf, 0x24),
            fatigue: Rgba::rgb(0x81, 0x8c, 0xf8),
        }
    }

    #[inline]
    pub fn series_color(&self, kind: SeriesKind) -> Rgba {
        match kind {
            SeriesKind::Pain => self.pain,
            SeriesKind::Bloating => self.bloating,
            SeriesKind::Fatigue => self.fatigue,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
