//! Utility color palette.
//!
//! Maps `family-shade` names (`blue-600`, `gray-50`) and the bare keywords
//! `white`, `black` and `transparent` to terminal colors.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;

use super::error::StyleError;

const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

const FAMILIES: &[(&str, [u32; 10])] = &[
    (
        "slate",
        [
            0xf8fafc, 0xf1f5f9, 0xe2e8f0, 0xcbd5e1, 0x94a3b8, 0x64748b, 0x475569, 0x334155, 0x1e293b, 0x0f172a,
        ],
    ),
    (
        "gray",
        [
            0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af, 0x6b7280, 0x4b5563, 0x374151, 0x1f2937, 0x111827,
        ],
    ),
    (
        "red",
        [
            0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xf87171, 0xef4444, 0xdc2626, 0xb91c1c, 0x991b1b, 0x7f1d1d,
        ],
    ),
    (
        "orange",
        [
            0xfff7ed, 0xffedd5, 0xfed7aa, 0xfdba74, 0xfb923c, 0xf97316, 0xea580c, 0xc2410c, 0x9a3412, 0x7c2d12,
        ],
    ),
    (
        "yellow",
        [
            0xfefce8, 0xfef9c3, 0xfef08a, 0xfde047, 0xfacc15, 0xeab308, 0xca8a04, 0xa16207, 0x854d0e, 0x713f12,
        ],
    ),
    (
        "green",
        [
            0xf0fdf4, 0xdcfce7, 0xbbf7d0, 0x86efac, 0x4ade80, 0x22c55e, 0x16a34a, 0x15803d, 0x166534, 0x14532d,
        ],
    ),
    (
        "blue",
        [
            0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa, 0x3b82f6, 0x2563eb, 0x1d4ed8, 0x1e40af, 0x1e3a8a,
        ],
    ),
    (
        "purple",
        [
            0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce, 0x6b21a8, 0x581c87,
        ],
    ),
];

static PALETTE: Lazy<HashMap<(&'static str, u16), Color>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (family, values) in FAMILIES {
        for (shade, hex) in SHADES.iter().zip(values.iter()) {
            map.insert((*family, *shade), rgb(*hex));
        }
    }
    map
});

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Look up a palette entry by family and shade.
#[must_use]
pub fn lookup(family: &str, shade: u16) -> Option<Color> {
    PALETTE.get(&(family, shade)).copied()
}

/// Parse a color name as it appears after a utility prefix.
///
/// Returns `Ok(None)` for `transparent`, which clears an inherited color.
pub fn parse_color(name: &str) -> Result<Option<Color>, StyleError> {
    match name {
        "white" => return Ok(Some(Color::Rgb(255, 255, 255))),
        "black" => return Ok(Some(Color::Rgb(0, 0, 0))),
        "transparent" => return Ok(None),
        _ => {}
    }

    let (family, shade) = name
        .rsplit_once('-')
        .ok_or_else(|| StyleError::UnknownColor(name.to_string()))?;
    let shade: u16 = shade
        .parse()
        .map_err(|_| StyleError::UnknownColor(name.to_string()))?;

    lookup(family, shade)
        .map(Some)
        .ok_or_else(|| StyleError::UnknownColor(name.to_string()))
}

/// Whether `name` looks like something [`parse_color`] accepts.
#[must_use]
pub fn is_color(name: &str) -> bool {
    parse_color(name).is_ok()
}
