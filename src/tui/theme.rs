// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::model::Rgb;

const PALETTE_ENV: &str = "AISLEMAP_PALETTE";

/// Chrome colors for panels, lists and the footer. The map itself keeps its own neon colors.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = match env::var(PALETTE_ENV) {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(TuiPalette::parse_csv(value.trim()).map_err(|error| {
                ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: format!("{} ({error})", value.trim()),
                }
            })?),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        };
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color as usize],
            None => color.into(),
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.ansi_color(Ansi16::BrightCyan))
        } else {
            self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn dim_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::BrightYellow))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::Cyan))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Red))
    }

    pub(crate) fn success_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightGreen))
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg, then the 16 ANSI colors), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(&parts[2..]) {
            *slot = parse_palette_color(part)?;
        }

        Ok(Self {
            fg: parse_palette_color(parts[0])?,
            bg: parse_palette_color(parts[1])?,
            ansi,
        })
    }
}

/// Accepts `#rrggbb`, `0xrrggbb`, bare `rrggbb` and X11 `rgb:rr/gg/bb` (2 or 4 hex digits).
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty color".to_owned());
    }

    if let Some(rest) = value.to_ascii_lowercase().strip_prefix("rgb:") {
        let channels = rest
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels[..] else {
            return Err(format!("invalid rgb: value: {value}"));
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let rgb = Rgb::from_hex(hex)
        .ok_or_else(|| format!("invalid hex color: {value} (expected #RRGGBB)"))?;
    Ok(Color::Rgb(rgb.r, rgb.g, rgb.b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|wide| (wide >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!(
            "invalid rgb: component {value} (expected 2 or 4 hex digits)"
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;
    use rstest::rstest;

    use super::{parse_palette_color, TuiPalette};

    #[test]
    fn palette_parses_eighteen_colors() {
        let palette = TuiPalette::parse_csv(
            "#111111,#222222,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,#fefefe",
        )
        .expect("palette");

        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi[1], Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi[15], Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_rejects_wrong_count() {
        let err = TuiPalette::parse_csv("#000000").unwrap_err();
        assert!(err.contains("expected 18"));
    }

    #[rstest]
    #[case("#0affe9", Some(Color::Rgb(0x0a, 0xff, 0xe9)))]
    #[case("0xF6FA70", Some(Color::Rgb(0xf6, 0xfa, 0x70)))]
    #[case("rgb:ff/80/00", Some(Color::Rgb(0xff, 0x80, 0x00)))]
    #[case("rgb:ffff/0000/8080", Some(Color::Rgb(0xff, 0x00, 0x80)))]
    #[case("rgb:ff/80", None)]
    #[case("#12345", None)]
    fn parses_palette_colors(#[case] value: &str, #[case] expected: Option<Color>) {
        assert_eq!(parse_palette_color(value).ok(), expected);
    }
}
