// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::geometry::Bounds;
use super::ids::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Aisle,
    Checkout,
    Entrance,
    Exit,
    Section,
}

impl SectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aisle => "aisle",
            Self::Checkout => "checkout",
            Self::Entrance => "entrance",
            Self::Exit => "exit",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionKindError {
    value: String,
}

impl fmt::Display for ParseSectionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section kind: {}", self.value)
    }
}

impl std::error::Error for ParseSectionKindError {}

impl FromStr for SectionKind {
    type Err = ParseSectionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aisle" => Ok(Self::Aisle),
            "checkout" => Ok(Self::Checkout),
            "entrance" => Ok(Self::Entrance),
            "exit" => Ok(Self::Exit),
            "section" => Ok(Self::Section),
            other => Err(ParseSectionKindError {
                value: other.to_owned(),
            }),
        }
    }
}

/// 24-bit color as declared in the layout data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named rectangular region of the store floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    name: String,
    kind: SectionKind,
    bounds: Bounds,
    color: Option<Rgb>,
}

impl Section {
    pub fn new(id: SectionId, name: impl Into<String>, kind: SectionKind, bounds: Bounds) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            bounds,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::{Rgb, SectionKind};

    #[test]
    fn rgb_parses_and_formats_hex() {
        let color = Rgb::from_hex("#0affe9").expect("hex");
        assert_eq!(color, Rgb::new(0x0a, 0xff, 0xe9));
        assert_eq!(color.to_string(), "#0affe9");
        assert_eq!(Rgb::from_hex("39ff14"), Some(Rgb::new(0x39, 0xff, 0x14)));
    }

    #[test]
    fn rgb_rejects_bad_hex() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
    }

    #[test]
    fn section_kind_round_trips_labels() {
        for kind in [
            SectionKind::Aisle,
            SectionKind::Checkout,
            SectionKind::Entrance,
            SectionKind::Exit,
            SectionKind::Section,
        ] {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
        assert!("lobby".parse::<SectionKind>().is_err());
    }
}
