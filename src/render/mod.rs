// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Map rendering.
//!
//! [`render_scene`] turns the current map state into an ordered list of [`DrawCommand`]s in
//! store coordinates. Surfaces consume that list: the TUI paints it onto a ratatui canvas and
//! [`render_text`] rasterizes it into a plain character grid for `--print` and MCP.

pub mod ascii;
pub mod canvas;
pub mod command;
pub mod scene;
pub mod style;
mod text;

pub use ascii::{arrow_glyph, render_text, TEXT_COLS_RANGE, TEXT_ROWS_RANGE};
pub use canvas::{Canvas, CanvasError};
pub use command::{DrawCommand, Font, Rgba, Stroke};
pub use scene::{render_scene, visible_path, Scene};
pub use style::{MapStyle, StyleError};
