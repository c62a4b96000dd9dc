// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::command::{DrawCommand, Font, Rgba, Stroke};
use super::style::MapStyle;
use crate::map::AnimationState;
use crate::model::{Section, SectionId, Waypoint, STORE_HEIGHT, STORE_WIDTH};

/// Everything one frame of the store map depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub sections: &'a [Section],
    pub highlight: Option<&'a SectionId>,
    pub path: &'a [Waypoint],
    pub destination_label: Option<&'a str>,
    pub animation: AnimationState,
    pub user_location: Waypoint,
}

/// Renders a full frame, back to front.
///
/// Order: background, grid, sections (glow, body, border, label), route, user marker. The route
/// is only drawn while a section is highlighted.
pub fn render_scene(scene: &Scene<'_>, style: &MapStyle) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(64);

    out.push(DrawCommand::Clear {
        background: style.background,
    });
    push_grid(&mut out, style);

    for section in scene.sections {
        let highlighted = scene.highlight.is_some_and(|id| id == section.id());
        push_section(&mut out, section, highlighted, scene.animation, style);
    }

    if scene.highlight.is_some() && !scene.path.is_empty() {
        push_route(&mut out, scene, style);
    }

    push_user_marker(&mut out, scene.user_location, scene.animation, style);
    out
}

fn push_grid(out: &mut Vec<DrawCommand>, style: &MapStyle) {
    if style.grid_spacing <= 0.0 {
        return;
    }
    let stroke = Stroke::solid(style.grid, 1.0);

    let mut x = 0.0;
    while x < STORE_WIDTH {
        out.push(DrawCommand::Line {
            from: Waypoint::new(x, 0.0),
            to: Waypoint::new(x, STORE_HEIGHT),
            stroke,
        });
        x += style.grid_spacing;
    }

    let mut y = 0.0;
    while y < STORE_HEIGHT {
        out.push(DrawCommand::Line {
            from: Waypoint::new(0.0, y),
            to: Waypoint::new(STORE_WIDTH, y),
            stroke,
        });
        y += style.grid_spacing;
    }
}

fn push_section(
    out: &mut Vec<DrawCommand>,
    section: &Section,
    highlighted: bool,
    animation: AnimationState,
    style: &MapStyle,
) {
    let bounds = *section.bounds();
    let center = bounds.centroid();

    let fill = if highlighted {
        let glow_color = section.color().unwrap_or(style.section_fill);
        out.push(DrawCommand::Glow {
            center,
            radius_x: bounds.width * style.glow_spread,
            radius_y: bounds.height * style.glow_spread,
            color: Rgba::opaque(glow_color).with_alpha(style.glow_alpha * animation.section_pulse()),
        });
        section.color().unwrap_or(style.highlight_fill)
    } else {
        section.color().unwrap_or(style.section_fill)
    };

    out.push(DrawCommand::FillRect {
        bounds,
        color: Rgba::opaque(fill).with_alpha(style.section_opacity),
    });
    out.push(DrawCommand::StrokeRect {
        bounds,
        stroke: Stroke::solid(
            Rgba::opaque(section.color().unwrap_or(style.section_border)),
            if highlighted { 2.0 } else { 1.0 },
        ),
    });
    out.push(DrawCommand::Text {
        at: center,
        text: section.name().to_owned(),
        font: Font {
            size: style.label_font_size,
            bold: false,
        },
        color: Rgba::opaque(style.label),
    });
}

/// Waypoints visible at the current draw-in progress.
///
/// Only the first leg is interpolated; the remaining legs join once the first one is complete.
pub fn visible_path(path: &[Waypoint], animation: AnimationState) -> Vec<Waypoint> {
    let Some(&origin) = path.first() else {
        return Vec::new();
    };
    let Some(&first_leg_end) = path.get(1) else {
        return vec![origin];
    };

    let progress = animation.path_progress();
    let mut points = vec![origin, origin.lerp(first_leg_end, progress)];
    if animation.path_complete() {
        points.extend_from_slice(&path[2..]);
    }
    points
}

fn push_route(out: &mut Vec<DrawCommand>, scene: &Scene<'_>, style: &MapStyle) {
    let points = visible_path(scene.path, scene.animation);
    let path_color = Rgba::opaque(style.path);

    out.push(DrawCommand::Polyline {
        points: points.clone(),
        stroke: Stroke {
            color: path_color.with_alpha(style.path_glow_alpha),
            width: style.path_glow_width,
            dash: Some(style.path_dash),
        },
    });
    out.push(DrawCommand::Polyline {
        points: points.clone(),
        stroke: Stroke {
            color: path_color,
            width: style.path_width,
            dash: Some(style.path_dash),
        },
    });

    if style.arrows {
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.distance_to(to) < style.arrow_size {
                continue;
            }
            out.push(DrawCommand::Arrow {
                at: from.midpoint(to),
                heading_degrees: from.heading_degrees_to(to),
                size: style.arrow_size,
                color: path_color,
            });
        }
    }

    if !scene.animation.path_complete() {
        return;
    }
    let Some(&destination) = scene.path.last() else {
        return;
    };
    let radius = scene.animation.marker_radius(style.destination_radius);
    out.push(DrawCommand::Disc {
        center: destination,
        radius,
        color: path_color.with_alpha(style.destination_alpha),
    });
    if let Some(label) = scene.destination_label {
        out.push(DrawCommand::Text {
            at: Waypoint::new(destination.x, destination.y - radius - 8.0),
            text: label.to_owned(),
            font: Font {
                size: 12,
                bold: true,
            },
            color: path_color,
        });
    }
}

fn push_user_marker(
    out: &mut Vec<DrawCommand>,
    at: Waypoint,
    animation: AnimationState,
    style: &MapStyle,
) {
    let radius = animation.marker_radius(style.user_radius);
    let color = Rgba::opaque(style.user);

    out.push(DrawCommand::Glow {
        center: at,
        radius_x: radius * 2.0,
        radius_y: radius * 2.0,
        color: color.with_alpha(0.7),
    });
    out.push(DrawCommand::Disc {
        center: at,
        radius: radius * 0.6,
        color,
    });
    out.push(DrawCommand::Text {
        at: Waypoint::new(at.x, at.y - 15.0),
        text: style.user_label.clone(),
        font: Font {
            size: 12,
            bold: true,
        },
        color,
    });
}

#[cfg(test)]
mod tests {
    use super::{render_scene, visible_path, Scene};
    use crate::map::AnimationState;
    use crate::model::{section_id, Store, Waypoint};
    use crate::render::command::DrawCommand;
    use crate::render::style::MapStyle;

    fn path() -> Vec<Waypoint> {
        vec![
            Waypoint::new(100.0, 250.0),
            Waypoint::new(40.0, 510.0),
            Waypoint::new(150.0, 150.0),
        ]
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn idle_scene_draws_grid_sections_and_user_only() {
        let store = Store::builtin();
        let scene = Scene {
            sections: store.sections(),
            highlight: None,
            path: &[],
            destination_label: None,
            animation: AnimationState::default(),
            user_location: Waypoint::new(100.0, 250.0),
        };
        let commands = render_scene(&scene, &MapStyle::default());

        assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));
        let grid_lines = commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count();
        assert_eq!(grid_lines, 20 + 12);
        assert!(!commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Polyline { .. })));
        let labels = texts(&commands);
        assert_eq!(labels.len(), store.sections().len() + 1);
        assert_eq!(labels.last(), Some(&"You are here"));
    }

    #[test]
    fn highlighted_section_glows_before_its_body() {
        let store = Store::builtin();
        let highlight = section_id("Produce");
        let scene = Scene {
            sections: store.sections(),
            highlight: Some(&highlight),
            path: &[],
            destination_label: None,
            animation: AnimationState::default(),
            user_location: Waypoint::new(500.0, 300.0),
        };
        let commands = render_scene(&scene, &MapStyle::default());

        let produce_center = Waypoint::new(150.0, 150.0);
        let glow_idx = commands
            .iter()
            .position(|command| {
                matches!(command, DrawCommand::Glow { center, .. } if *center == produce_center)
            })
            .expect("section glow");
        match &commands[glow_idx + 1] {
            DrawCommand::FillRect { bounds, .. } => assert_eq!(bounds.centroid(), produce_center),
            other => panic!("expected section body after glow, got {other:?}"),
        }
        match &commands[glow_idx + 2] {
            DrawCommand::StrokeRect { stroke, .. } => assert_eq!(stroke.width, 2.0),
            other => panic!("expected border, got {other:?}"),
        }
        // Highlight without a path draws no route.
        assert!(!commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Polyline { .. })));
    }

    #[test]
    fn path_without_highlight_is_not_drawn() {
        let store = Store::builtin();
        let path = path();
        let scene = Scene {
            sections: store.sections(),
            highlight: None,
            path: &path,
            destination_label: None,
            animation: AnimationState::at(40),
            user_location: path[0],
        };
        let commands = render_scene(&scene, &MapStyle::default());
        assert!(!commands
            .iter()
            .any(|command| matches!(command, DrawCommand::Polyline { .. })));
    }

    #[test]
    fn draw_in_interpolates_first_leg_only() {
        let path = path();
        assert_eq!(
            visible_path(&path, AnimationState::at(0)),
            [path[0], path[0]]
        );
        assert_eq!(
            visible_path(&path, AnimationState::at(15)),
            [path[0], Waypoint::new(70.0, 380.0)]
        );
        assert_eq!(visible_path(&path, AnimationState::at(30)), path);
        assert_eq!(visible_path(&path, AnimationState::at(59)), path);
        assert!(visible_path(&[], AnimationState::at(30)).is_empty());
    }

    #[test]
    fn destination_marker_appears_once_path_is_drawn() {
        let store = Store::builtin();
        let highlight = section_id("Produce");
        let path = path();
        let style = MapStyle::default();
        let scene_at = |frame: u32| Scene {
            sections: store.sections(),
            highlight: Some(&highlight),
            path: &path,
            destination_label: Some("Organic Apples"),
            animation: AnimationState::at(frame),
            user_location: path[0],
        };

        let early = render_scene(&scene_at(10), &style);
        assert!(!texts(&early).contains(&"Organic Apples"));

        let done = render_scene(&scene_at(30), &style);
        assert!(texts(&done).contains(&"Organic Apples"));
        assert!(done.iter().any(|command| matches!(
            command,
            DrawCommand::Disc { center, .. } if *center == Waypoint::new(150.0, 150.0)
        )));

        let polylines = done
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Polyline { stroke, .. } => Some(stroke.width),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(polylines, [style.path_glow_width, style.path_width]);
    }

    #[test]
    fn arrows_follow_style_flag() {
        let store = Store::builtin();
        let highlight = section_id("Produce");
        let path = path();
        let scene = Scene {
            sections: store.sections(),
            highlight: Some(&highlight),
            path: &path,
            destination_label: None,
            animation: AnimationState::at(45),
            user_location: path[0],
        };

        let arrows = |style: &MapStyle| {
            render_scene(&scene, style)
                .iter()
                .filter(|command| matches!(command, DrawCommand::Arrow { .. }))
                .count()
        };
        assert_eq!(arrows(&MapStyle::default()), 2);
        assert_eq!(arrows(&MapStyle::minimal()), 0);
    }
}
