// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Aislemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Aislemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::animation::AnimationState;
use crate::model::{
    Product, ProductId, SectionId, Store, WalkArea, Waypoint, DEFAULT_USER_LOCATION, STORE_WIDTH,
};
use crate::query::{find_product_by_id, find_section};
use crate::render::{render_scene, render_text, CanvasError, DrawCommand, MapStyle, Scene};
use crate::route::{build_path, build_steps, NavigationStep, Path, RouteOptions};

/// Inputs the map reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// One animation timer period elapsed.
    Tick,
    /// The drawable area changed; width in device units (pixels, braille dots, cells).
    Resize { available_width: u32 },
    /// `None` clears the selection.
    Select(Option<ProductId>),
    /// Relative move, clamped to the walkable interior.
    MoveUser { dx: f64, dy: f64 },
    SetUserLocation(Waypoint),
    Mount,
    Unmount,
}

/// Single owner of everything the map frame depends on.
///
/// Highlight, path and steps are derived together from the selection and the user location, so
/// they can never disagree with each other.
#[derive(Debug, Clone)]
pub struct MapState<'s> {
    store: &'s Store,
    route_options: RouteOptions,
    animation: AnimationState,
    scale: f64,
    user_location: Waypoint,
    selection: Option<&'s Product>,
    highlight: Option<SectionId>,
    path: Path,
    steps: Vec<NavigationStep>,
    mounted: bool,
}

impl<'s> MapState<'s> {
    pub fn new(store: &'s Store, route_options: RouteOptions) -> Self {
        Self {
            store,
            route_options,
            animation: AnimationState::default(),
            scale: 1.0,
            user_location: DEFAULT_USER_LOCATION,
            selection: None,
            highlight: None,
            path: Path::new(),
            steps: Vec::new(),
            mounted: false,
        }
    }

    pub fn store(&self) -> &'s Store {
        self.store
    }

    pub fn route_options(&self) -> RouteOptions {
        self.route_options
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn user_location(&self) -> Waypoint {
        self.user_location
    }

    pub fn selection(&self) -> Option<&'s Product> {
        self.selection
    }

    pub fn highlight(&self) -> Option<&SectionId> {
        self.highlight.as_ref()
    }

    pub fn path(&self) -> &[Waypoint] {
        &self.path
    }

    pub fn steps(&self) -> &[NavigationStep] {
        &self.steps
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies one event and reports whether the map needs a redraw.
    pub fn apply(&mut self, event: MapEvent) -> bool {
        match event {
            MapEvent::Tick => {
                self.animation.tick();
                true
            }
            MapEvent::Resize { available_width } => {
                let scale = f64::from(available_width).min(STORE_WIDTH) / STORE_WIDTH;
                let changed = scale != self.scale;
                self.scale = scale;
                changed
            }
            MapEvent::Select(id) => {
                let selection = id.and_then(|id| {
                    let product = find_product_by_id(self.store, id.as_str());
                    if product.is_none() {
                        log::warn!("cannot select unknown product {id}");
                    }
                    product
                });
                if let Some(product) = selection {
                    log::debug!("selected {} ({})", product.id(), product.name());
                }
                self.selection = selection;
                self.recompute_route();
                true
            }
            MapEvent::MoveUser { dx, dy } => {
                let target = Waypoint::new(self.user_location.x + dx, self.user_location.y + dy);
                self.move_user(WalkArea::INTERIOR.clamp(target))
            }
            MapEvent::SetUserLocation(location) => self.move_user(location),
            MapEvent::Mount => {
                let changed = !self.mounted;
                self.mounted = true;
                changed
            }
            MapEvent::Unmount => {
                self.mounted = false;
                false
            }
        }
    }

    fn move_user(&mut self, location: Waypoint) -> bool {
        if location == self.user_location {
            return false;
        }
        self.user_location = location;
        self.recompute_route();
        true
    }

    /// Re-derives highlight, path and steps; restarts the draw-in when a route is active.
    fn recompute_route(&mut self) {
        self.highlight = None;
        self.path.clear();
        self.steps.clear();

        let Some(product) = self.selection else {
            return;
        };
        let Some(section) = find_section(self.store, product.category()) else {
            log::warn!(
                "no section for category {:?} of product {}",
                product.category(),
                product.id()
            );
            return;
        };

        self.highlight = Some(section.id().clone());
        self.path = build_path(self.store, self.user_location, product, self.route_options);
        self.steps = build_steps(&self.path, product);
        self.animation.reset();
        log::debug!(
            "route to {} via {} waypoint(s), {} step(s)",
            product.id(),
            self.path.len(),
            self.steps.len()
        );
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            sections: self.store.sections(),
            highlight: self.highlight.as_ref(),
            path: &self.path,
            destination_label: self.selection.map(Product::name),
            animation: self.animation,
            user_location: self.user_location,
        }
    }

    /// Jumps to `frame` of the animation cycle.
    pub fn seek(&mut self, frame: u32) {
        self.animation = AnimationState::at(frame);
    }

    /// Draw commands for the current frame, or `None` while there is no surface to draw on.
    pub fn frame_commands(&self, style: &MapStyle) -> Option<Vec<DrawCommand>> {
        if !self.mounted || self.scale <= 0.0 {
            return None;
        }
        Some(render_scene(&self.scene(), style))
    }
}

/// One still frame of the map as text, routed from `user_location` to `product` when given.
pub fn render_still(
    store: &Store,
    style: &MapStyle,
    user_location: Waypoint,
    product: Option<ProductId>,
    frame: u32,
    cols: usize,
    rows: usize,
) -> Result<String, CanvasError> {
    let mut state = MapState::new(store, style.route_options());
    state.apply(MapEvent::Mount);
    state.apply(MapEvent::Resize {
        available_width: u32::try_from(cols).unwrap_or(u32::MAX),
    });
    state.apply(MapEvent::SetUserLocation(user_location));
    state.apply(MapEvent::Select(product));
    state.seek(frame);

    match state.frame_commands(style) {
        Some(commands) => render_text(&commands, cols, rows),
        None => Ok(String::new()),
    }
}
