//! Interaction state machine
//!
//! Owns the pan/zoom [`Transform`] and the highlighted cursor value for the
//! lifetime of the chart. Every event is handled synchronously; a later
//! event always overrides the effects of an earlier one.
//!
//! ```text
//! Idle/Hovering --pointer or touch move inside--> Hovering
//! Hovering      --pointer leave / touch end-----> Idle
//! Any           --arrow key (focused)-----------> Hovering
//! Any           --zoom / pan--------------------> Gesturing
//! Gesturing     --gesture end-------------------> Hovering if pointer inside, else Idle
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use bellcurve_stats::{DistributionParams, Domain};

use crate::config::ChartConfig;
use crate::input::{InputEvent, Key};
use crate::labels::value_label;
use crate::mapper::XMapper;
use crate::view::{Transform, Viewport};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// No cursor shown
    #[default]
    Idle,
    /// Cursor shown, from pointer, touch or keyboard
    Hovering,
    /// A pan/zoom gesture is in progress
    Gesturing,
}

/// Highlighted x-value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub data_x: f64,
}

/// Everything the state machine reads but does not own
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    pub params: &'a DistributionParams,
    pub domain: Domain,
    pub viewport: &'a Viewport,
    pub config: &'a ChartConfig,
}

impl InteractionContext<'_> {
    fn mapper(&self, transform: Transform) -> Option<XMapper> {
        XMapper::new(self.domain, self.viewport.plot_width(), transform)
    }

    fn settle(&self, data_x: f64) -> f64 {
        if self.config.cursor.clamp_to_domain {
            self.domain.clamp(data_x)
        } else {
            data_x
        }
    }
}

/// Tooltip content for the cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub data_x: f64,
    pub density: f64,
    pub percentile: f64,
    pub text: String,
}

impl Tooltip {
    pub fn at(data_x: f64, params: &DistributionParams) -> Self {
        let percentile = params.percentile(data_x);
        Self {
            data_x,
            density: params.pdf(data_x),
            percentile,
            text: value_label(data_x, percentile),
        }
    }
}

/// Interaction state: transform, cursor, focus and pointer tracking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interaction {
    mode: InteractionMode,
    transform: Transform,
    cursor: Option<Cursor>,
    pointer_inside: bool,
    focused: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Tooltip for the current cursor, if any
    pub fn tooltip(&self, params: &DistributionParams) -> Option<Tooltip> {
        self.cursor.map(|c| Tooltip::at(c.data_x, params))
    }

    /// Handle one event. Returns `true` when the chart needs a redraw.
    pub fn handle(&mut self, event: &InputEvent, ctx: &InteractionContext<'_>) -> bool {
        let before = self.clone();

        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.hover(*x, *y, ctx)
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => self.leave(),
            InputEvent::Key(key) => self.key(*key, ctx),
            InputEvent::Focus => self.focused = true,
            InputEvent::Blur => self.focused = false,
            InputEvent::Zoom { factor, anchor_x } => {
                if anchor_x.is_finite() && factor.is_finite() {
                    let (anchor, _) = ctx.viewport.to_plot(*anchor_x, 0.0);
                    let (min, max) = (ctx.config.zoom.min_scale, ctx.config.zoom.max_scale);
                    self.transform = self.transform.zoomed_about(anchor, *factor, min, max);
                    self.mode = InteractionMode::Gesturing;
                }
            }
            InputEvent::Pan { dx } => {
                if dx.is_finite() {
                    self.transform = self.transform.panned(*dx);
                    self.mode = InteractionMode::Gesturing;
                }
            }
            InputEvent::GestureEnd => {
                if self.mode == InteractionMode::Gesturing {
                    self.mode = self.resting_mode();
                }
            }
            InputEvent::ResetView => self.transform = Transform::IDENTITY,
        }

        if self.mode != before.mode {
            debug!(from = ?before.mode, to = ?self.mode, "interaction mode changed");
        }
        self.transform != before.transform
            || self.cursor != before.cursor
            || self.mode != before.mode
    }

    /// Re-settle the cursor after the distribution changed
    pub fn params_changed(&mut self, ctx: &InteractionContext<'_>) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.data_x = ctx.settle(cursor.data_x);
        }
    }

    /// Restore the identity transform
    pub fn reset_view(&mut self) {
        self.transform = Transform::IDENTITY;
    }

    fn hover(&mut self, x: f64, y: f64, ctx: &InteractionContext<'_>) {
        if !ctx.viewport.contains(x, y) {
            self.leave();
            return;
        }
        let Some(mapper) = ctx.mapper(self.transform) else {
            return;
        };
        let (px, _) = ctx.viewport.to_plot(x, y);
        self.cursor = Some(Cursor {
            data_x: ctx.settle(mapper.to_data(px)),
        });
        self.pointer_inside = true;
        if self.mode != InteractionMode::Gesturing {
            self.mode = InteractionMode::Hovering;
        }
    }

    fn leave(&mut self) {
        self.pointer_inside = false;
        self.cursor = None;
        if self.mode != InteractionMode::Gesturing {
            self.mode = InteractionMode::Idle;
        }
    }

    fn key(&mut self, key: Key, ctx: &InteractionContext<'_>) {
        if !self.focused {
            return;
        }
        let step = ctx.params.std_dev() * ctx.config.cursor.key_step_fraction;
        let base = self
            .cursor
            .map(|c| c.data_x)
            .unwrap_or_else(|| ctx.params.mean());

        match key {
            Key::Left => self.place(ctx.settle(base - step)),
            Key::Right => self.place(ctx.settle(base + step)),
            Key::Home => self.place(ctx.params.mean()),
            Key::End => self.transform = Transform::IDENTITY,
            Key::Escape => {
                self.cursor = None;
                if self.mode != InteractionMode::Gesturing {
                    self.mode = InteractionMode::Idle;
                }
            }
            Key::Other => {}
        }
    }

    fn place(&mut self, data_x: f64) {
        self.cursor = Some(Cursor { data_x });
        self.mode = InteractionMode::Hovering;
    }

    fn resting_mode(&self) -> InteractionMode {
        if self.pointer_inside && self.cursor.is_some() {
            InteractionMode::Hovering
        } else {
            InteractionMode::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Margins;

    struct Fixture {
        params: DistributionParams,
        viewport: Viewport,
        config: ChartConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                params: DistributionParams::standard(),
                // Plot area 800 px wide starting at x = 0
                viewport: Viewport::new(800.0, 400.0, Margins::default()),
                config: ChartConfig::default(),
            }
        }

        fn ctx(&self) -> InteractionContext<'_> {
            InteractionContext {
                params: &self.params,
                domain: self.params.domain(4.0).unwrap(),
                viewport: &self.viewport,
                config: &self.config,
            }
        }
    }

    #[test]
    fn test_pointer_move_sets_cursor() {
        let fx = Fixture::new();
        let mut state = Interaction::new();

        assert!(state.handle(&InputEvent::PointerMove { x: 500.0, y: 100.0 }, &fx.ctx()));
        assert_eq!(state.mode(), InteractionMode::Hovering);
        assert_eq!(state.cursor(), Some(Cursor { data_x: 1.0 }));

        let tooltip = state.tooltip(&fx.params).unwrap();
        assert_eq!(tooltip.text, "Value: 1.00, Percentile: 84.1%");
    }

    #[test]
    fn test_leave_clears_cursor() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::TouchMove { x: 400.0, y: 100.0 }, &fx.ctx());
        state.handle(&InputEvent::TouchEnd, &fx.ctx());

        assert_eq!(state.mode(), InteractionMode::Idle);
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_move_outside_plot_is_leave() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::PointerMove { x: 400.0, y: 100.0 }, &fx.ctx());
        state.handle(&InputEvent::PointerMove { x: 900.0, y: 100.0 }, &fx.ctx());

        assert_eq!(state.mode(), InteractionMode::Idle);
        assert!(state.cursor().is_none());
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        assert!(!state.handle(&InputEvent::Key(Key::Right), &fx.ctx()));
        assert!(state.cursor().is_none());
    }

    #[test]
    fn test_arrow_steps_tenth_sigma_from_mean() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::Focus, &fx.ctx());

        state.handle(&InputEvent::Key(Key::Right), &fx.ctx());
        assert_eq!(state.cursor(), Some(Cursor { data_x: 0.1 }));
        assert_eq!(state.mode(), InteractionMode::Hovering);

        state.handle(&InputEvent::Key(Key::Left), &fx.ctx());
        state.handle(&InputEvent::Key(Key::Left), &fx.ctx());
        let x = state.cursor().unwrap().data_x;
        assert!((x + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_clamped_to_domain() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::Focus, &fx.ctx());
        for _ in 0..100 {
            state.handle(&InputEvent::Key(Key::Right), &fx.ctx());
        }
        assert_eq!(state.cursor().unwrap().data_x, 4.0);
        assert!(!state.handle(&InputEvent::Key(Key::Right), &fx.ctx()));
    }

    #[test]
    fn test_arrow_unclamped_when_disabled() {
        let mut fx = Fixture::new();
        fx.config.cursor.clamp_to_domain = false;
        let mut state = Interaction::new();
        state.handle(&InputEvent::Focus, &fx.ctx());
        for _ in 0..50 {
            state.handle(&InputEvent::Key(Key::Right), &fx.ctx());
        }
        assert!(state.cursor().unwrap().data_x > 4.5);
    }

    #[test]
    fn test_home_and_escape() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::Focus, &fx.ctx());
        state.handle(&InputEvent::Key(Key::Home), &fx.ctx());
        assert_eq!(state.cursor(), Some(Cursor { data_x: 0.0 }));

        state.handle(&InputEvent::Key(Key::Escape), &fx.ctx());
        assert!(state.cursor().is_none());
        assert_eq!(state.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_zoom_gesture_lifecycle() {
        let fx = Fixture::new();
        let mut state = Interaction::new();

        state.handle(
            &InputEvent::Zoom {
                factor: 2.0,
                anchor_x: 400.0,
            },
            &fx.ctx(),
        );
        assert_eq!(state.mode(), InteractionMode::Gesturing);
        assert_eq!(state.transform(), Transform::new(2.0, -400.0));

        state.handle(&InputEvent::GestureEnd, &fx.ctx());
        assert_eq!(state.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_gesture_end_returns_to_hover_when_inside() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::PointerMove { x: 400.0, y: 10.0 }, &fx.ctx());
        state.handle(&InputEvent::Pan { dx: 30.0 }, &fx.ctx());
        assert_eq!(state.mode(), InteractionMode::Gesturing);

        // Pointer moves during a gesture keep the gesture going
        state.handle(&InputEvent::PointerMove { x: 410.0, y: 10.0 }, &fx.ctx());
        assert_eq!(state.mode(), InteractionMode::Gesturing);

        state.handle(&InputEvent::GestureEnd, &fx.ctx());
        assert_eq!(state.mode(), InteractionMode::Hovering);
    }

    #[test]
    fn test_non_finite_gestures_ignored() {
        let fx = Fixture::new();
        let mut state = Interaction::new();

        let zoom = InputEvent::Zoom {
            factor: 2.0,
            anchor_x: f64::NAN,
        };
        assert!(!state.handle(&zoom, &fx.ctx()));
        assert!(!state.handle(&InputEvent::Pan { dx: f64::INFINITY }, &fx.ctx()));
        assert_eq!(state.transform(), Transform::IDENTITY);
        assert_eq!(state.mode(), InteractionMode::Idle);

        state.handle(&InputEvent::PointerMove { x: 500.0, y: 100.0 }, &fx.ctx());
        assert_eq!(state.cursor(), Some(Cursor { data_x: 1.0 }));
        state.handle(&InputEvent::PointerLeave, &fx.ctx());
        assert!(!state.handle(&InputEvent::GestureEnd, &fx.ctx()));
        assert!(!state.handle(&InputEvent::GestureEnd, &fx.ctx()));
    }

    #[test]
    fn test_zoom_scale_clamped() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        for _ in 0..40 {
            state.handle(
                &InputEvent::Zoom {
                    factor: 1.5,
                    anchor_x: 0.0,
                },
                &fx.ctx(),
            );
        }
        assert_eq!(state.transform().scale, 5.0);
    }

    #[test]
    fn test_cursor_follows_zoom() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(
            &InputEvent::Zoom {
                factor: 2.0,
                anchor_x: 400.0,
            },
            &fx.ctx(),
        );
        state.handle(&InputEvent::PointerMove { x: 800.0, y: 10.0 }, &fx.ctx());
        assert_eq!(state.cursor(), Some(Cursor { data_x: 2.0 }));
    }

    #[test]
    fn test_reset_view() {
        let fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::Pan { dx: 50.0 }, &fx.ctx());
        assert!(state.handle(&InputEvent::ResetView, &fx.ctx()));
        assert!(state.transform().is_identity());
    }

    #[test]
    fn test_params_changed_clamps_cursor() {
        let mut fx = Fixture::new();
        let mut state = Interaction::new();
        state.handle(&InputEvent::PointerMove { x: 780.0, y: 10.0 }, &fx.ctx());

        fx.params = DistributionParams::new(0.0, 0.25).unwrap();
        state.params_changed(&fx.ctx());
        assert_eq!(state.cursor().unwrap().data_x, 1.0);
    }
}
