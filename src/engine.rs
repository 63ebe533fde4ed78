use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::config::BoardConfig;
use crate::feed::{FeedError, PostFeed};
use crate::hit::hit_test;
use crate::input::{Button, Gesture, InputState, Modifiers, PinchState, PointerTarget, WheelDelta, ZoomDirection};
use crate::layout::{ColorTheme, theme_for};
use crate::post::Post;
use crate::render;
use crate::scene::{self, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A card was activated. The host opens its detail view.
    PostSelected { post: Post, color: ColorTheme },
    SetCursor(String),
    RenderNeeded,
}

/// Receiver for card activations.
pub trait SelectionSink {
    fn post_selected(&mut self, post: &Post, color: &ColorTheme);
}

impl<F> SelectionSink for F
where
    F: FnMut(&Post, &ColorTheme),
{
    fn post_selected(&mut self, post: &Post, color: &ColorTheme) {
        self(post, color);
    }
}

/// Forward every [`Action::PostSelected`] in `actions` to `sink`, in order.
/// Returns how many selections were delivered.
pub fn dispatch_selection<S: SelectionSink + ?Sized>(actions: &[Action], sink: &mut S) -> usize {
    let mut delivered = 0;
    for action in actions {
        if let Action::PostSelected { post, color } = action {
            sink.post_selected(post, color);
            delivered += 1;
        }
    }
    delivered
}

/// Core engine state: everything that does not need the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Every input goes through [`EngineCore::apply`] (or the `on_*` method it
/// delegates to) and is applied immediately, in call order.
pub struct EngineCore {
    pub feed: PostFeed,
    pub camera: Camera,
    pub input: InputState,
    pub pinch: PinchState,
    pub config: BoardConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a validated config.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            feed: PostFeed::new(config.grid, config.palette.len()),
            camera: config.initial_camera,
            input: InputState::Idle,
            pinch: PinchState::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    /// Swap in a new config. Re-lays out every card and re-clamps the zoom;
    /// the current pan is kept.
    pub fn set_config(&mut self, config: BoardConfig) -> Action {
        self.feed.set_layout(config.grid, config.palette.len());
        self.camera.scale = config.zoom.limits().clamp(self.camera.scale);
        self.config = config;
        Action::RenderNeeded
    }

    // --- Data inputs ---

    /// Replace the displayed posts with a subscription snapshot.
    pub fn load_posts(&mut self, posts: Vec<Post>) -> Action {
        self.feed.replace(posts);
        Action::RenderNeeded
    }

    /// Replace the displayed posts from a JSON array snapshot.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the current posts untouched when the
    /// payload is not an array of posts.
    pub fn load_snapshot_json(&mut self, json: &str) -> Result<Action, serde_json::Error> {
        let posts = Post::parse_snapshot(json)?;
        Ok(self.load_posts(posts))
    }

    /// Record a subscription failure reported by the host.
    pub fn feed_failed(&mut self, error: FeedError) -> Action {
        self.feed.fail(error);
        Action::RenderNeeded
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Input events ---

    /// Apply one input event.
    pub fn apply(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture {
            Gesture::PointerDown { screen, button, target } => self.on_pointer_down(screen, button, target),
            Gesture::PointerMove { screen } => self.on_pointer_move(screen),
            Gesture::PointerUp { screen } => self.on_pointer_up(screen),
            Gesture::PointerLeave => self.on_pointer_leave(),
            Gesture::TouchMove { touches } => self.on_touch_move(&touches),
            Gesture::TouchEnd { remaining } => self.on_touch_end(remaining),
            Gesture::Wheel { delta, modifiers } => self.on_wheel(delta, modifiers),
            Gesture::ZoomButton(direction) => self.on_zoom_button(direction),
        }
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, target: PointerTarget) -> Vec<Action> {
        if button != Button::Primary || target == PointerTarget::Control {
            return Vec::new();
        }

        self.input = match hit_test(screen_pt, &self.camera, &self.feed) {
            Some(hit) => {
                let post_id = self
                    .feed
                    .get(hit.index)
                    .map(|(post, _)| post.id.clone())
                    .unwrap_or_default();
                tracing::debug!(index = hit.index, %post_id, "press on card");
                InputState::Pressing { index: hit.index, post_id, last_screen: screen_pt }
            }
            None => {
                tracing::debug!(x = screen_pt.x, y = screen_pt.y, "pan started");
                InputState::Panning { last_screen: screen_pt }
            }
        };
        vec![Action::SetCursor(CURSOR_GRABBING.into())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let last_screen = match &self.input {
            InputState::Idle => return Vec::new(),
            InputState::Pressing { last_screen, .. } | InputState::Panning { last_screen } => *last_screen,
        };
        if screen_pt == last_screen {
            return Vec::new();
        }
        if matches!(self.input, InputState::Pressing { .. }) {
            tracing::debug!("press moved, pan started");
        }

        self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Vec<Action> {
        self.pinch.reset();
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Pressing { index, post_id, last_screen } => {
                if screen_pt != last_screen {
                    self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                    return vec![Action::SetCursor(CURSOR_GRAB.into()), Action::RenderNeeded];
                }
                let mut actions = vec![Action::SetCursor(CURSOR_GRAB.into())];
                if let Some(action) = self.select(index, &post_id) {
                    actions.push(action);
                }
                actions
            }
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                tracing::debug!(pan_x = self.camera.pan_x, pan_y = self.camera.pan_y, "pan ended");
                vec![Action::SetCursor(CURSOR_GRAB.into()), Action::RenderNeeded]
            }
        }
    }

    /// The pointer left the canvas: drop any press or pan without selecting.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.pinch.reset();
        if !self.input.is_active() {
            return Vec::new();
        }
        tracing::debug!("pointer left, gesture cancelled");
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_GRAB.into())]
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        let Some(delta) = self.pinch.track(touches) else {
            return Vec::new();
        };
        self.camera.zoom_by(delta * self.config.zoom.pinch_sensitivity, self.config.zoom.limits());
        vec![Action::RenderNeeded]
    }

    pub fn on_touch_end(&mut self, remaining: usize) -> Vec<Action> {
        if remaining < 2 {
            self.pinch.reset();
        }
        Vec::new()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.zooms_wheel() {
            self.camera.zoom_by(-delta.dy * self.config.zoom.wheel_sensitivity, self.config.zoom.limits());
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_zoom_button(&mut self, direction: ZoomDirection) -> Vec<Action> {
        let step = match direction {
            ZoomDirection::In => self.config.zoom.button_step,
            ZoomDirection::Out => -self.config.zoom.button_step,
        };
        self.camera.zoom_by(step, self.config.zoom.limits());
        tracing::debug!(scale = self.camera.scale, "zoom button");
        vec![Action::RenderNeeded]
    }

    fn select(&self, index: usize, post_id: &str) -> Option<Action> {
        let Some((post, placement)) = self.feed.get(index) else {
            tracing::debug!(index, "pressed card vanished before release");
            return None;
        };
        if post.id != post_id {
            tracing::debug!(index, "pressed card re-indexed before release");
            return None;
        }
        tracing::debug!(index, post_id, "card activated");
        Some(Action::PostSelected {
            post: post.clone(),
            color: theme_for(&self.config.palette, placement.color_index),
        })
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn post_count(&self) -> usize {
        self.feed.len()
    }

    #[must_use]
    pub fn zoom_percent(&self) -> i64 {
        self.camera.zoom_percent()
    }

    /// The frame to draw for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        scene::build(&self.feed, &self.camera, &self.config.palette)
    }
}

/// The full pinboard engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    sink: Option<Box<dyn SelectionSink>>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self::with_config(canvas, BoardConfig::default())
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: BoardConfig) -> Self {
        Self { canvas, sink: None, core: EngineCore::with_config(config) }
    }

    /// Install the receiver for card activations.
    pub fn set_selection_sink(&mut self, sink: Box<dyn SelectionSink>) {
        self.sink = Some(sink);
    }

    // --- Delegated data inputs ---

    pub fn load_posts(&mut self, posts: Vec<Post>) -> Action {
        self.core.load_posts(posts)
    }

    pub fn feed_failed(&mut self, error: FeedError) -> Action {
        self.core.feed_failed(error)
    }

    /// Record a subscription failure from the host's raw `{ code, message }`
    /// error object. Missing fields read as empty strings.
    pub fn feed_failed_js(&mut self, error: &JsValue) -> Action {
        let field = |name: &str| {
            js_sys::Reflect::get(error, &JsValue::from_str(name))
                .map(|value| value.as_string().unwrap_or_default())
                .unwrap_or_default()
        };
        self.core.feed_failed(FeedError::from_code(&field("code"), field("message")))
    }

    pub fn set_config(&mut self, config: BoardConfig) -> Action {
        self.core.set_config(config)
    }

    // --- Viewport ---

    /// Update viewport dimensions and size the canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    // --- Input events ---

    /// Apply one input event and deliver any selection to the installed sink.
    pub fn handle(&mut self, gesture: Gesture) -> Vec<Action> {
        let actions = self.core.apply(gesture);
        if let Some(sink) = self.sink.as_mut() {
            dispatch_selection(&actions, sink.as_mut());
        }
        actions
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Err(JsValue::from_str("2d context unavailable"));
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
        let scene = self.core.scene();
        render::draw(&ctx, &scene, self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn post_count(&self) -> usize {
        self.core.post_count()
    }

    #[must_use]
    pub fn zoom_percent(&self) -> i64 {
        self.core.zoom_percent()
    }
}
