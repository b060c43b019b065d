// SPDX-License-Identifier: MPL-2.0
//! The magnifying-glass zoom widget.
//!
//! A thumbnail of the image tracks the pointer with a lens that shows
//! a magnified crop of the full rendering inside itself; double-click
//! toggles between the magnifier (Collapsed) and a full-size view of
//! the image (Expanded).
//!
//! The widget follows the nested-TEA shape used across the crate: a
//! `State` with `Message` and `Effect`, a single `handle()` entry
//! point, and small focused helpers (`geometry`, `fade`, `dblclick`).
//! Because there is exactly one `handle()` and double-click dispatch
//! matches on the current mode, a click can never fire two transitions
//! the way accumulated handlers could in a callback-based UI.

pub mod dblclick;
pub mod fade;
pub mod geometry;
mod view;

use crate::config::{
    Config, DEFAULT_EXPANSION_SIZE, DEFAULT_LENS_SIZE, DEFAULT_SPEED_MULTIPLIER,
    DEFAULT_THUMBNAIL_WIDTH, MAX_EXPANSION_SIZE, MAX_LENS_SIZE, MAX_SPEED_MULTIPLIER,
    MIN_EXPANSION_SIZE, MIN_LENS_SIZE, MIN_SPEED_MULTIPLIER,
};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use dblclick::Detector;
use fade::{Fade, FADE_DURATION, FADE_OUT_FAST};
use iced::{Element, Point, Size, Vector};
use std::time::{Duration, Instant};

/// Fallback frame delta for the first animation tick after an idle
/// period, when no previous tick instant is available.
const FIRST_TICK_DELTA: Duration = Duration::from_millis(16);

/// Interaction mode of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Thumbnail + lens + overlay port visible; pointer-driven
    /// magnification active.
    Collapsed,
    /// Full-size image shown in place of the thumbnail interaction.
    Expanded,
}

/// Options resolved once when the widget is built; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOptions {
    /// Pixel margin outside the thumbnail within which the lens stays
    /// active.
    pub expansion_size: f32,
    /// Scale factor from pointer displacement to large-image panning.
    pub speed_multiplier: f32,
    /// Edge length of the square lens.
    pub lens_size: f32,
    /// Maximum displayed width of the thumbnail.
    pub thumbnail_width: f32,
}

impl ZoomOptions {
    /// Resolves options from a config: omitted values fall back to the
    /// defaults, out-of-range values are clamped.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            expansion_size: config
                .expansion_size
                .unwrap_or(DEFAULT_EXPANSION_SIZE)
                .clamp(MIN_EXPANSION_SIZE, MAX_EXPANSION_SIZE),
            speed_multiplier: config
                .speed_multiplier
                .unwrap_or(DEFAULT_SPEED_MULTIPLIER)
                .clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER),
            lens_size: config
                .lens_size
                .unwrap_or(DEFAULT_LENS_SIZE)
                .clamp(MIN_LENS_SIZE, MAX_LENS_SIZE),
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
        }
    }
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Messages for the zoom widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved. `position` is relative to the thumbnail's
    /// top-left corner; `small` is the thumbnail's current displayed
    /// size, re-read from live widget bounds on every event.
    PointerMoved { position: Point, small: Size },
    /// A click landed on the widget.
    Clicked,
    /// Animation tick while a fade is in flight.
    Tick(Instant),
}

/// Effects the orchestrating application may react to.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The widget toggled between Collapsed and Expanded.
    ModeChanged(Mode),
}

/// Widget state. Owns the mode machine and all region geometry; the
/// decoded image is borrowed into canvas handles by cheap clones.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    options: ZoomOptions,
    media: Option<ImageData>,
    /// Visibility of the lens; in Expanded mode the same element is
    /// the full-size display, so the fade carries over.
    lens_fade: Fade,
    /// Visibility of the overlay port frame around the thumbnail.
    port_fade: Fade,
    dblclick: Detector,
    /// Current lens size.
    lens_size: Size,
    /// Lens size captured when the widget was built. Restored on every
    /// collapse; never overwritten afterwards, so repeated toggles
    /// cannot drift it.
    lens_orig: Size,
    /// Lens top-left corner, in thumbnail coordinates.
    lens_pos: Point,
    /// Offset of the large rendering inside the lens.
    pan: Vector,
    last_tick: Option<Instant>,
}

impl State {
    /// Builds the widget: captures the lens's original dimensions and
    /// enters Collapsed mode.
    #[must_use]
    pub fn new(options: ZoomOptions) -> Self {
        let lens = Size::new(options.lens_size, options.lens_size);
        let mut state = Self {
            mode: Mode::Collapsed,
            options,
            media: None,
            lens_fade: Fade::hidden(),
            port_fade: Fade::hidden(),
            dblclick: Detector::default(),
            lens_size: lens,
            lens_orig: lens,
            lens_pos: Point::ORIGIN,
            pan: Vector::new(0.0, 0.0),
            last_tick: None,
        };
        state.enter_collapsed();
        state
    }

    /// Installs a freshly decoded image and restarts in Collapsed mode.
    pub fn set_media(&mut self, media: ImageData) {
        self.media = Some(media);
        self.lens_fade = Fade::hidden();
        self.pan = Vector::new(0.0, 0.0);
        self.lens_pos = Point::ORIGIN;
        self.enter_collapsed();
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn options(&self) -> ZoomOptions {
        self.options
    }

    /// Target visibility of the lens (true from the instant a fade-in
    /// is requested).
    #[must_use]
    pub fn lens_visible(&self) -> bool {
        self.lens_fade.is_shown()
    }

    #[must_use]
    pub fn lens_position(&self) -> Point {
        self.lens_pos
    }

    #[must_use]
    pub fn lens_size(&self) -> Size {
        self.lens_size
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Displayed size of the thumbnail for the current image.
    #[must_use]
    pub fn small_size(&self) -> Size {
        match &self.media {
            Some(media) => geometry::fit_size(media.natural_size(), self.options.thumbnail_width),
            None => Size::ZERO,
        }
    }

    /// Displayed size of the magnified rendering for a given thumbnail
    /// size. Derived from the live thumbnail rect so layout changes are
    /// picked up on the next event.
    #[must_use]
    pub fn large_size(&self, small: Size) -> Size {
        Size::new(
            small.width * self.options.speed_multiplier,
            small.height * self.options.speed_multiplier,
        )
    }

    /// Whether any fade is mid-flight; gates the tick subscription.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.lens_fade.is_animating() || self.port_fade.is_animating()
    }

    pub(crate) fn lens_alpha(&self) -> f32 {
        self.lens_fade.alpha()
    }

    pub(crate) fn port_alpha(&self) -> f32 {
        self.port_fade.alpha()
    }

    pub(crate) fn media_data(&self) -> Option<&ImageData> {
        self.media.as_ref()
    }

    /// Switches to the magnifier: thumbnail visible, overlay port
    /// fading in, lens restored to its original size and acting as a
    /// clipping lens again.
    pub fn enter_collapsed(&mut self) {
        self.mode = Mode::Collapsed;
        self.port_fade.fade_in(FADE_DURATION);
        self.lens_size = self.lens_orig;
    }

    /// Switches to the full-size view: thumbnail and port hidden (the
    /// port immediately), the lens element fading in as the expanded
    /// display, panning undone.
    pub fn enter_expanded(&mut self) {
        self.mode = Mode::Expanded;
        self.port_fade.hide();
        self.lens_fade.fade_in(FADE_DURATION);
        self.pan = Vector::new(0.0, 0.0);
    }

    /// Handle a widget message.
    ///
    /// Note: Takes `Message` by value following Iced's
    /// `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerMoved { position, small } => {
                if self.mode == Mode::Collapsed {
                    self.on_pointer_move(position, small);
                }
                Effect::None
            }
            Message::Clicked => {
                if self.dblclick.register(Instant::now()) {
                    match self.mode {
                        Mode::Collapsed => self.enter_expanded(),
                        Mode::Expanded => self.enter_collapsed(),
                    }
                    Effect::ModeChanged(self.mode)
                } else {
                    Effect::None
                }
            }
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|t| now.duration_since(t))
                    .unwrap_or(FIRST_TICK_DELTA);
                self.lens_fade.tick(dt);
                self.port_fade.tick(dt);
                self.last_tick = if self.is_animating() { Some(now) } else { None };
                Effect::None
            }
        }
    }

    /// Pointer tracking for Collapsed mode.
    ///
    /// Out-of-zone moves only hide the lens; they never reposition it,
    /// so the lens fades out exactly where the pointer left the zone.
    fn on_pointer_move(&mut self, position: Point, small: Size) {
        let expansion = self.options.expansion_size;

        if !geometry::in_tracking_zone(position, small, expansion) {
            if self.lens_fade.is_shown() {
                self.lens_fade.fade_out(FADE_OUT_FAST);
            }
            return;
        }

        if !self.lens_fade.is_shown() {
            self.lens_fade.fade_in(FADE_DURATION);
        }

        self.lens_pos = geometry::lens_top_left(position, self.lens_size);
        self.pan = geometry::pan_offset(position, self.options.speed_multiplier, self.lens_size);
    }

    /// Renders the widget for the current mode.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(self, i18n)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(ZoomOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> State {
        let mut state = State::new(ZoomOptions {
            expansion_size: 30.0,
            speed_multiplier: 1.5,
            lens_size: 50.0,
            thumbnail_width: 280.0,
        });
        state.set_media(ImageData::from_rgba(4, 4, vec![255; 4 * 4 * 4]));
        state
    }

    const SMALL: Size = Size::new(200.0, 200.0);

    fn move_to(state: &mut State, x: f32, y: f32) {
        state.handle(Message::PointerMoved {
            position: Point::new(x, y),
            small: SMALL,
        });
    }

    #[test]
    fn starts_collapsed_with_hidden_lens() {
        let state = test_state();
        assert_eq!(state.mode(), Mode::Collapsed);
        assert!(!state.lens_visible());
    }

    #[test]
    fn pointer_inside_shows_and_centers_lens() {
        let mut state = test_state();
        move_to(&mut state, 100.0, 100.0);

        assert!(state.lens_visible());
        assert_eq!(state.lens_position(), Point::new(75.0, 75.0));
        assert_eq!(state.pan(), Vector::new(-125.0, -125.0));
    }

    #[test]
    fn pointer_far_outside_hides_without_repositioning() {
        let mut state = test_state();
        move_to(&mut state, 100.0, 100.0);
        let before = state.lens_position();

        move_to(&mut state, 300.0, 100.0);
        assert!(!state.lens_visible());
        assert_eq!(state.lens_position(), before);
        assert_eq!(state.pan(), Vector::new(-125.0, -125.0));
    }

    #[test]
    fn expansion_margin_is_inclusive() {
        let mut state = test_state();
        move_to(&mut state, 230.0, 100.0);
        assert!(state.lens_visible());

        move_to(&mut state, 231.0, 100.0);
        assert!(!state.lens_visible());
    }

    #[test]
    fn out_of_zone_when_already_hidden_is_a_noop() {
        let mut state = test_state();
        let before_alpha = state.lens_alpha();
        move_to(&mut state, 500.0, 500.0);
        assert!(!state.lens_visible());
        assert_eq!(state.lens_alpha(), before_alpha);
    }

    #[test]
    fn double_click_toggles_mode_exactly_once_per_pair() {
        let mut state = test_state();

        assert!(matches!(state.handle(Message::Clicked), Effect::None));
        let effect = state.handle(Message::Clicked);
        assert!(matches!(effect, Effect::ModeChanged(Mode::Expanded)));

        // A third rapid click starts a new sequence instead of toggling back.
        assert!(matches!(state.handle(Message::Clicked), Effect::None));
        assert_eq!(state.mode(), Mode::Expanded);
    }

    #[test]
    fn toggle_restores_original_lens_size() {
        let mut state = test_state();
        let original = state.lens_size();

        state.enter_expanded();
        state.enter_collapsed();
        state.enter_expanded();
        state.enter_collapsed();

        assert_eq!(state.lens_size(), original);
    }

    #[test]
    fn expand_resets_pan_and_hides_port() {
        let mut state = test_state();
        move_to(&mut state, 100.0, 100.0);
        assert_ne!(state.pan(), Vector::new(0.0, 0.0));

        state.enter_expanded();
        assert_eq!(state.pan(), Vector::new(0.0, 0.0));
        assert_eq!(state.port_alpha(), 0.0);
    }

    #[test]
    fn pointer_moves_are_ignored_while_expanded() {
        let mut state = test_state();
        state.enter_expanded();
        let before = state.lens_position();

        move_to(&mut state, 100.0, 100.0);
        assert_eq!(state.lens_position(), before);
        assert_eq!(state.pan(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn ticks_advance_fades_until_rest() {
        let mut state = test_state();
        move_to(&mut state, 100.0, 100.0);
        assert!(state.is_animating());

        let start = Instant::now();
        state.handle(Message::Tick(start));
        state.handle(Message::Tick(start + Duration::from_secs(2)));
        assert!(!state.is_animating());
        assert_eq!(state.lens_alpha(), 1.0);
        assert_eq!(state.port_alpha(), 1.0);
    }

    #[test]
    fn options_resolve_from_config_with_clamping() {
        let config = Config {
            language: None,
            expansion_size: None,
            speed_multiplier: Some(100.0),
            lens_size: Some(5.0),
        };
        let options = ZoomOptions::from_config(&config);
        assert_eq!(options.expansion_size, DEFAULT_EXPANSION_SIZE);
        assert_eq!(options.speed_multiplier, MAX_SPEED_MULTIPLIER);
        assert_eq!(options.lens_size, MIN_LENS_SIZE);
    }

    #[test]
    fn large_size_scales_with_speed() {
        let state = test_state();
        let large = state.large_size(SMALL);
        assert_eq!(large, Size::new(300.0, 300.0));
    }

    #[test]
    fn thumbnail_fits_wide_media() {
        let mut state = test_state();
        state.set_media(ImageData::from_rgba(560, 280, vec![255; 560 * 280 * 4]));
        assert_eq!(state.small_size(), Size::new(280.0, 140.0));
    }
}
