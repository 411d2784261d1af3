//! The request/response animation cycle.
//!
//! One cycle: pick a phrase, glide the capsule along the speech path with
//! cosine easing (2200 ms), light the table highlight on arrival (650 ms),
//! rest (900 ms), repeat with a different phrase. A short voice-wave pulse
//! (500 ms) marks the start of each cycle, cleared independently of the main
//! timeline. The whole machine advances from a single external frame source
//! calling [`CycleController::tick`] with `performance.now()`-style
//! timestamps, so tests drive it with synthetic clocks.

use super::curve::{QuadBezier, ease_in_out};
use super::phrases::PhraseSelector;
use super::scene::Scene;

/// Durations of one cycle, in milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct CycleConfig {
    /// Capsule travel time from person to table.
    pub travel_ms: f64,
    /// How long the table highlight stays lit after arrival.
    pub highlight_ms: f64,
    /// Rest between the highlight clearing and the next cycle.
    pub pause_ms: f64,
    /// Voice-wave pulse at the start of a cycle.
    pub waves_ms: f64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            travel_ms: 2200.0,
            highlight_ms: 650.0,
            pause_ms: 900.0,
            waves_ms: 500.0,
        }
    }
}

/// Where the cycle is, with its deadline baked into the value. Replacing the
/// phase replaces the deadline, so a stale highlight-clear can never fire
/// after a later cycle re-activated the highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Before the first cycle; ticks do nothing.
    Idle,
    Traveling { since: f64 },
    Arrived { until: f64 },
    Pausing { until: f64 },
}

/// Drives the looping animation. Owns all cycle timing, the highlight state
/// and the phrase rotation; touches the visuals only through [`Scene`].
pub struct CycleController {
    path: QuadBezier,
    config: CycleConfig,
    selector: PhraseSelector,
    phase: Phase,
    waves_until: Option<f64>,
}

impl CycleController {
    pub fn new(path: QuadBezier, config: CycleConfig, selector: PhraseSelector) -> Self {
        Self {
            path,
            config,
            selector,
            phase: Phase::Idle,
            waves_until: None,
        }
    }

    /// Start the first cycle at `now`. Later cycles chain from [`tick`].
    ///
    /// [`tick`]: CycleController::tick
    pub fn begin(&mut self, now: f64, scene: &mut dyn Scene) {
        self.start_cycle(now, scene);
    }

    fn start_cycle(&mut self, now: f64, scene: &mut dyn Scene) {
        scene.set_phrase(self.selector.pick_next());
        scene.set_highlight(false);
        scene.set_position(self.path.point_at(0.0));
        scene.set_voice_waves(true);
        self.waves_until = Some(now + self.config.waves_ms);
        self.phase = Phase::Traveling { since: now };
    }

    /// Advance the animation to time `now` (same clock as [`begin`]).
    ///
    /// Progress is clamped to [0, 1], so a frame that arrives late (tab
    /// throttling) pins the capsule to the table edge instead of overshooting,
    /// and one dated before the cycle start stays at the person.
    ///
    /// [`begin`]: CycleController::begin
    pub fn tick(&mut self, now: f64, scene: &mut dyn Scene) {
        if let Some(deadline) = self.waves_until {
            if now >= deadline {
                scene.set_voice_waves(false);
                self.waves_until = None;
            }
        }

        match self.phase {
            Phase::Idle => {}
            Phase::Traveling { since } => {
                let progress = ((now - since) / self.config.travel_ms).clamp(0.0, 1.0);
                scene.set_position(self.path.point_at(ease_in_out(progress)));
                if progress >= 1.0 {
                    scene.set_highlight(true);
                    self.phase = Phase::Arrived {
                        until: now + self.config.highlight_ms,
                    };
                }
            }
            Phase::Arrived { until } => {
                if now >= until {
                    scene.set_highlight(false);
                    self.phase = Phase::Pausing {
                        until: now + self.config.pause_ms,
                    };
                }
            }
            Phase::Pausing { until } => {
                if now >= until {
                    self.start_cycle(now, scene);
                }
            }
        }
    }
}

/// Zero-motion rendition for reduced-motion environments: fixed phrase,
/// capsule at the start of the path, highlight off. Callers never start the
/// frame loop in this mode.
pub fn render_static_frame(scene: &mut dyn Scene, path: &QuadBezier) {
    scene.set_phrase(crate::STATIC_PHRASE);
    scene.set_position(path.point_at(0.0));
    scene.set_highlight(false);
}
