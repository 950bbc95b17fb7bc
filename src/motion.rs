//! Timed visual transitions
//!
//! Components never animate themselves. They ask a [`Motion`] provider to
//! begin a transition for an element and read its current progress while
//! drawing. The main loop advances the provider on every tick.

use crate::model::Tab;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Animated element on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Header,
    StatsBar,
    /// Whole content region of a tab
    Content(Tab),
    FeedCard(usize),
    /// Star emphasis after a like
    LikePop(usize),
    RecordRow(usize),
    LeaderRow(usize),
    Sidebar(usize),
    ModalPanel,
}

/// Parameters of one transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub delay: Duration,
}

impl TransitionSpec {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
        }
    }

    pub fn fade_in(duration: Duration) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    pub fn fade_out(duration: Duration) -> Self {
        Self::new(1.0, 0.0, duration)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn starting_at(mut self, from: f32) -> Self {
        self.from = from;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    spec: TransitionSpec,
    started_at: Instant,
    exiting: bool,
}

impl Transition {
    fn finishes_at(&self) -> Instant {
        self.started_at + self.spec.delay + self.spec.duration
    }

    fn is_finished(&self, now: Instant) -> bool {
        now >= self.finishes_at()
    }

    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < self.spec.delay {
            return self.spec.from;
        }
        let running = elapsed - self.spec.delay;
        let t = if self.spec.duration.is_zero() {
            1.0
        } else {
            (running.as_secs_f32() / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        self.spec.from + (self.spec.to - self.spec.from) * ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Capability the view layer animates through
pub trait Motion {
    /// Start an entrance (or any non-exit) transition, replacing one in flight
    fn begin(&mut self, element: ElementId, spec: TransitionSpec);

    /// Start an exit transition; the caller keeps the element mounted until
    /// [`Motion::exit_complete`] reports true
    fn exit(&mut self, element: ElementId, spec: TransitionSpec);

    /// Current value; elements without a transition are fully shown (1.0)
    fn progress(&self, element: ElementId) -> f32;

    /// No transition in flight for the element
    fn is_settled(&self, element: ElementId) -> bool;

    fn is_exiting(&self, element: ElementId) -> bool;

    /// An exit transition was started and has run to its end
    fn exit_complete(&self, element: ElementId) -> bool;

    fn forget(&mut self, element: ElementId);

    fn advance(&mut self, now: Instant);

    fn now(&self) -> Instant;
}

/// Default [`Motion`] provider keeping one transition per element
#[derive(Debug)]
pub struct Timeline {
    now: Instant,
    enabled: bool,
    transitions: HashMap<ElementId, Transition>,
}

impl Timeline {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            enabled: true,
            transitions: HashMap::new(),
        }
    }

    /// Disabled timelines complete every transition instantly
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while any transition is still running
    pub fn is_animating(&self) -> bool {
        self.transitions.values().any(|t| !t.is_finished(self.now))
    }

    fn start(&mut self, element: ElementId, mut spec: TransitionSpec, exiting: bool) {
        if !self.enabled {
            spec.duration = Duration::ZERO;
            spec.delay = Duration::ZERO;
        }
        self.transitions.insert(
            element,
            Transition {
                spec,
                started_at: self.now,
                exiting,
            },
        );
    }
}

impl Motion for Timeline {
    fn begin(&mut self, element: ElementId, spec: TransitionSpec) {
        self.start(element, spec, false);
    }

    fn exit(&mut self, element: ElementId, spec: TransitionSpec) {
        self.start(element, spec, true);
    }

    fn progress(&self, element: ElementId) -> f32 {
        self.transitions
            .get(&element)
            .map(|t| t.value_at(self.now))
            .unwrap_or(1.0)
    }

    fn is_settled(&self, element: ElementId) -> bool {
        self.transitions
            .get(&element)
            .map_or(true, |t| t.is_finished(self.now))
    }

    fn is_exiting(&self, element: ElementId) -> bool {
        self.transitions
            .get(&element)
            .is_some_and(|t| t.exiting && !t.is_finished(self.now))
    }

    fn exit_complete(&self, element: ElementId) -> bool {
        self.transitions
            .get(&element)
            .is_some_and(|t| t.exiting && t.is_finished(self.now))
    }

    fn forget(&mut self, element: ElementId) {
        self.transitions.remove(&element);
    }

    fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    fn now(&self) -> Instant {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn test_unknown_element_is_fully_shown() {
        let timeline = Timeline::new(Instant::now());
        assert_eq!(timeline.progress(ElementId::Header), 1.0);
        assert!(timeline.is_settled(ElementId::Header));
        assert!(!timeline.exit_complete(ElementId::Header));
    }

    #[test]
    fn test_fade_in_progresses_with_easing() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        timeline.begin(ElementId::StatsBar, TransitionSpec::fade_in(MS_100));

        assert_eq!(timeline.progress(ElementId::StatsBar), 0.0);

        timeline.advance(start + Duration::from_millis(50));
        let half = timeline.progress(ElementId::StatsBar);
        // ease-out is ahead of linear at the midpoint
        assert!(half > 0.5 && half < 1.0, "got {half}");
        assert!(!timeline.is_settled(ElementId::StatsBar));

        timeline.advance(start + MS_100);
        assert_eq!(timeline.progress(ElementId::StatsBar), 1.0);
        assert!(timeline.is_settled(ElementId::StatsBar));
    }

    #[test]
    fn test_delay_holds_start_value() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        timeline.begin(
            ElementId::FeedCard(2),
            TransitionSpec::fade_in(MS_100).with_delay(Duration::from_millis(200)),
        );

        timeline.advance(start + Duration::from_millis(150));
        assert_eq!(timeline.progress(ElementId::FeedCard(2)), 0.0);

        timeline.advance(start + Duration::from_millis(300));
        assert_eq!(timeline.progress(ElementId::FeedCard(2)), 1.0);
    }

    #[test]
    fn test_exit_completion() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        let element = ElementId::Content(Tab::Feed);
        timeline.exit(element, TransitionSpec::fade_out(MS_100));

        assert!(timeline.is_exiting(element));
        assert!(!timeline.exit_complete(element));

        timeline.advance(start + MS_100);
        assert!(!timeline.is_exiting(element));
        assert!(timeline.exit_complete(element));
        assert_eq!(timeline.progress(element), 0.0);
    }

    #[test]
    fn test_begin_replaces_exit() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start);
        let element = ElementId::Content(Tab::Leaderboard);
        timeline.exit(element, TransitionSpec::fade_out(MS_100));
        timeline.begin(element, TransitionSpec::fade_in(MS_100));
        assert!(!timeline.is_exiting(element));
    }

    #[test]
    fn test_disabled_timeline_is_instant() {
        let mut timeline = Timeline::new(Instant::now()).with_enabled(false);
        timeline.begin(
            ElementId::ModalPanel,
            TransitionSpec::fade_in(Duration::from_secs(5)).with_delay(Duration::from_secs(1)),
        );
        assert_eq!(timeline.progress(ElementId::ModalPanel), 1.0);
        assert!(!timeline.is_animating());

        timeline.exit(ElementId::ModalPanel, TransitionSpec::fade_out(Duration::from_secs(5)));
        assert!(timeline.exit_complete(ElementId::ModalPanel));
    }

    #[test]
    fn test_advance_never_goes_backwards() {
        let start = Instant::now();
        let mut timeline = Timeline::new(start + MS_100);
        timeline.advance(start);
        assert_eq!(timeline.now(), start + MS_100);
    }
}
