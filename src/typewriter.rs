use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TYPE_DELAY_MS: u64 = 90;
const DEFAULT_PAUSE_MS: u64 = 1400;
const MIN_DELETE_DELAY_MS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub pause: Duration,
}

impl TypewriterConfig {
    /// Deletion runs at half the typing delay, never faster than 20ms per character.
    pub fn new(type_delay_ms: u64, pause_ms: u64) -> Self {
        Self {
            type_delay: Duration::from_millis(type_delay_ms),
            delete_delay: Duration::from_millis(default_delete_delay_ms(type_delay_ms)),
            pause: Duration::from_millis(pause_ms),
        }
    }

    pub fn with_delete_delay(mut self, delete_delay_ms: u64) -> Self {
        self.delete_delay = Duration::from_millis(delete_delay_ms);
        self
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TYPE_DELAY_MS, DEFAULT_PAUSE_MS)
    }
}

fn default_delete_delay_ms(type_delay_ms: u64) -> u64 {
    (type_delay_ms / 2).max(MIN_DELETE_DELAY_MS)
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_type_delay_ms")]
    type_delay_ms: u64,
    delete_delay_ms: Option<u64>,
    #[serde(default = "default_pause_ms")]
    pause_ms: u64,
}

fn default_type_delay_ms() -> u64 {
    DEFAULT_TYPE_DELAY_MS
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

impl<'de> Deserialize<'de> for TypewriterConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        let config = Self::new(raw.type_delay_ms, raw.pause_ms);
        Ok(match raw.delete_delay_ms {
            Some(ms) => config.with_delete_delay(ms),
            None => config,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Deleting,
}

/// Where the session sits in its cycle, and so which delay the next step waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No phrases; nothing is ever scheduled.
    Idle,
    Typing,
    /// Phrase fully typed, dwelling before deletion starts.
    Pausing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct TypingSession {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    direction: Direction,
    config: TypewriterConfig,
}

impl TypingSession {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_count: 0,
            direction: Direction::Typing,
            config,
        }
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_phrase(&self) -> Option<&str> {
        if self.phrases.is_empty() {
            return None;
        }
        Some(&self.phrases[self.phrase_index % self.phrases.len()])
    }

    fn current_len(&self) -> usize {
        self.current_phrase().map_or(0, |p| p.chars().count())
    }

    /// The first `char_count` characters of the current phrase.
    pub fn visible(&self) -> &str {
        let phrase = match self.current_phrase() {
            Some(p) => p,
            None => return "",
        };
        match phrase.char_indices().nth(self.char_count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.phrases.is_empty() {
            return Phase::Idle;
        }
        match self.direction {
            Direction::Typing if self.char_count < self.current_len() => Phase::Typing,
            Direction::Typing => Phase::Pausing,
            Direction::Deleting => Phase::Deleting,
        }
    }

    /// How long to wait before the next `advance`, or `None` when idle.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase() {
            Phase::Idle => None,
            Phase::Typing => Some(self.config.type_delay),
            Phase::Pausing => Some(self.config.pause),
            Phase::Deleting => Some(self.config.delete_delay),
        }
    }

    /// Take one step of the cycle. Returns whether the visible text changed.
    pub fn advance(&mut self) -> bool {
        match self.phase() {
            Phase::Idle => false,
            Phase::Typing => {
                self.char_count += 1;
                true
            }
            Phase::Pausing => {
                self.direction = Direction::Deleting;
                // an empty phrase has nothing to delete
                if self.char_count == 0 {
                    self.next_phrase();
                }
                false
            }
            Phase::Deleting => {
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.next_phrase();
                }
                true
            }
        }
    }

    fn next_phrase(&mut self) {
        self.direction = Direction::Typing;
        self.char_count = 0;
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
    }
}

#[derive(Error, Debug, Clone)]
pub enum TimerError {
    #[error("failed to arm timer: {0}")]
    Arm(String),
}

/// A single-shot timer source. Expiry is reported back to the owning
/// [`Typewriter`] through [`Typewriter::fire`].
pub trait Timer {
    type Handle;

    fn arm(&mut self, delay: Duration) -> Result<Self::Handle, TimerError>;

    /// Must be a no-op for handles that already fired.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Drives a [`TypingSession`] forward with exactly one pending timer at a time.
pub struct Typewriter<T: Timer> {
    session: TypingSession,
    timer: T,
    pending: Option<T::Handle>,
    torn_down: bool,
}

impl<T: Timer> Typewriter<T> {
    pub fn new(session: TypingSession, timer: T) -> Self {
        Self {
            session,
            timer,
            pending: None,
            torn_down: false,
        }
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn visible(&self) -> &str {
        self.session.visible()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn start(&mut self) {
        if self.torn_down || self.pending.is_some() {
            return;
        }
        self.rearm();
    }

    /// Handle expiry of the pending timer. Returns whether the visible text changed.
    pub fn fire(&mut self) -> bool {
        if self.torn_down || self.pending.take().is_none() {
            return false;
        }
        let changed = self.session.advance();
        self.rearm();
        changed
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    fn rearm(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
        let delay = match self.session.next_delay() {
            Some(d) => d,
            None => return,
        };
        match self.timer.arm(delay) {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => log::warn!("typewriter stopped: {e}"),
        }
    }
}

impl<T: Timer> Drop for Typewriter<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        armed: Vec<(u64, Duration)>,
        cancelled: Vec<u64>,
    }

    /// Virtual clock timer; tests drive time forward explicitly.
    #[derive(Clone, Default)]
    struct VirtualTimer(Rc<RefCell<Clock>>);

    impl Timer for VirtualTimer {
        type Handle = u64;

        fn arm(&mut self, delay: Duration) -> Result<u64, TimerError> {
            let mut clock = self.0.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let deadline = clock.now + delay;
            clock.armed.push((id, deadline));
            Ok(id)
        }

        fn cancel(&mut self, handle: u64) {
            let mut clock = self.0.borrow_mut();
            clock.armed.retain(|(id, _)| *id != handle);
            clock.cancelled.push(handle);
        }
    }

    impl VirtualTimer {
        fn live_timers(&self) -> usize {
            self.0.borrow().armed.len()
        }

        fn now_ms(&self) -> u64 {
            self.0.borrow().now.as_millis() as u64
        }

        /// Expire the earliest pending timer and deliver it to `tw`.
        fn fire_next<T: Timer>(&self, tw: &mut Typewriter<T>) -> bool {
            {
                let mut clock = self.0.borrow_mut();
                assert!(clock.armed.len() <= 1, "overlapping timers");
                if clock.armed.is_empty() {
                    return false;
                }
                let (_, deadline) = clock.armed.remove(0);
                clock.now = deadline;
            }
            tw.fire();
            true
        }

        fn next_deadline(&self) -> Option<Duration> {
            self.0.borrow().armed.first().map(|(_, deadline)| *deadline)
        }

        /// Advance to `ms`, firing every timer that comes due on the way.
        fn run_until<T: Timer>(&self, tw: &mut Typewriter<T>, ms: u64) {
            let target = Duration::from_millis(ms);
            while self.next_deadline().is_some_and(|d| d <= target) {
                self.fire_next(tw);
            }
            self.0.borrow_mut().now = target;
        }
    }

    struct FailingTimer;

    impl Timer for FailingTimer {
        type Handle = ();

        fn arm(&mut self, _delay: Duration) -> Result<(), TimerError> {
            Err(TimerError::Arm("no event loop".to_string()))
        }

        fn cancel(&mut self, _handle: ()) {}
    }

    fn scenario() -> (Typewriter<VirtualTimer>, VirtualTimer) {
        let timer = VirtualTimer::default();
        let config = TypewriterConfig::new(10, 100).with_delete_delay(5);
        let session = TypingSession::new(["hi", "yo"], config);
        let mut tw = Typewriter::new(session, timer.clone());
        tw.start();
        (tw, timer)
    }

    #[test]
    fn test_concrete_timeline() {
        let (mut tw, timer) = scenario();
        let expected = [
            (0, ""),
            (10, "h"),
            (20, "hi"),
            (119, "hi"),
            (120, "hi"),
            (125, "h"),
            (130, ""),
            (139, ""),
            (140, "y"),
            (150, "yo"),
        ];
        for (t, text) in expected {
            timer.run_until(&mut tw, t);
            assert_eq!(tw.visible(), text, "at t={t}ms");
        }
        assert_eq!(timer.now_ms(), 150);
    }

    #[test]
    fn test_deletion_starts_after_pause() {
        let (mut tw, timer) = scenario();
        timer.run_until(&mut tw, 119);
        assert_eq!(tw.session().direction(), Direction::Typing);
        assert_eq!(tw.session().phase(), Phase::Pausing);
        timer.run_until(&mut tw, 120);
        assert_eq!(tw.session().direction(), Direction::Deleting);
        assert_eq!(tw.session().char_count(), 2);
    }

    #[test]
    fn test_next_phrase_starts_empty() {
        let (mut tw, timer) = scenario();
        timer.run_until(&mut tw, 130);
        assert_eq!(tw.session().phrase_index(), 1);
        assert_eq!(tw.session().current_phrase(), Some("yo"));
        assert_eq!(tw.session().char_count(), 0);
        assert_eq!(tw.session().direction(), Direction::Typing);
    }

    #[test]
    fn test_step_counts_match_length() {
        let config = TypewriterConfig::new(10, 100).with_delete_delay(5);
        let mut session = TypingSession::new(["hello"], config);

        let mut type_steps = 0;
        while session.phase() == Phase::Typing {
            assert_eq!(session.next_delay(), Some(Duration::from_millis(10)));
            session.advance();
            type_steps += 1;
        }
        assert_eq!(type_steps, 5);
        assert_eq!(session.visible(), "hello");

        assert_eq!(session.next_delay(), Some(Duration::from_millis(100)));
        session.advance();

        let mut delete_steps = 0;
        while session.direction() == Direction::Deleting {
            assert_eq!(session.next_delay(), Some(Duration::from_millis(5)));
            session.advance();
            delete_steps += 1;
        }
        assert_eq!(delete_steps, 5);
    }

    #[test]
    fn test_char_count_stays_in_bounds() {
        let phrases = ["web apps.", "", "a", "creative UIs."];
        let mut session = TypingSession::new(phrases, TypewriterConfig::default());
        for _ in 0..500 {
            let len = session.current_phrase().unwrap().chars().count();
            assert!(session.char_count() <= len);
            assert!(session.visible().chars().count() == session.char_count());
            session.advance();
        }
    }

    #[test]
    fn test_cycle_wraps() {
        let phrases = ["ab", "c", "def"];
        let mut session = TypingSession::new(phrases, TypewriterConfig::default());
        let mut seen = vec![session.phrase_index()];
        while seen.len() < 4 {
            let before = session.phrase_index();
            session.advance();
            if session.phrase_index() != before {
                seen.push(session.phrase_index());
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_empty_phrase_goes_straight_to_pause() {
        let config = TypewriterConfig::new(10, 100);
        let mut session = TypingSession::new(["", "x"], config);
        assert_eq!(session.phase(), Phase::Pausing);
        assert_eq!(session.next_delay(), Some(Duration::from_millis(100)));
        assert!(!session.advance());
        assert_eq!(session.phrase_index(), 1);
        assert_eq!(session.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_phrase_list_never_schedules() {
        let timer = VirtualTimer::default();
        let session = TypingSession::new(Vec::<String>::new(), TypewriterConfig::default());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.next_delay(), None);

        let mut tw = Typewriter::new(session, timer.clone());
        tw.start();
        assert!(!tw.is_pending());
        assert_eq!(timer.live_timers(), 0);
        assert_eq!(tw.visible(), "");
        assert!(!tw.fire());
    }

    #[test]
    fn test_teardown_stops_updates() {
        let (mut tw, timer) = scenario();
        timer.run_until(&mut tw, 10);
        assert_eq!(tw.visible(), "h");

        tw.teardown();
        assert_eq!(timer.live_timers(), 0);
        assert_eq!(timer.0.borrow().cancelled.len(), 1);

        timer.run_until(&mut tw, 10_000);
        assert_eq!(tw.visible(), "h");
        // a stray expiry delivered after teardown is ignored
        assert!(!tw.fire());
        assert_eq!(tw.visible(), "h");
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (mut tw, timer) = scenario();
        tw.teardown();
        tw.teardown();
        assert_eq!(timer.0.borrow().cancelled.len(), 1);
        tw.start();
        assert!(!tw.is_pending());
    }

    #[test]
    fn test_start_twice_keeps_one_timer() {
        let (mut tw, timer) = scenario();
        tw.start();
        assert_eq!(timer.live_timers(), 1);
    }

    #[test]
    fn test_drop_cancels_pending() {
        let (tw, timer) = scenario();
        drop(tw);
        assert_eq!(timer.live_timers(), 0);
    }

    #[test]
    fn test_arm_failure_goes_idle() {
        let session = TypingSession::new(["hi"], TypewriterConfig::default());
        let mut tw = Typewriter::new(session, FailingTimer);
        tw.start();
        assert!(!tw.is_pending());
        assert!(!tw.fire());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut session = TypingSession::new(["héllo✓"], TypewriterConfig::default());
        session.advance();
        session.advance();
        assert_eq!(session.visible(), "hé");
        for _ in 0..4 {
            session.advance();
        }
        assert_eq!(session.visible(), "héllo✓");
    }

    #[test]
    fn test_zero_delays_still_cycle() {
        let timer = VirtualTimer::default();
        let config = TypewriterConfig::new(0, 0).with_delete_delay(0);
        let mut tw = Typewriter::new(TypingSession::new(["ab", "c"], config), timer.clone());
        tw.start();
        for _ in 0..9 {
            assert!(tw.is_pending());
            assert!(timer.fire_next(&mut tw));
        }
        assert_eq!(tw.session().phrase_index(), 0);
        assert_eq!(timer.live_timers(), 1);
    }

    #[test]
    fn test_default_delete_delay() {
        let config = TypewriterConfig::new(80, 1200);
        assert_eq!(config.delete_delay, Duration::from_millis(40));
        let config = TypewriterConfig::new(30, 1200);
        assert_eq!(config.delete_delay, Duration::from_millis(20));
        assert_eq!(
            TypewriterConfig::default(),
            TypewriterConfig {
                type_delay: Duration::from_millis(90),
                delete_delay: Duration::from_millis(45),
                pause: Duration::from_millis(1400),
            }
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: TypewriterConfig =
            serde_json::from_str(r#"{ "type_delay_ms": 80, "pause_ms": 1200 }"#).unwrap();
        assert_eq!(config, TypewriterConfig::new(80, 1200));

        let config: TypewriterConfig =
            serde_json::from_str(r#"{ "type_delay_ms": 10, "delete_delay_ms": 5, "pause_ms": 100 }"#)
                .unwrap();
        assert_eq!(config.delete_delay, Duration::from_millis(5));

        let config: TypewriterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TypewriterConfig::default());
    }
}
