//! Circular carousel controller.
//!
//! [`CarouselController`] owns the navigation state of a circular,
//! optionally auto-advancing, optionally filtered list. It never renders;
//! a view reads [`current_item`](CarouselController::current_item) and
//! [`snapshot`](CarouselController::snapshot) after every transition, or
//! subscribes to [`changed`](CarouselController::changed).
//!
//! # Navigation
//!
//! Navigation wraps in both directions, so `next` and `previous` are total.
//! Only [`jump_to`](CarouselController::jump_to) can fail, and only for an
//! index outside a non-empty list. Manual navigation pauses autoplay; the
//! autoplay timer's own ticks do not.
//!
//! # Event pump
//!
//! Timer ticks and keyboard input are delivered when the owning event loop
//! calls [`process_events`](CarouselController::process_events).
//! [`time_until_next_event`](CarouselController::time_until_next_event) tells
//! the loop how long it may sleep.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vitrine::carousel::CarouselController;
//! use vitrine_core::ManualClock;
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut carousel = CarouselController::with_clock(clock.clone());
//! carousel.initialize(vec!["Python", "Databricks", "Walmart"]);
//! carousel.set_autoplay(true, Duration::from_millis(5000));
//!
//! clock.advance(Duration::from_millis(5000));
//! carousel.process_events();
//! assert_eq!(carousel.current_item(), Some(&"Databricks"));
//!
//! carousel.previous();
//! assert!(!carousel.is_playing());
//! ```

mod keyboard;
mod search;
mod state;
mod visible;

pub use keyboard::{CarouselCommand, Key, KeyPress, Modifiers};
pub use search::{kind_filter, matches_terms, text_filter, topic_filter, FilterFn, Searchable};
pub use state::{CarouselSnapshot, SlideDirection};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use vitrine_core::logging::targets;
use vitrine_core::{CarouselError, Clock, ConnectionGuard, Signal, SystemClock, TimerId, TimerQueue};

use visible::VisibleRows;

/// Autoplay interval used until one is set explicitly.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Navigation state for a circular list of items.
pub struct CarouselController<T> {
    items: Vec<T>,
    rows: VisibleRows,
    filter: Option<FilterFn<T>>,
    current: usize,
    playing: bool,
    direction: SlideDirection,
    interval: Duration,
    timers: TimerQueue,
    autoplay_timer: Option<TimerId>,
    autoplay_ticks: u64,
    inbox: Arc<Mutex<VecDeque<CarouselCommand>>>,
    keyboard: Option<ConnectionGuard<KeyPress>>,
    disposed: bool,
    changed: Signal<CarouselSnapshot>,
}

impl<T> std::fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("snapshot", &self.snapshot())
            .field("interval", &self.interval)
            .field("autoplay_timer", &self.autoplay_timer)
            .field("keyboard_bound", &self.keyboard.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl<T> Default for CarouselController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CarouselController<T> {
    /// Create an empty, paused controller on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty, paused controller whose autoplay reads `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            rows: VisibleRows::default(),
            filter: None,
            current: 0,
            playing: false,
            direction: SlideDirection::Forward,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            timers: TimerQueue::with_clock(clock),
            autoplay_timer: None,
            autoplay_ticks: 0,
            inbox: Arc::new(Mutex::new(VecDeque::new())),
            keyboard: None,
            disposed: false,
            changed: Signal::new(),
        }
    }

    // =========================================================================
    // Items and filtering
    // =========================================================================

    /// Replace the items and show the first visible one.
    ///
    /// The current filter is reapplied. Autoplay keeps its state.
    pub fn initialize(&mut self, items: Vec<T>) {
        self.items = items;
        self.rows.rebuild(&self.items, self.filter.as_ref());
        self.current = 0;
        self.direction = SlideDirection::Forward;
        tracing::debug!(
            target: targets::CAROUSEL,
            total = self.items.len(),
            visible = self.rows.len(),
            "carousel initialized"
        );
        self.notify();
    }

    /// Set or clear the visibility predicate and show the first visible item.
    ///
    /// Visible items keep their relative order. Autoplay keeps its state.
    pub fn set_filter(&mut self, filter: Option<FilterFn<T>>) {
        self.filter = filter;
        self.rows.rebuild(&self.items, self.filter.as_ref());
        self.current = 0;
        tracing::debug!(
            target: targets::CAROUSEL,
            filter_active = self.filter.is_some(),
            visible = self.rows.len(),
            "carousel filter changed"
        );
        self.notify();
    }

    /// Filter with a closure.
    pub fn filter_by<F>(&mut self, keep: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.set_filter(Some(Arc::new(keep)));
    }

    /// Show every item again.
    pub fn clear_filter(&mut self) {
        self.set_filter(None);
    }

    /// Whether a filter is applied.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// All loaded items, filtered or not.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items passing the filter, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.as_slice().iter().map(|&row| &self.items[row])
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no item is visible.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // =========================================================================
    // Reading state
    // =========================================================================

    /// The item being shown, or `None` when nothing is visible.
    pub fn current_item(&self) -> Option<&T> {
        self.rows
            .source_row(self.current)
            .and_then(|row| self.items.get(row))
    }

    /// Position of the shown item among the visible items.
    pub fn current_index(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.current)
    }

    /// Row of the shown item in [`items`](Self::items).
    pub fn current_source_row(&self) -> Option<usize> {
        self.rows.source_row(self.current)
    }

    /// Whether autoplay is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Direction of the last transition.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// The interval autoplay uses (or will use when resumed).
    pub fn autoplay_interval(&self) -> Duration {
        self.interval
    }

    /// How many autoplay ticks have been delivered, including ticks that
    /// had nothing to advance.
    pub fn autoplay_ticks(&self) -> u64 {
        self.autoplay_ticks
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of live timers owned by this controller (zero or one).
    pub fn active_timer_count(&self) -> usize {
        self.timers.active_count()
    }

    /// A copy of the state a renderer needs.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index(),
            visible_count: self.rows.len(),
            total_count: self.items.len(),
            is_playing: self.playing,
            direction: self.direction,
            filter_active: self.filter.is_some(),
        }
    }

    /// Emitted with a fresh snapshot after every transition.
    pub fn changed(&self) -> &Signal<CarouselSnapshot> {
        &self.changed
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show the next item, wrapping to the first. Pauses autoplay.
    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.pause_for_manual_navigation();
        self.advance();
    }

    /// Show the previous item, wrapping to the last. Pauses autoplay.
    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.pause_for_manual_navigation();
        let len = self.rows.len();
        self.current = (self.current + len - 1) % len;
        self.direction = SlideDirection::Backward;
        tracing::trace!(target: targets::CAROUSEL, index = self.current, "previous");
        self.notify();
    }

    /// Show the visible item at `index`. Pauses autoplay.
    ///
    /// Does nothing when no item is visible. An index past the end is
    /// reported, not clamped, and leaves the state untouched.
    pub fn jump_to(&mut self, index: usize) -> vitrine_core::Result<()> {
        let len = self.rows.len();
        if len == 0 {
            return Ok(());
        }
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }

        self.pause_for_manual_navigation();
        if index != self.current {
            self.direction = if index > self.current {
                SlideDirection::Forward
            } else {
                SlideDirection::Backward
            };
        }
        self.current = index;
        tracing::trace!(target: targets::CAROUSEL, index, "jump");
        self.notify();
        Ok(())
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.rows.len();
        self.direction = SlideDirection::Forward;
        tracing::trace!(target: targets::CAROUSEL, index = self.current, "next");
        self.notify();
    }

    fn pause_for_manual_navigation(&mut self) {
        if self.playing {
            tracing::debug!(target: targets::CAROUSEL, "manual navigation paused autoplay");
            self.stop_autoplay_timer();
            self.playing = false;
        }
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Start or stop autoplay.
    ///
    /// Enabling replaces any running timer with one firing every `interval`,
    /// so at most one autoplay timer exists. A disposed controller ignores
    /// the request.
    pub fn set_autoplay(&mut self, enabled: bool, interval: Duration) {
        if enabled && self.disposed {
            tracing::warn!(target: targets::CAROUSEL, "autoplay requested on a disposed carousel");
            return;
        }

        self.stop_autoplay_timer();
        self.interval = interval;

        if enabled {
            self.autoplay_timer = Some(self.timers.start_repeating(interval));
            self.playing = true;
        } else {
            self.playing = false;
        }

        tracing::debug!(
            target: targets::CAROUSEL,
            playing = self.playing,
            interval_ms = interval.as_millis() as u64,
            "autoplay updated"
        );
        self.notify();
    }

    /// Pause if playing, resume with the last interval if paused.
    pub fn toggle_autoplay(&mut self) {
        let interval = self.interval;
        self.set_autoplay(!self.playing, interval);
    }

    fn stop_autoplay_timer(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            let _ = self.timers.stop(id);
        }
    }

    fn autoplay_tick(&mut self) {
        if self.disposed || !self.playing {
            return;
        }
        self.autoplay_ticks += 1;
        if self.rows.len() <= 1 {
            return;
        }
        self.advance();
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route key presses from `keys` to this controller.
    ///
    /// Presses are queued and applied by [`process_events`](Self::process_events).
    /// Binding again replaces the previous registration.
    pub fn bind_keyboard(&mut self, keys: &Arc<Signal<KeyPress>>) {
        if self.disposed {
            tracing::warn!(target: targets::CAROUSEL, "keyboard bind on a disposed carousel");
            return;
        }

        let inbox = Arc::clone(&self.inbox);
        self.keyboard = Some(keys.connect_scoped(move |press| {
            if let Some(command) = CarouselCommand::for_key(press) {
                inbox.lock().push_back(command);
            }
        }));
    }

    /// Whether a keyboard registration is live.
    pub fn is_keyboard_bound(&self) -> bool {
        self.keyboard.is_some()
    }

    /// Apply a key press immediately. Returns whether the key is bound.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        match CarouselCommand::for_key(&press) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    /// Apply one navigation command.
    pub fn apply(&mut self, command: CarouselCommand) {
        if self.disposed {
            return;
        }
        match command {
            CarouselCommand::Next => self.next(),
            CarouselCommand::Previous => self.previous(),
            CarouselCommand::First => {
                let _ = self.jump_to(0);
            }
            CarouselCommand::Last => {
                if let Some(last) = self.rows.len().checked_sub(1) {
                    let _ = self.jump_to(last);
                }
            }
            CarouselCommand::ToggleAutoplay => self.toggle_autoplay(),
        }
    }

    /// Deliver queued input, then due autoplay ticks.
    ///
    /// Returns the number of events handled.
    pub fn process_events(&mut self) -> usize {
        if self.disposed {
            return 0;
        }

        let commands: Vec<CarouselCommand> = self.inbox.lock().drain(..).collect();
        let mut handled = commands.len();
        for command in commands {
            self.apply(command);
        }

        for id in self.timers.process_expired() {
            if self.autoplay_timer == Some(id) {
                self.autoplay_tick();
                handled += 1;
            }
        }
        handled
    }

    /// How long the owning loop may wait before calling
    /// [`process_events`](Self::process_events) again.
    ///
    /// `Some(Duration::ZERO)` when input is already queued; `None` when
    /// nothing is scheduled.
    pub fn time_until_next_event(&mut self) -> Option<Duration> {
        if self.disposed {
            return None;
        }
        if !self.inbox.lock().is_empty() {
            return Some(Duration::ZERO);
        }
        self.timers.time_until_next()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Release the autoplay timer and the keyboard registration.
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.stop_autoplay_timer();
        self.timers.clear();
        self.playing = false;
        self.keyboard = None;
        self.inbox.lock().clear();
        self.changed.disconnect_all();
        tracing::debug!(target: targets::CAROUSEL, "carousel disposed");
    }

    fn notify(&self) {
        self.changed.emit(self.snapshot());
    }
}

impl<T> Drop for CarouselController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
