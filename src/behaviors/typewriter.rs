use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay before the frame around the title fades in.
    pub frame_delay: Duration,
    /// Delay before the first character is typed.
    pub initial_delay: Duration,
    pub tick_interval: Duration,
    /// Delay between the last character and the content reveal.
    pub reveal_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(300),
            initial_delay: Duration::from_millis(1_000),
            tick_interval: Duration::from_millis(100),
            reveal_delay: Duration::from_millis(400),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypewriterPhase {
    #[default]
    Idle,
    Typing,
    Typed,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Typed,
    Completed,
    Ignored,
}

/// Latch that lets an effect run on first activation only.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True exactly once.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Reveals `target` one character per tick. The shown text is always a
/// prefix of the target on a character boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    target: &'static str,
    shown_chars: usize,
    frame_visible: bool,
    phase: TypewriterPhase,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            shown_chars: 0,
            frame_visible: false,
            phase: TypewriterPhase::Idle,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn text(&self) -> &'static str {
        let end = self
            .target
            .char_indices()
            .nth(self.shown_chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    pub fn frame_visible(&self) -> bool {
        self.frame_visible
    }

    pub fn content_revealed(&self) -> bool {
        self.phase == TypewriterPhase::Revealed
    }

    pub fn show_frame(&mut self) {
        self.frame_visible = true;
    }

    /// Moves from `Idle` to `Typing`. An empty target is complete at once.
    pub fn begin(&mut self) {
        if self.phase != TypewriterPhase::Idle {
            return;
        }
        self.phase = if self.target.is_empty() {
            TypewriterPhase::Typed
        } else {
            TypewriterPhase::Typing
        };
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TypewriterPhase::Typing {
            return TickOutcome::Ignored;
        }

        self.shown_chars += 1;
        if self.shown_chars >= self.target.chars().count() {
            self.phase = TypewriterPhase::Typed;
            TickOutcome::Completed
        } else {
            TickOutcome::Typed
        }
    }

    /// Accepted only once typing has finished.
    pub fn reveal(&mut self) -> bool {
        if self.phase != TypewriterPhase::Typed {
            return false;
        }
        self.phase = TypewriterPhase::Revealed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_strict_prefix_until_last_tick() {
        let mut typewriter = Typewriter::new("CONTACT");
        typewriter.begin();
        let len = typewriter.target().chars().count();

        for tick in 1..len {
            assert_eq!(typewriter.tick(), TickOutcome::Typed);
            assert_eq!(typewriter.text(), &"CONTACT"[..tick]);
            assert_ne!(typewriter.text(), "CONTACT");
        }

        assert_eq!(typewriter.tick(), TickOutcome::Completed);
        assert_eq!(typewriter.text(), "CONTACT");
        assert_eq!(typewriter.phase(), TypewriterPhase::Typed);
    }

    #[test]
    fn ticks_after_completion_are_ignored() {
        let mut typewriter = Typewriter::new("AB");
        typewriter.begin();
        typewriter.tick();
        typewriter.tick();

        assert_eq!(typewriter.tick(), TickOutcome::Ignored);
        assert_eq!(typewriter.text(), "AB");
    }

    #[test]
    fn ticks_before_begin_are_ignored() {
        let mut typewriter = Typewriter::new("AB");

        assert_eq!(typewriter.tick(), TickOutcome::Ignored);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let mut typewriter = Typewriter::new("CAFÉ Ü");
        typewriter.begin();
        for _ in 0..4 {
            typewriter.tick();
        }

        assert_eq!(typewriter.text(), "CAFÉ");
    }

    #[test]
    fn reveal_waits_for_typing_to_finish() {
        let mut typewriter = Typewriter::new("HI");
        typewriter.begin();
        typewriter.tick();

        assert!(!typewriter.reveal());
        typewriter.tick();
        assert!(typewriter.reveal());
        assert!(typewriter.content_revealed());
        assert!(!typewriter.reveal());
    }

    #[test]
    fn empty_target_completes_on_begin() {
        let mut typewriter = Typewriter::new("");
        typewriter.begin();

        assert_eq!(typewriter.phase(), TypewriterPhase::Typed);
        assert!(typewriter.reveal());
    }

    #[test]
    fn begin_twice_does_not_restart() {
        let mut typewriter = Typewriter::new("ABC");
        typewriter.begin();
        typewriter.tick();
        typewriter.begin();

        assert_eq!(typewriter.text(), "A");
    }

    #[test]
    fn frame_shows_independently_of_typing() {
        let mut typewriter = Typewriter::new("ABC");
        assert!(!typewriter.frame_visible());

        typewriter.show_frame();
        assert!(typewriter.frame_visible());
        assert_eq!(typewriter.phase(), TypewriterPhase::Idle);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut latch = OneShot::default();

        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn default_timing_matches_page_rhythm() {
        let timing = TypewriterTiming::default();

        assert_eq!(timing.tick_interval, Duration::from_millis(100));
        assert!(timing.frame_delay < timing.initial_delay);
    }
}
