#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Slides,
    Listing,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Slides => Self::Listing,
            Self::Listing => Self::Slides,
        }
    }

    /// Label of the control that switches away from this mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Slides => "VIEW LISTING",
            Self::Listing => "VIEW SLIDES",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    ToggleMode,
}

/// Cursor over a fixed-length list. `index < len` whenever `len > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    mode: DisplayMode,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            mode: DisplayMode::default(),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn mode(self) -> DisplayMode {
        self.mode
    }

    /// Prev/next controls are pointless with fewer than two entries.
    pub fn shows_navigation(self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::ToggleMode => self.toggle_mode(),
        }
    }

    /// Pager label: `( n )` for the current entry, `( )` for the rest.
    pub fn pager_label(self, index: usize) -> String {
        if index == self.index {
            format!("( {} )", index + 1)
        } else {
            "( )".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_wraps_to_last_and_next_wraps_to_first() {
        let mut carousel = Carousel::new(2);

        carousel.prev();
        assert_eq!(carousel.index(), 1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn full_cycle_of_next_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.go_to(start);
                for _ in 0..len {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start, "len {len}");
            }
        }
    }

    #[test]
    fn prev_and_next_cancel_out() {
        let len = 5;
        for start in 0..len {
            let mut carousel = Carousel::new(len);
            carousel.go_to(start);

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.index(), start);

            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn single_entry_stays_put_and_hides_navigation() {
        let mut carousel = Carousel::new(1);

        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.shows_navigation());
        assert!(Carousel::new(2).shows_navigation());
    }

    #[test]
    fn empty_list_ignores_movement() {
        let mut carousel = Carousel::new(0);

        carousel.apply(CarouselAction::Next);
        carousel.apply(CarouselAction::Prev);
        carousel.apply(CarouselAction::GoTo(0));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn go_to_out_of_range_keeps_index() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        carousel.go_to(3);

        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn mode_toggle_flips_and_labels_the_other_mode() {
        let mut carousel = Carousel::new(2);
        assert_eq!(carousel.mode(), DisplayMode::Slides);
        assert_eq!(carousel.mode().switch_label(), "VIEW LISTING");

        carousel.apply(CarouselAction::ToggleMode);
        assert_eq!(carousel.mode(), DisplayMode::Listing);
        assert_eq!(carousel.mode().switch_label(), "VIEW SLIDES");
    }

    #[test]
    fn pager_marks_only_current_entry() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(1);

        assert_eq!(carousel.pager_label(0), "( )");
        assert_eq!(carousel.pager_label(1), "( 2 )");
    }
}
