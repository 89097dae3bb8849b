/// Added to the scroll offset before matching, so a section counts as active
/// slightly before its top edge reaches the viewport top.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;
/// The sticky header hides once the page has scrolled this close to the
/// bottom of the hero section.
pub const HEADER_HIDE_MARGIN: f64 = 200.0;

/// Layout of one mounted section, measured at query time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Returns the first section, in display order, whose `[top, top + height)`
/// range contains `scroll_offset + lookahead`.
pub fn active_section(
    sections: &[SectionGeometry],
    scroll_offset: f64,
    lookahead: f64,
) -> Option<&str> {
    let position = scroll_offset + lookahead;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

pub fn header_visible(scroll_offset: f64, hero_bottom: f64) -> bool {
    scroll_offset <= hero_bottom - HEADER_HIDE_MARGIN
}

/// One scroll measurement: the offset plus whatever sections were mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollObservation {
    pub offset: f64,
    pub sections: Vec<SectionGeometry>,
    pub hero_bottom: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    active: String,
    header_visible: bool,
    lookahead: f64,
}

impl ScrollSpy {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_lookahead(initial, SCROLL_LOOKAHEAD)
    }

    pub fn with_lookahead(initial: impl Into<String>, lookahead: f64) -> Self {
        Self {
            active: initial.into(),
            header_visible: true,
            lookahead,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Folds a measurement into the spy. When no section matches the active
    /// id is kept; when the hero is not mounted the header flag is kept.
    /// Returns whether either output changed.
    pub fn observe(&mut self, observation: &ScrollObservation) -> bool {
        let mut changed = false;

        if let Some(id) = active_section(&observation.sections, observation.offset, self.lookahead)
        {
            if id != self.active {
                self.active = id.to_string();
                changed = true;
            }
        }

        if let Some(hero_bottom) = observation.hero_bottom {
            let visible = header_visible(observation.offset, hero_bottom);
            if visible != self.header_visible {
                self.header_visible = visible;
                changed = true;
            }
        }

        changed
    }
}

/// Lets at most one recomputation be queued per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller should schedule a frame; false while one
    /// is already queued.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback before measuring.
    pub fn release(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
