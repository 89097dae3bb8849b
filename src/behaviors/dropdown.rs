#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Where a document-level click landed relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Anchor,
    Panel,
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    Toggle,
    Click(ClickTarget),
    Scrolled,
    Navigated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    state: DropdownState,
}

impl Dropdown {
    pub fn is_open(self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn state(self) -> DropdownState {
        self.state
    }

    /// Returns whether the event changed the state.
    pub fn apply(&mut self, event: DropdownEvent) -> bool {
        let next = match (self.state, event) {
            (DropdownState::Closed, DropdownEvent::Toggle) => DropdownState::Open,
            (DropdownState::Open, DropdownEvent::Toggle) => DropdownState::Closed,
            // The anchor's own click handler delivers the toggle; the bubbled
            // document click must not undo it.
            (state, DropdownEvent::Click(ClickTarget::Anchor | ClickTarget::Panel)) => state,
            (_, DropdownEvent::Click(ClickTarget::Outside))
            | (_, DropdownEvent::Scrolled)
            | (_, DropdownEvent::Navigated) => DropdownState::Closed,
        };

        let changed = next != self.state;
        self.state = next;
        changed
    }
}
