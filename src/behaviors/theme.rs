pub const DARK_ROOT_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Footer control text, naming the current mode.
    pub fn footer_label(self) -> &'static str {
        match self {
            Self::Light => "( • LIGHT )",
            Self::Dark => "( • DARK )",
        }
    }

    /// Marker class on the document root, if any.
    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_ROOT_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn labels_follow_current_theme() {
        assert_eq!(Theme::Dark.footer_label(), "( • DARK )");
        assert_eq!(Theme::Light.footer_label(), "( • LIGHT )");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn only_dark_sets_root_class() {
        assert_eq!(Theme::from_dark(true).root_class(), Some("dark"));
        assert_eq!(Theme::from_dark(false).root_class(), None);
    }
}
