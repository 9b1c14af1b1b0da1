/// Which of the two caption blocks a page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Caption {
    English,
    French,
}

impl Caption {
    /// Pick the caption from the `l` query parameter: `fr` selects French,
    /// anything else (or nothing) English.
    pub fn for_language(l: Option<&str>) -> Self {
        match l {
            Some("fr") => Self::French,
            _ => Self::English,
        }
    }

    /// `(english_visible, french_visible)`; exactly one is true.
    pub fn visibility(self) -> (bool, bool) {
        match self {
            Self::English => (true, false),
            Self::French => (false, true),
        }
    }
}
