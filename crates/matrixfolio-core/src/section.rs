//! Page sections, in display order.

/// A section of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Stable identifier, used in logs.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Heading drawn at the top of the section.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => "",
            Section::About => "// ABOUT_PROTOCOL",
            Section::Skills => "// SKILLS_MATRIX",
            Section::Projects => "// PROJECT_ARCHIVES",
            Section::Contact => "// CONTACT_PROTOCOL",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section bound to a digit key, `1` being the hero.
    pub fn from_digit(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Hero));
        assert_eq!(Section::from_digit('5'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
