//! Content sections the shell can navigate to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// A logical content page of the portfolio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
    Files,
    Blog,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Files,
        Section::Blog,
    ];

    /// Command name of the section.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Files => "files",
            Self::Blog => "blog",
        }
    }

    /// Canonical file the editor overlay opens for this section.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Home => "home.sh",
            Self::About => "about.md",
            Self::Skills => "skills.json",
            Self::Projects => "projects.js",
            Self::Contact => "contact.html",
            Self::Files => "files.txt",
            Self::Blog => "blog.txt",
        }
    }

    /// Look up a section by command name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Look up a section by its canonical file name (case-insensitive).
    pub fn from_file_name(file: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.file_name().eq_ignore_ascii_case(file))
    }

    /// Next section in navigation order, wrapping after the last.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ShellError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_mapping() {
        assert_eq!(Section::from_file_name("home.sh"), Some(Section::Home));
        assert_eq!(Section::from_file_name("about.md"), Some(Section::About));
        assert_eq!(Section::from_file_name("skills.json"), Some(Section::Skills));
        assert_eq!(Section::from_file_name("projects.js"), Some(Section::Projects));
        assert_eq!(Section::from_file_name("contact.html"), Some(Section::Contact));
        assert_eq!(Section::from_file_name("files.txt"), Some(Section::Files));
        assert_eq!(Section::from_file_name("blog.txt"), Some(Section::Blog));
        assert_eq!(Section::from_file_name("about.txt"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for section in Section::ALL {
            assert_eq!(section.name().parse::<Section>(), Ok(section));
            assert_eq!(Section::from_file_name(section.file_name()), Some(section));
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(Section::from_name("ABOUT"), Some(Section::About));
        assert_eq!(Section::from_file_name("About.MD"), Some(Section::About));
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Blog.next(), Section::Home);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "garage".parse::<Section>(),
            Err(ShellError::UnknownSection("garage".into()))
        );
    }
}
