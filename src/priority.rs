//! Task priorities (the red / yellow / green tags)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::event::EventColors;

/// The priority tag of a task
///
/// Priorities are totally ordered: `Red` comes first, `Green` last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Red,
    Yellow,
    Green,
}

impl Priority {
    /// Every priority, from the most to the least urgent
    pub const ALL: [Priority; 3] = [Priority::Red, Priority::Yellow, Priority::Green];

    /// Parse a priority tag, as submitted by the form.
    ///
    /// Unknown tags fall back to the lowest precedence (`Green`)
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "red" => Priority::Red,
            "yellow" => Priority::Yellow,
            "green" => Priority::Green,
            other => {
                log::debug!("Unknown priority tag {:?}, using the lowest precedence", other);
                Priority::Green
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Priority::Red => "red",
            Priority::Yellow => "yellow",
            Priority::Green => "green",
        }
    }

    /// The ordering rank: red=1 < yellow=2 < green=3
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Red => 1,
            Priority::Yellow => 2,
            Priority::Green => 3,
        }
    }

    /// The CSS class carried by the list items of this priority
    pub fn css_class(&self) -> String {
        format!("priority-{}", self.tag())
    }

    /// Recover the priority from a list item class, e.g. `priority-red`
    pub fn from_css_class(class: &str) -> Option<Self> {
        let tag = class.strip_prefix("priority-")?;
        Self::ALL.iter().copied().find(|p| p.tag() == tag)
    }

    /// Colors of the calendar events of this priority.
    ///
    /// Yellow backgrounds get black text, the other ones white text.
    pub fn colors(&self) -> EventColors {
        match self {
            Priority::Red => EventColors::new((255, 0, 0, 0.5), (255, 255, 255)),
            Priority::Yellow => EventColors::new((255, 255, 0, 0.5), (0, 0, 0)),
            Priority::Green => EventColors::new((0, 128, 0, 0.5), (255, 255, 255)),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Green
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Rank of a raw priority tag. Unknown tags get the lowest precedence (3)
pub fn rank(tag: &str) -> u8 {
    Priority::from_tag(tag).rank()
}

/// Colors of a raw priority tag
pub fn color(tag: &str) -> EventColors {
    Priority::from_tag(tag).colors()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks() {
        assert_eq!(rank("red"), 1);
        assert_eq!(rank("yellow"), 2);
        assert_eq!(rank("green"), 3);
        assert_eq!(rank("purple"), 3);
        assert_eq!(rank(""), 3);
        assert!(Priority::Red.rank() < Priority::Yellow.rank());
    }

    #[test]
    fn test_colors() {
        assert_eq!(color("red").background_css(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(color("yellow").background_css(), "rgba(255, 255, 0, 0.5)");
        assert_eq!(color("green").background_css(), "rgba(0, 128, 0, 0.5)");
        assert_eq!(color("red").text_css(), "rgb(255, 255, 255)");
        assert_eq!(color("yellow").text_css(), "rgb(0, 0, 0)");
        assert_eq!(color("green").text_css(), "rgb(255, 255, 255)");
        assert_eq!(color("unknown"), color("green"));
    }

    #[test]
    fn test_css_classes() {
        for p in Priority::ALL.iter() {
            assert_eq!(Priority::from_css_class(&p.css_class()), Some(*p));
        }
        assert_eq!(Priority::from_css_class("completed"), None);
        assert_eq!(Priority::from_css_class("priority-blue"), None);
    }
}
