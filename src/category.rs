use serde::{Deserialize, Serialize};

use crate::utils::{is_common, is_decimal_digit, is_han, is_letter};

/// The bucket a character is sorted into by [`classify`](crate::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Han,
    Letter,
    Digit,
    Common,
    Other,
}

impl Category {
    /// Every category, in the order [`Groups`](crate::Groups) stores them.
    pub const ALL: [Category; 5] = [
        Category::Han,
        Category::Letter,
        Category::Digit,
        Category::Common,
        Category::Other,
    ];

    /// Classify one character.
    ///
    /// The rules are a priority list, not independent predicates: `x` is a
    /// letter too, but the common set is tested first, and `年` is a letter
    /// to Unicode but the Han test runs before the letter test.
    pub fn of(ch: char) -> Category {
        if is_common(ch) {
            Category::Common
        } else if is_han(ch) {
            Category::Han
        } else if is_letter(ch) {
            Category::Letter
        } else if is_decimal_digit(ch) {
            Category::Digit
        } else {
            Category::Other
        }
    }

    /// Case-insensitive lookup by name. A few aliases are accepted so that
    /// callers can write `"chinese"`, `"letters"` or `"digits"`.
    pub fn from_name(name: &str) -> Option<Category> {
        match name.trim().to_ascii_lowercase().as_str() {
            "han" | "chinese" => Some(Category::Han),
            "letter" | "letters" => Some(Category::Letter),
            "digit" | "digits" => Some(Category::Digit),
            "common" => Some(Category::Common),
            "other" | "others" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Han => "han",
            Category::Letter => "letter",
            Category::Digit => "digit",
            Category::Common => "common",
            Category::Other => "other",
        }
    }
}
