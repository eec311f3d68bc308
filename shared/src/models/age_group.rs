use serde::{Deserialize, Serialize};
use std::fmt;

/// Youth age bracket a player or team competes in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeGroup {
    U6,
    U8,
    U10,
    U12,
    U14,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::U6,
        AgeGroup::U8,
        AgeGroup::U10,
        AgeGroup::U12,
        AgeGroup::U14,
    ];

    /// Bracket the API places a player of this age into.
    ///
    /// Only used as a hint in the registration form; the API owns the
    /// actual assignment.
    pub fn for_age(age: i32) -> Self {
        match age {
            i32::MIN..=6 => AgeGroup::U6,
            7..=8 => AgeGroup::U8,
            9..=10 => AgeGroup::U10,
            11..=12 => AgeGroup::U12,
            _ => AgeGroup::U14,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AgeGroup::U6 => "U6",
            AgeGroup::U8 => "U8",
            AgeGroup::U10 => "U10",
            AgeGroup::U12 => "U12",
            AgeGroup::U14 => "U14",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::U6 => "U6 (Under 6)",
            AgeGroup::U8 => "U8 (Under 8)",
            AgeGroup::U10 => "U10 (Under 10)",
            AgeGroup::U12 => "U12 (Under 12)",
            AgeGroup::U14 => "U14 (Under 14)",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
