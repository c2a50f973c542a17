use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day of the school week. Serialized with the French day names the backend
/// uses in its `jour_semaine` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    #[serde(rename = "Lundi")]
    Monday,
    #[serde(rename = "Mardi")]
    Tuesday,
    #[serde(rename = "Mercredi")]
    Wednesday,
    #[serde(rename = "Jeudi")]
    Thursday,
    #[serde(rename = "Vendredi")]
    Friday,
    #[serde(rename = "Samedi")]
    Saturday,
    /// Defined for completeness; the grid only displays Monday through
    /// Saturday and the backend never schedules Sundays.
    #[serde(rename = "Dimanche")]
    Sunday,
}

impl WeekDay {
    /// 1-based day number (Lundi = 1 ... Dimanche = 7).
    pub fn number(self) -> u8 {
        match self {
            WeekDay::Monday => 1,
            WeekDay::Tuesday => 2,
            WeekDay::Wednesday => 3,
            WeekDay::Thursday => 4,
            WeekDay::Friday => 5,
            WeekDay::Saturday => 6,
            WeekDay::Sunday => 7,
        }
    }

    /// 0-based column index on the six-day grid (Lundi = 0).
    pub fn column_index(self) -> usize {
        self.number() as usize - 1
    }

    /// French display name, identical to the wire value.
    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Lundi",
            WeekDay::Tuesday => "Mardi",
            WeekDay::Wednesday => "Mercredi",
            WeekDay::Thursday => "Jeudi",
            WeekDay::Friday => "Vendredi",
            WeekDay::Saturday => "Samedi",
            WeekDay::Sunday => "Dimanche",
        }
    }

    /// Looks up a backend day name. Returns `None` for anything that is not
    /// one of the seven known French names.
    pub fn from_name(name: &str) -> Option<WeekDay> {
        match name {
            "Lundi" => Some(WeekDay::Monday),
            "Mardi" => Some(WeekDay::Tuesday),
            "Mercredi" => Some(WeekDay::Wednesday),
            "Jeudi" => Some(WeekDay::Thursday),
            "Vendredi" => Some(WeekDay::Friday),
            "Samedi" => Some(WeekDay::Saturday),
            "Dimanche" => Some(WeekDay::Sunday),
            _ => None,
        }
    }
}

/// Canonical course slot, the single shape every view consumes after
/// normalization. Display fields are always populated (placeholders are
/// substituted for missing relations) so rendering never breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSlot {
    pub id: i64,
    pub day: WeekDay,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub class_name: String,
    /// Color token inherited from the subject's department.
    pub color: String,
    /// Week-of-semester this slot instance belongs to (1..=16). `None` means
    /// the source shape does not carry week information, not week zero.
    pub week: Option<u32>,
    /// Soft-cancellation flag. `None` means the source shape does not carry
    /// cancellation information, not "never cancelled".
    pub cancelled: Option<bool>,
}
