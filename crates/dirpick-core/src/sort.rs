//! Sort configuration and the directories-first ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr};

use crate::entry::Entry;
use crate::error::PreferenceError;

/// Field used as the primary sort key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Case-insensitive name.
    #[default]
    Name,
    /// Size in bytes.
    Size,
    /// Last modification time.
    #[strum(to_string = "date", serialize = "modified")]
    Date,
}

impl SortMode {
    /// Stable integer code for stores that persist numbers.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`SortMode::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code as usize)
    }

    /// Parse a stored mode string.
    pub fn parse(value: &str) -> Result<Self, PreferenceError> {
        Self::from_str(value.trim()).map_err(|_| PreferenceError::InvalidMode {
            value: value.to_string(),
        })
    }
}

/// Direction applied to the primary key within a group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[strum(to_string = "↑")]
    Ascending,
    #[strum(to_string = "↓")]
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Reverse the direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A sort mode paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortOrder {
    pub mode: SortMode,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(mode: SortMode, direction: SortDirection) -> Self {
        Self { mode, direction }
    }

    /// Build from the `(mode, ascending)` pair preference stores use.
    pub fn from_parts(mode: SortMode, ascending: bool) -> Self {
        Self::new(mode, SortDirection::from_ascending(ascending))
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    /// Same mode, opposite direction.
    pub fn reversed(self) -> Self {
        Self::new(self.mode, self.direction.reverse())
    }

    /// Short label for display, e.g. `name ↑`.
    pub fn label(&self) -> String {
        format!("{} {}", self.mode, self.direction)
    }
}

/// Comparison used to order entries within a group.
///
/// Ties are always resolved by [`tie_break`] in [`sort_entries`], so an
/// implementation only needs to express its primary key.
pub trait EntryComparator {
    fn compare(&self, a: &Entry, b: &Entry) -> Ordering;
}

impl EntryComparator for SortOrder {
    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let primary = match self.mode {
            SortMode::Name => cmp_ignore_case(&a.name, &b.name),
            SortMode::Size => a.size.cmp(&b.size),
            // whole milliseconds; sub-millisecond differences fall to the tie-break
            SortMode::Date => a.modified_millis().cmp(&b.modified_millis()),
        };
        self.direction.apply(primary)
    }
}

impl<F> EntryComparator for F
where
    F: Fn(&Entry, &Entry) -> Ordering,
{
    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        self(a, b)
    }
}

/// Case-insensitive name ascending, then exact path.
pub fn tie_break(a: &Entry, b: &Entry) -> Ordering {
    cmp_ignore_case(&a.name, &b.name).then_with(|| a.path.cmp(&b.path))
}

/// Compare two names by their lowercase form without allocating.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Order entries with directories first, each group sorted by `comparator`.
///
/// Direction never changes group precedence.
pub fn sort_entries<C: EntryComparator + ?Sized>(entries: &mut Vec<Entry>, comparator: &C) {
    let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) =
        std::mem::take(entries).into_iter().partition(|e| e.is_dir);

    let cmp = |a: &Entry, b: &Entry| comparator.compare(a, b).then_with(|| tie_break(a, b));
    dirs.sort_by(&cmp);
    files.sort_by(&cmp);

    dirs.append(&mut files);
    *entries = dirs;
}
