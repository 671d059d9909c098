use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single roster entry. Read-only input to the query engine: every
/// operation takes a slice of these and derives a fresh value without
/// mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub group: String,
}

impl Student {
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.into(),
        }
    }

    /// `"first last"` with a single space separator.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Natural order is by id only. Ids are unique, so this is total.
impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
