//! Document path grammar.
//!
//! The store exposes four path shapes:
//!
//! | path | [`ResourcePath`] |
//! |------|------------------|
//! | `employee` | `EmployeeCollection` |
//! | `employee/{employee_id}` | `Employee` |
//! | `employee/{employee_id}/leaves` | `LeaveCollection` |
//! | `employee/{employee_id}/leaves/{leave_id}` | `Leave` |
//!
//! Collection names come from a [`PathLayout`]. Leading and trailing `/` are
//! ignored; empty segments are rejected.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_EMPLOYEE_COLLECTION: &str = "employee";
pub const DEFAULT_LEAVES_COLLECTION: &str = "leaves";

/// Error while parsing a document path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("document path is empty")]
    Empty,

    #[error("document path has an empty segment at position {position}")]
    EmptySegment { position: usize },

    #[error("unknown collection `{found}`, expected `{expected}`")]
    UnknownCollection { found: String, expected: String },

    #[error("document path has {count} segments, at most 4 are allowed")]
    TooDeep { count: usize },
}

/// Collection names used to interpret document paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    pub employee_collection: String,
    pub leaves_collection: String,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            employee_collection: DEFAULT_EMPLOYEE_COLLECTION.to_owned(),
            leaves_collection: DEFAULT_LEAVES_COLLECTION.to_owned(),
        }
    }
}

impl PathLayout {
    /// Parse `path` against this layout.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the path is empty, has an empty segment,
    /// names an unknown collection, or is deeper than a leave document.
    pub fn parse(&self, path: &str) -> Result<ResourcePath, PathError> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::EmptySegment { position });
        }

        expect_collection(segments[0], &self.employee_collection)?;
        if let Some(leaves) = segments.get(2) {
            expect_collection(leaves, &self.leaves_collection)?;
        }

        match segments.as_slice() {
            [_] => Ok(ResourcePath::EmployeeCollection),
            [_, employee_id] => Ok(ResourcePath::Employee {
                employee_id: (*employee_id).to_owned(),
            }),
            [_, employee_id, _] => Ok(ResourcePath::LeaveCollection {
                employee_id: (*employee_id).to_owned(),
            }),
            [_, employee_id, _, leave_id] => Ok(ResourcePath::Leave {
                employee_id: (*employee_id).to_owned(),
                leave_id: (*leave_id).to_owned(),
            }),
            _ => Err(PathError::TooDeep {
                count: segments.len(),
            }),
        }
    }

    /// Render `path` back into its string form.
    #[must_use]
    pub fn render(&self, path: &ResourcePath) -> String {
        let employees = &self.employee_collection;
        let leaves = &self.leaves_collection;
        match path {
            ResourcePath::EmployeeCollection => employees.clone(),
            ResourcePath::Employee { employee_id } => format!("{employees}/{employee_id}"),
            ResourcePath::LeaveCollection { employee_id } => {
                format!("{employees}/{employee_id}/{leaves}")
            }
            ResourcePath::Leave {
                employee_id,
                leave_id,
            } => format!("{employees}/{employee_id}/{leaves}/{leave_id}"),
        }
    }
}

fn expect_collection(found: &str, expected: &str) -> Result<(), PathError> {
    if found == expected {
        Ok(())
    } else {
        Err(PathError::UnknownCollection {
            found: found.to_owned(),
            expected: expected.to_owned(),
        })
    }
}

/// A parsed document or collection path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    EmployeeCollection,
    Employee {
        employee_id: String,
    },
    LeaveCollection {
        employee_id: String,
    },
    Leave {
        employee_id: String,
        leave_id: String,
    },
}

impl ResourcePath {
    /// The employee that owns this path, if any.
    #[must_use]
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Self::EmployeeCollection => None,
            Self::Employee { employee_id }
            | Self::LeaveCollection { employee_id }
            | Self::Leave { employee_id, .. } => Some(employee_id),
        }
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::EmployeeCollection | Self::LeaveCollection { .. }
        )
    }
}

impl FromStr for ResourcePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathLayout::default().parse(s)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PathLayout::default().render(self))
    }
}
