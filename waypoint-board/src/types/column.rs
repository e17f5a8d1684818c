//! Column types: the fixed workflow stages of the board

use crate::error::BoardError;
use serde::{Deserialize, Serialize};

/// A workflow stage. The set is closed: every card belongs to exactly one
/// of these at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl ColumnId {
    /// All columns in display order
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Backlog,
        ColumnId::Todo,
        ColumnId::Doing,
        ColumnId::Done,
    ];

    /// Get the column id as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(BoardError::unknown_column(other)),
        }
    }
}

/// Presentation metadata for a column: display title and accent color.
/// Not part of the behavioral contract; the render collaborator reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub title: &'static str,
    /// 6-character hex color code without #
    pub accent: &'static str,
}

/// The board's column layout in display order
pub fn board_columns() -> [ColumnSpec; 4] {
    [
        ColumnSpec {
            id: ColumnId::Backlog,
            title: "Backlog",
            accent: "9333ea",
        },
        ColumnSpec {
            id: ColumnId::Todo,
            title: "TODO",
            accent: "ca8a04",
        },
        ColumnSpec {
            id: ColumnId::Doing,
            title: "In progress",
            accent: "2563eb",
        },
        ColumnSpec {
            id: ColumnId::Done,
            title: "Complete",
            accent: "059669",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_column_roundtrip() {
        for col in ColumnId::ALL {
            let parsed = ColumnId::from_str(col.as_str()).unwrap();
            assert_eq!(parsed, col);
        }
    }

    #[test]
    fn test_unknown_column_rejected() {
        let result = ColumnId::from_str("inbox");
        assert!(matches!(result, Err(BoardError::UnknownColumn { .. })));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ColumnId::Doing).unwrap();
        assert_eq!(json, "\"doing\"");
        let parsed: ColumnId = serde_json::from_str("\"backlog\"").unwrap();
        assert_eq!(parsed, ColumnId::Backlog);
    }

    #[test]
    fn test_board_columns_order() {
        let cols = board_columns();
        assert_eq!(cols.len(), 4);
        assert_eq!(cols[0].id, ColumnId::Backlog);
        assert_eq!(cols[3].id, ColumnId::Done);
        assert_eq!(cols[2].title, "In progress");
    }
}
