use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fixed action vocabulary of the permission matrix, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionAction {
    /// Read the resource list.
    View,
    /// Create new records.
    Create,
    /// Update existing records.
    Update,
    /// Delete records.
    Delete,
    /// Read fields flagged as sensitive.
    ViewSensitive,
    /// Take approval decisions.
    Approve,
}

impl PermissionAction {
    /// Canonical column order of the matrix editor.
    pub const ORDER: [Self; 6] = [
        Self::View,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::ViewSensitive,
        Self::Approve,
    ];

    /// Returns the stable wire value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::ViewSensitive => "VIEW_SENSITIVE",
            Self::Approve => "APPROVE",
        }
    }

    /// Parses a wire value; unknown actions yield `None` so callers
    /// can drop them from display instead of failing the load.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "VIEW" => Some(Self::View),
            "CREATE" => Some(Self::Create),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "VIEW_SENSITIVE" => Some(Self::ViewSensitive),
            "APPROVE" => Some(Self::Approve),
            _ => None,
        }
    }
}

impl Display for PermissionAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

/// Single grantable permission inside a matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    /// Backend-assigned permission identifier.
    pub id: i64,
    /// Action name of the permission.
    pub permission_name: String,
    /// Human-readable description.
    pub description: String,
}

/// Wire shape of the permission matrix response:
/// `{category -> {category, actions: {ACTION -> entry | null}}}`.
pub type WireMatrix = HashMap<String, WireMatrixCategory>;

/// Wire shape of one matrix category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMatrixCategory {
    /// Category display name.
    pub category: String,
    /// Action cells; `null` means the action is undefined here.
    pub actions: HashMap<String, Option<PermissionEntry>>,
}

/// One row of the matrix editor, with cells in canonical column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    /// Category display name.
    pub category: String,
    /// Cells keyed by action, in `PermissionAction::ORDER`.
    pub cells: Vec<(PermissionAction, Option<PermissionEntry>)>,
}

impl MatrixRow {
    /// Returns the cell for an action, when the row defines it.
    #[must_use]
    pub fn cell(&self, action: PermissionAction) -> Option<&PermissionEntry> {
        self.cells
            .iter()
            .find(|(cell_action, _)| *cell_action == action)
            .and_then(|(_, entry)| entry.as_ref())
    }

    /// Identifiers of every non-null cell in the row.
    #[must_use]
    pub fn permission_ids(&self) -> Vec<i64> {
        self.cells
            .iter()
            .filter_map(|(_, entry)| entry.as_ref().map(|permission| permission.id))
            .collect()
    }
}

/// Display model of the permission matrix: rows sorted by category,
/// columns restricted to the known action vocabulary in fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionMatrix {
    rows: Vec<MatrixRow>,
    actions: Vec<PermissionAction>,
}

impl PermissionMatrix {
    /// Builds the display model from the wire response.
    ///
    /// Unknown actions present in the data are dropped silently; this
    /// is a stable whitelist-and-order filter, not an error.
    #[must_use]
    pub fn from_wire(wire: WireMatrix) -> Self {
        let present: Vec<PermissionAction> = PermissionAction::ORDER
            .into_iter()
            .filter(|action| {
                wire.values()
                    .any(|category| category.actions.contains_key(action.as_str()))
            })
            .collect();

        let mut rows: Vec<MatrixRow> = wire
            .into_values()
            .map(|category| {
                let cells = present
                    .iter()
                    .map(|action| {
                        let entry = category
                            .actions
                            .get(action.as_str())
                            .cloned()
                            .flatten();
                        (*action, entry)
                    })
                    .collect();
                MatrixRow {
                    category: category.category,
                    cells,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.category.cmp(&b.category));

        Self {
            rows,
            actions: present,
        }
    }

    /// Rows in category order.
    #[must_use]
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Column actions actually present in the data, in canonical order.
    #[must_use]
    pub fn actions(&self) -> &[PermissionAction] {
        &self.actions
    }

    /// Looks up a row by category name.
    #[must_use]
    pub fn row(&self, category: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.category == category)
    }
}
