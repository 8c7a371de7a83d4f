/**
 * Named Documents
 *
 * The four shared JSON documents the coordination app keeps on disk.
 * Each document is identified by a fixed logical name and stored as a
 * single `<name>.json` file inside the data directory.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical name of a persisted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentName {
    /// Roadmap / milestone progress shown on the admin views
    Progress,
    /// Team roster
    Team,
    /// Project list
    Projects,
    /// Member availability calendar
    Availability,
}

impl DocumentName {
    /// Every document, in a stable order
    pub const ALL: [DocumentName; 4] = [
        DocumentName::Progress,
        DocumentName::Team,
        DocumentName::Projects,
        DocumentName::Availability,
    ];

    /// Logical name (`progress`, `team`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentName::Progress => "progress",
            DocumentName::Team => "team",
            DocumentName::Projects => "projects",
            DocumentName::Availability => "availability",
        }
    }

    /// File name inside the data directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
