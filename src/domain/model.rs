use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One directory entry. Owned by the storage collaborator; the engine never
/// mutates a listing, every transformation produces a new sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Storage-layer identifier. Never exposed in URLs.
    pub id: String,
    pub display_name: String,
    /// Licensing-board code, `"<2-digit-prefix>/<digits>"`. Unique; the
    /// canonical lookup key for slug resolution.
    pub registration_code: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub formation_text: String,
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub approaches: Vec<String>,
    #[serde(default)]
    pub audiences: Vec<String>,
    #[serde(default)]
    pub contact_handle: String,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Result of a directory-listing evaluation: the disclosed slice of the
/// filtered and shuffled snapshot, plus whether more can be loaded.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView {
    pub listings: Vec<Listing>,
    pub has_more: bool,
}
