use serde::Deserialize;
use std::path::PathBuf;

/// A folder in the remote rules listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
}

/// One item of a per-directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub download_url: Option<String>,
}

impl RemoteFileEntry {
    pub fn is_file_named(&self, name: &str) -> bool {
        self.kind == "file" && self.name == name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Cancelled,
}

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Cancelled,
    /// Ctrl-C arrived outside the prompt.
    Interrupted,
}
