//! Static content tree browsed through the Finder window.
//!
//! The tree is authored in `content/locations.toml`, validated by the build script and embedded
//! as JSON. Nodes are immutable for the whole session; navigation only changes which folder is
//! being viewed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/content_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    Text,
    Image,
    LinkUrl,
    LinkDesign,
    Document,
}

impl FileType {
    pub fn is_link(self) -> bool {
        matches!(self, Self::LinkUrl | Self::LinkDesign)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
}

/// Folders reject file-only fields such as `href` or `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderNode {
    pub id: u32,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub children: Vec<ContentNode>,
    /// Top-level category tag, only set on root locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
}

impl FolderNode {
    pub fn child_folders(&self) -> impl Iterator<Item = &FolderNode> {
        self.children.iter().filter_map(ContentNode::as_folder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentNode {
    File(FileNode),
    Folder(FolderNode),
}

impl ContentNode {
    pub fn id(&self) -> u32 {
        match self {
            Self::File(file) => file.id,
            Self::Folder(folder) => folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Folder(folder) => &folder.name,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::File(file) => &file.icon,
            Self::Folder(folder) => &folder.icon,
        }
    }

    pub fn position(&self) -> Option<&str> {
        match self {
            Self::File(file) => file.position.as_deref(),
            Self::Folder(folder) => folder.position.as_deref(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default location `{0}` is not a top-level location")]
    MissingDefaultLocation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct CatalogDocument {
    default_location: String,
    locations: Vec<FolderNode>,
}

/// Top-level locations plus the folder Finder opens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    locations: Vec<FolderNode>,
    default_index: usize,
}

impl ContentCatalog {
    /// Parses the catalog embedded at build time.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(CONTENT_CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let doc: CatalogDocument = serde_json::from_str(raw)?;
        Self::new(doc.locations, &doc.default_location)
    }

    pub fn new(locations: Vec<FolderNode>, default_category: &str) -> Result<Self, ContentError> {
        let default_index = locations
            .iter()
            .position(|folder| folder.category.as_deref() == Some(default_category))
            .ok_or_else(|| ContentError::MissingDefaultLocation(default_category.to_string()))?;
        Ok(Self {
            locations,
            default_index,
        })
    }

    /// Root locations listed under "Favorites".
    pub fn locations(&self) -> &[FolderNode] {
        &self.locations
    }

    pub fn default_location(&self) -> &FolderNode {
        &self.locations[self.default_index]
    }

    pub fn location(&self, category: &str) -> Option<&FolderNode> {
        self.locations
            .iter()
            .find(|folder| folder.category.as_deref() == Some(category))
    }

    /// Project folders of the default location; shown on the desktop and in the sidebar.
    pub fn projects(&self) -> Vec<FolderNode> {
        self.default_location().child_folders().cloned().collect()
    }
}
