use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const FILE_TYPES: [&str; 5] = ["text", "image", "link-url", "link-design", "document"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNode {
    kind: String,
    id: u32,
    name: String,
    icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<RawNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Catalog {
    #[serde(skip_serializing)]
    schema_version: u32,
    default_location: String,
    locations: Vec<RawNode>,
}

fn validate_siblings(siblings: &[RawNode], trail: &str) {
    let mut seen = HashSet::new();
    for node in siblings {
        let here = format!("{trail}/{}", node.name);
        if !seen.insert(node.id) {
            panic!("duplicate sibling id {} at {here}", node.id);
        }
        validate_node(node, &here);
    }
}

fn validate_node(node: &RawNode, trail: &str) {
    match node.kind.as_str() {
        "folder" => {
            let file_fields = [
                ("file_type", node.file_type.is_some()),
                ("href", node.href.is_some()),
                ("image_url", node.image_url.is_some()),
                ("description", !node.description.is_empty()),
                ("subtitle", node.subtitle.is_some()),
                ("image", node.image.is_some()),
            ];
            if let Some((field, _)) = file_fields.iter().find(|(_, present)| *present) {
                panic!("folder {trail} carries file field `{field}`");
            }
            validate_siblings(node.children.as_deref().unwrap_or_default(), trail);
        }
        "file" => {
            if node.children.is_some() || node.category.is_some() {
                panic!("file {trail} carries folder fields");
            }
            let file_type = node
                .file_type
                .as_deref()
                .unwrap_or_else(|| panic!("file {trail} is missing file_type"));
            if !FILE_TYPES.contains(&file_type) {
                panic!("file {trail} has unknown file_type `{file_type}`");
            }
        }
        other => panic!("node {trail} has unknown kind `{other}`"),
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content").join("locations.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "content schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    validate_siblings(&catalog.locations, "");
    for location in &catalog.locations {
        if location.kind != "folder" || location.category.is_none() {
            panic!("top-level location {} must be a categorised folder", location.name);
        }
    }
    if !catalog
        .locations
        .iter()
        .any(|location| location.category.as_deref() == Some(catalog.default_location.as_str()))
    {
        panic!(
            "default location `{}` is not a top-level category",
            catalog.default_location
        );
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize content catalog");
    let generated = format!(
        "/// Build-time generated content catalog JSON.\n\
pub const CONTENT_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("content_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
