use serde::{Deserialize, Serialize};

use crate::api::types::TextureId;

/// Texture manifest describing every image a game expects the host to load.
/// Exchanged with the host as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureManifest {
    /// URL prefix shared by all textures (e.g., "/textures").
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Textures in id order.
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Numeric id referenced by `MeshComponent::texture`.
    pub id: u32,
    /// File name relative to `base_path` (e.g., "earth.jpg").
    pub path: String,
}

fn default_base_path() -> String {
    "/textures".to_string()
}

impl TextureManifest {
    /// Build a manifest with one `<name-lowercase>.jpg` per name, ids assigned in order.
    pub fn from_names<'a>(base_path: &str, names: impl IntoIterator<Item = &'a str>) -> Self {
        let textures = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| TextureDescriptor {
                id: i as u32,
                path: format!("{}.jpg", name.to_lowercase()),
            })
            .collect();
        Self {
            base_path: base_path.to_string(),
            textures,
        }
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the manifest for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Look up the texture id whose file stem matches `name` (case-insensitive).
    pub fn index_of(&self, name: &str) -> Option<TextureId> {
        let wanted = format!("{}.jpg", name.to_lowercase());
        self.textures
            .iter()
            .find(|t| t.path == wanted)
            .map(|t| TextureId(t.id))
    }

    /// Full URL of a texture, joined onto `base_path`.
    pub fn url(&self, id: TextureId) -> Option<String> {
        self.textures
            .iter()
            .find(|t| t.id == id.0)
            .map(|t| format!("{}/{}", self.base_path.trim_end_matches('/'), t.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_names_lowercases_paths() {
        let manifest = TextureManifest::from_names("/textures", ["Sun", "Earth"]);
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures[0].path, "sun.jpg");
        assert_eq!(manifest.textures[1].path, "earth.jpg");
        assert_eq!(manifest.textures[1].id, 1);
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let manifest = TextureManifest::from_names("/textures", ["Sun", "Saturn"]);
        assert_eq!(manifest.index_of("saturn"), Some(TextureId(1)));
        assert_eq!(manifest.index_of("SUN"), Some(TextureId(0)));
        assert_eq!(manifest.index_of("Pluto"), None);
    }

    #[test]
    fn url_joins_base_path() {
        let manifest = TextureManifest::from_names("/textures/", ["Mars"]);
        assert_eq!(manifest.url(TextureId(0)).as_deref(), Some("/textures/mars.jpg"));
        assert_eq!(manifest.url(TextureId(5)), None);
    }

    #[test]
    fn json_survives_host_exchange() {
        let manifest = TextureManifest::from_names("/textures", ["Venus"]);
        let json = manifest.to_json().unwrap();
        let parsed = TextureManifest::from_json(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn parse_minimal_manifest_uses_defaults() {
        let manifest = TextureManifest::from_json("{}").unwrap();
        assert_eq!(manifest.base_path, "/textures");
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TextureManifest::from_json("{ not json").is_err());
    }
}
