use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::patch::error::PatchError;

/// Default product BOM coordinates the applicability check is keyed on.
pub const DEFAULT_PRODUCT_GROUP_ID: &str = "com.redhat.camel.springboot.platform";
pub const DEFAULT_PRODUCT_ARTIFACT_ID: &str = "camel-spring-boot-bom";

/// Tool configuration, loaded from an optional JSON file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchConfig {
    /// Skip patch processing entirely (the `skipPatch` switch).
    pub skip: bool,
    pub product: ProductCoordinates,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            skip: false,
            product: ProductCoordinates::default(),
        }
    }
}

/// groupId/artifactId of the product BOM a descriptor must target.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCoordinates {
    pub group_id: String,
    pub artifact_id: String,
}

impl Default for ProductCoordinates {
    fn default() -> Self {
        Self {
            group_id: DEFAULT_PRODUCT_GROUP_ID.to_string(),
            artifact_id: DEFAULT_PRODUCT_ARTIFACT_ID.to_string(),
        }
    }
}

impl PatchConfig {
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
