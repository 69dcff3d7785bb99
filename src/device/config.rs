// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration.

use serde::Deserialize;

use crate::error::MetadataError;
use crate::types::{DeviceCategory, DeviceId};

/// Configuration of one appliance, as listed by the cloud device list.
///
/// # Examples
///
/// ```
/// use thinq_lib::DeviceConfig;
/// use thinq_lib::types::{DeviceCategory, DeviceId};
///
/// let config = DeviceConfig::new(DeviceId::new(), "Laundry", DeviceCategory::Washer)
///     .with_model_type("TL");
/// assert_eq!(config.model_type.as_deref(), Some("TL"));
///
/// let config = DeviceConfig::from_json(r#"{
///     "deviceId": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
///     "alias": "Kitchen",
///     "deviceType": "DISHWASHER"
/// }"#).unwrap();
/// assert_eq!(config.category, DeviceCategory::Dishwasher);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    /// Cloud identifier of the appliance.
    #[serde(rename = "deviceId")]
    pub id: DeviceId,
    /// User-facing name.
    #[serde(rename = "alias")]
    pub name: String,
    /// Appliance category.
    #[serde(rename = "deviceType")]
    pub category: DeviceCategory,
    /// Model type override; the metadata's model type is used when absent.
    #[serde(rename = "modelType", default)]
    pub model_type: Option<String>,
}

impl DeviceConfig {
    /// Creates a configuration for an appliance.
    #[must_use]
    pub fn new(id: DeviceId, name: impl Into<String>, category: DeviceCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            model_type: None,
        }
    }

    /// Overrides the model type reported by the metadata.
    #[must_use]
    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Json`] if the document is malformed or names
    /// an unsupported category.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let id = DeviceId::new();
        let config = DeviceConfig::new(id, "Basement", DeviceCategory::Dehumidifier);
        assert_eq!(config.id, id);
        assert_eq!(config.name, "Basement");
        assert_eq!(config.model_type, None);
        assert_eq!(config.with_model_type("DH").model_type.as_deref(), Some("DH"));
    }

    #[test]
    fn from_json_with_model_type() {
        let config = DeviceConfig::from_json(
            r#"{
                "deviceId": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
                "alias": "Laundry",
                "deviceType": "WASHER",
                "modelType": "TL"
            }"#,
        )
        .unwrap();
        assert_eq!(config.category, DeviceCategory::Washer);
        assert_eq!(config.model_type.as_deref(), Some("TL"));
    }

    #[test]
    fn from_json_unknown_category() {
        let result = DeviceConfig::from_json(
            r#"{
                "deviceId": "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8",
                "alias": "Fridge",
                "deviceType": "REFRIGERATOR"
            }"#,
        );
        assert!(matches!(result, Err(MetadataError::Json(_))));
    }
}
