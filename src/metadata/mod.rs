// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-model metadata used to decode snapshots.
//!
//! Each appliance model ships three kinds of tables, all keyed by field name:
//!
//! - an **enum table** mapping raw codes to symbolic names (`"1"` -> `"@WM_STATE_RUNNING_W"`),
//! - a **reference table** mapping raw codes to a richer [`ReferenceRecord`],
//!   together with a `reference` sub-map from symbolic value to a
//!   localization-pack key,
//! - two [`LanguagePack`]s (product-level and model-level) mapping pack keys
//!   to display strings.
//!
//! Fetching and caching the tables is outside this crate; they are parsed
//! once from JSON and shared read-only between all status objects.
//!
//! # Examples
//!
//! ```
//! use thinq_lib::metadata::ModelMetadata;
//!
//! let metadata = ModelMetadata::from_json(r#"{
//!     "modelType": "FL",
//!     "values": {
//!         "State": { "options": { "0": "@WM_STATE_POWER_OFF_W" } }
//!     },
//!     "langProduct": { "pack": { "@WM_STATE_POWER_OFF_W": "Power off" } }
//! }"#).unwrap();
//!
//! assert_eq!(metadata.enum_name("State", "0"), Some("@WM_STATE_POWER_OFF_W"));
//! assert_eq!(metadata.lang_product().get("@WM_STATE_POWER_OFF_W"), Some("Power off"));
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::MetadataError;

/// Metadata for one appliance model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelMetadata {
    /// Model type code (`"FL"`, `"TL"`, ...).
    #[serde(rename = "modelType", default)]
    model_type: String,

    /// Field specifications keyed by field name.
    #[serde(rename = "values", default)]
    fields: HashMap<String, FieldSpec>,

    /// Product-level language pack.
    #[serde(rename = "langProduct", default)]
    lang_product: LanguagePack,

    /// Model-level language pack.
    #[serde(rename = "langModel", default)]
    lang_model: LanguagePack,
}

/// Decoding tables of a single field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldSpec {
    /// Enum table: raw code -> symbolic name.
    #[serde(default)]
    options: HashMap<String, String>,

    /// Reference table: raw code -> record.
    #[serde(default)]
    records: HashMap<String, ReferenceRecord>,

    /// Symbolic value -> language pack key.
    #[serde(default)]
    reference: HashMap<String, String>,
}

/// A reference-table entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReferenceRecord {
    /// Symbolic name of the entry (course name, error code, ...).
    #[serde(default)]
    pub name: String,
    /// Title, usually a language-pack key.
    #[serde(default)]
    pub title: String,
    /// Free-form comment.
    #[serde(default)]
    pub comment: String,
}

/// A localization pack: pack key -> display string.
///
/// The cloud nests the strings under a top-level `"pack"` object; other
/// top-level members are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagePack {
    #[serde(default)]
    pack: HashMap<String, String>,
}

impl LanguagePack {
    /// Creates a language pack from key/string pairs.
    #[must_use]
    pub fn new(pack: HashMap<String, String>) -> Self {
        Self { pack }
    }

    /// Returns the display string for a pack key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pack.get(key).map(String::as_str)
    }

    /// Returns the number of strings in the pack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pack.len()
    }

    /// Returns `true` if the pack has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pack.is_empty()
    }
}

impl ModelMetadata {
    /// Parses model metadata from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Json`] if the document does not match the
    /// expected layout.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds model metadata from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Json`] if the value does not match the
    /// expected layout.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MetadataError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the model type code.
    #[must_use]
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// Returns the specification of a field, if the model defines it.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&FieldSpec> {
        self.fields.get(field)
    }

    /// Looks up the symbolic enum name for a raw code.
    #[must_use]
    pub fn enum_name(&self, field: &str, code: &str) -> Option<&str> {
        self.field(field)?.options.get(code).map(String::as_str)
    }

    /// Looks up the raw code for a symbolic enum name.
    #[must_use]
    pub fn enum_value(&self, field: &str, name: &str) -> Option<&str> {
        self.field(field)?
            .options
            .iter()
            .find(|(_, symbolic)| symbolic.as_str() == name)
            .map(|(code, _)| code.as_str())
    }

    /// Looks up the reference record for a raw code.
    #[must_use]
    pub fn reference(&self, field: &str, code: &str) -> Option<&ReferenceRecord> {
        self.field(field)?.records.get(code)
    }

    /// Returns the language pack key for a symbolic value of a field.
    ///
    /// Falls back to the symbolic value itself when the field has no mapping
    /// for it.
    #[must_use]
    pub fn pack_key<'a>(&'a self, field: &str, symbolic: &'a str) -> &'a str {
        self.field(field)
            .and_then(|spec| spec.reference.get(symbolic))
            .map_or(symbolic, String::as_str)
    }

    /// Returns the product-level language pack.
    #[must_use]
    pub fn lang_product(&self) -> &LanguagePack {
        &self.lang_product
    }

    /// Returns the model-level language pack.
    #[must_use]
    pub fn lang_model(&self) -> &LanguagePack {
        &self.lang_model
    }
}
