// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enum and reference lookups with language-pack localization.
//!
//! Every lookup runs in two stages. The first stage maps the raw code found in
//! the snapshot to a symbolic value through the model's enum or reference
//! table. The second stage ("localize") turns the symbolic value into a
//! display string:
//!
//! 1. the field's `reference` sub-map gives the pack key (defaulting to the
//!    symbolic value itself),
//! 2. the key is looked up in the product language pack, falling back to the
//!    symbolic value,
//! 3. if that string still carries the appliance-family marker, the key is
//!    re-resolved against the model language pack instead, again falling back
//!    to the symbolic value.
//!
//! A raw code with no table entry resolves to [`OFF`]: the protocol reports
//! every field but documents only some of its codes.

use crate::error::DecodeError;
use crate::metadata::ModelMetadata;
use crate::snapshot::Snapshot;

/// Sentinel for unmapped codes and powered-off states.
pub const OFF: &str = "Off";

/// Display string for [`OPERATION_ON`].
pub const ON: &str = "On";

/// Sentinel for attributes that do not exist on a device variant.
pub const UNAVAILABLE: &str = "unavailable";

/// Enum symbol of a powered-on `Operation` field.
pub const OPERATION_ON: &str = "@operation_on";

/// Enum symbol of a powered-off `Operation` field.
pub const OPERATION_OFF: &str = "@operation_off";

/// Reference title reported when the appliance has no error.
pub const NO_ERROR_TITLE: &str = "ERROR_NOERROR_TITLE";

/// Display string for [`NO_ERROR_TITLE`].
pub const NO_ERROR: &str = "No error";

/// Which textual attribute of a reference record to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceAttribute {
    /// The record's `name`.
    Name,
    /// The record's `title`.
    Title,
    /// The record's `comment`.
    Comment,
}

/// Decides which language pack is authoritative for a pack key.
///
/// Product packs of washer-family models contain placeholders that still
/// carry the family marker (`@WM...`); for those keys the model pack holds
/// the real string. A legitimate display string that happens to contain the
/// marker is re-resolved as well.
///
/// # Examples
///
/// ```
/// use thinq_lib::decode::LocalizationPolicy;
///
/// let policy = LocalizationPolicy::default();
/// assert!(policy.defers_to_model("@WM_STATE_RUNNING_W"));
/// assert!(!policy.defers_to_model("Running"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizationPolicy {
    family_marker: &'static str,
}

impl LocalizationPolicy {
    /// Policy for the washer/dryer family marker `@WM`.
    pub const WASHER_FAMILY: Self = Self::new("@WM");

    /// Creates a policy that defers to the model pack on `family_marker`.
    #[must_use]
    pub const fn new(family_marker: &'static str) -> Self {
        Self { family_marker }
    }

    /// Returns the family marker.
    #[must_use]
    pub const fn family_marker(&self) -> &'static str {
        self.family_marker
    }

    /// Returns `true` if a product-pack string must be re-resolved against
    /// the model pack.
    #[must_use]
    pub fn defers_to_model(&self, product_text: &str) -> bool {
        product_text.contains(self.family_marker)
    }

    /// Localizes a symbolic value of `field`.
    ///
    /// Never fails: pack misses fall back to the symbolic value.
    #[must_use]
    pub fn localize(&self, metadata: &ModelMetadata, field: &str, symbolic: &str) -> String {
        let key = metadata.pack_key(field, symbolic);

        let product = metadata.lang_product().get(key).unwrap_or_else(|| {
            tracing::trace!(field = %field, key = %key, "Product language pack miss");
            symbolic
        });
        if !self.defers_to_model(product) {
            return product.to_string();
        }

        tracing::trace!(field = %field, key = %key, "Re-resolving against model language pack");
        metadata
            .lang_model()
            .get(key)
            .unwrap_or(symbolic)
            .to_string()
    }
}

impl Default for LocalizationPolicy {
    fn default() -> Self {
        Self::WASHER_FAMILY
    }
}

/// Resolves a field's raw code to its symbolic enum name.
///
/// Returns `Ok(None)` when the code is not in the enum table.
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_enum_name(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<Option<String>, DecodeError> {
    let code = snapshot.get(field)?;
    let name = metadata.enum_name(field, code).map(str::to_string);
    if name.is_none() {
        tracing::trace!(field = %field, code = %code, "Unresolved enum code");
    }
    Ok(name)
}

/// Resolves a field's raw code to a localized enum display string.
///
/// Unmapped codes and `@operation_off` yield [`OFF`]; `@operation_on` yields
/// [`ON`] without consulting the language packs.
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_enum_lang(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<String, DecodeError> {
    let Some(symbolic) = resolve_enum_name(field, snapshot, metadata)? else {
        return Ok(OFF.to_string());
    };
    Ok(match symbolic.as_str() {
        OPERATION_ON => ON.to_string(),
        OPERATION_OFF => OFF.to_string(),
        _ => LocalizationPolicy::default().localize(metadata, field, &symbolic),
    })
}

/// Resolves one attribute of a field's reference record and localizes it.
///
/// Codes missing from the reference table yield [`OFF`].
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_reference(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
    attribute: ReferenceAttribute,
) -> Result<String, DecodeError> {
    let code = snapshot.get(field)?;
    let Some(record) = metadata.reference(field, code) else {
        tracing::trace!(field = %field, code = %code, "Unresolved reference code");
        return Ok(OFF.to_string());
    };
    let symbolic = match attribute {
        ReferenceAttribute::Name => &record.name,
        ReferenceAttribute::Title => &record.title,
        ReferenceAttribute::Comment => &record.comment,
    };
    Ok(LocalizationPolicy::default().localize(metadata, field, symbolic))
}

/// Resolves and localizes the `name` of a field's reference record.
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_reference_name(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<String, DecodeError> {
    resolve_reference(field, snapshot, metadata, ReferenceAttribute::Name)
}

/// Resolves and localizes the `title` of a field's reference record.
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_reference_title(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<String, DecodeError> {
    resolve_reference(field, snapshot, metadata, ReferenceAttribute::Title)
}

/// Resolves and localizes the `comment` of a field's reference record.
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the snapshot lacks the field.
pub fn resolve_reference_comment(
    field: &str,
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<String, DecodeError> {
    resolve_reference(field, snapshot, metadata, ReferenceAttribute::Comment)
}
