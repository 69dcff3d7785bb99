// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded, typed views over one snapshot.
//!
//! A status object pairs a single [`Snapshot`] with the device it came from.
//! Every accessor decodes on demand from that snapshot; nothing is cached and
//! nothing carries over between polls. Polling again yields a new status
//! object.
//!
//! # Examples
//!
//! ```no_run
//! use thinq_lib::{ApplianceStatus, DecodedStatus};
//!
//! fn report(status: &ApplianceStatus) -> thinq_lib::Result<()> {
//!     if let ApplianceStatus::Washer(washer) = status {
//!         println!(
//!             "{}: {} ({} min left)",
//!             washer.device_name(),
//!             washer.state()?,
//!             washer.remaining_time()?
//!         );
//!     }
//!     Ok(())
//! }
//! ```

mod dehumidifier;
mod dishwasher;
mod dryer;
mod washer;

pub use dehumidifier::DehumidifierStatus;
pub use dishwasher::{DishwasherProcess, DishwasherState, DishwasherStatus};
pub use dryer::DryerStatus;
pub use washer::WasherStatus;

use std::sync::Arc;

use crate::decode::{NO_ERROR, NO_ERROR_TITLE, resolve_reference_title};
use crate::device::DeviceInfo;
use crate::error::DecodeError;
use crate::metadata::ModelMetadata;
use crate::snapshot::Snapshot;
use crate::types::{DeviceCategory, DeviceIdentity};

/// Accessors shared by every status facade.
pub trait DecodedStatus {
    /// Returns the device the snapshot came from.
    fn info(&self) -> &DeviceInfo;

    /// Returns the snapshot being decoded.
    fn snapshot(&self) -> &Snapshot;

    /// Returns `true` if the appliance reports itself as running or powered.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the power field is missing.
    fn is_on(&self) -> Result<bool, DecodeError>;

    /// Returns the user-facing device name.
    fn device_name(&self) -> &str {
        self.info().name()
    }

    /// Returns the model type code (`"FL"`, `"TL"`, ...).
    fn device_type(&self) -> &str {
        self.info().model_type()
    }

    /// Returns the model metadata used for decoding.
    fn metadata(&self) -> &ModelMetadata {
        self.info().metadata()
    }
}

/// Resolves the `Error` reference title, normalizing the no-error sentinel.
pub(crate) fn error_text(
    snapshot: &Snapshot,
    metadata: &ModelMetadata,
) -> Result<String, DecodeError> {
    const FIELD: &str = "Error";

    let code = snapshot.get(FIELD)?;
    let raw_title = metadata.reference(FIELD, code).map(|record| record.title.as_str());
    let title = resolve_reference_title(FIELD, snapshot, metadata)?;
    if raw_title == Some(NO_ERROR_TITLE) || title == NO_ERROR_TITLE {
        return Ok(NO_ERROR.to_string());
    }
    Ok(title)
}

/// Looks up `value` in a static correction table.
pub(crate) fn correct<'a>(table: &[(&str, &'a str)], value: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
}

/// A decoded status of any supported appliance.
#[derive(Debug, Clone)]
pub enum ApplianceStatus {
    /// Washer status.
    Washer(WasherStatus),
    /// Dryer status.
    Dryer(DryerStatus),
    /// Dishwasher status.
    Dishwasher(DishwasherStatus),
    /// Dehumidifier status.
    Dehumidifier(DehumidifierStatus),
}

impl ApplianceStatus {
    /// Wraps a snapshot in the facade matching the device identity.
    #[must_use]
    pub fn decode(info: Arc<DeviceInfo>, snapshot: Snapshot) -> Self {
        match info.identity() {
            DeviceIdentity::Washer(kind) => Self::Washer(WasherStatus::new(info, snapshot, kind)),
            DeviceIdentity::Dryer => Self::Dryer(DryerStatus::new(info, snapshot)),
            DeviceIdentity::Dishwasher => Self::Dishwasher(DishwasherStatus::new(info, snapshot)),
            DeviceIdentity::Dehumidifier => {
                Self::Dehumidifier(DehumidifierStatus::new(info, snapshot))
            }
        }
    }

    /// Returns the appliance category.
    #[must_use]
    pub fn category(&self) -> DeviceCategory {
        self.info().identity().category()
    }

    /// Returns the error text, or `None` for appliances without an error field.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the `Error` field is missing.
    pub fn error(&self) -> Result<Option<String>, DecodeError> {
        match self {
            Self::Washer(status) => status.error().map(Some),
            Self::Dryer(status) => status.error().map(Some),
            Self::Dishwasher(status) => status.error().map(Some),
            Self::Dehumidifier(_) => Ok(None),
        }
    }

    /// Returns the washer status, if this is a washer.
    #[must_use]
    pub fn as_washer(&self) -> Option<&WasherStatus> {
        match self {
            Self::Washer(status) => Some(status),
            _ => None,
        }
    }

    /// Returns the dryer status, if this is a dryer.
    #[must_use]
    pub fn as_dryer(&self) -> Option<&DryerStatus> {
        match self {
            Self::Dryer(status) => Some(status),
            _ => None,
        }
    }

    /// Returns the dishwasher status, if this is a dishwasher.
    #[must_use]
    pub fn as_dishwasher(&self) -> Option<&DishwasherStatus> {
        match self {
            Self::Dishwasher(status) => Some(status),
            _ => None,
        }
    }

    /// Returns the dehumidifier status, if this is a dehumidifier.
    #[must_use]
    pub fn as_dehumidifier(&self) -> Option<&DehumidifierStatus> {
        match self {
            Self::Dehumidifier(status) => Some(status),
            _ => None,
        }
    }
}

impl DecodedStatus for ApplianceStatus {
    fn info(&self) -> &DeviceInfo {
        match self {
            Self::Washer(status) => status.info(),
            Self::Dryer(status) => status.info(),
            Self::Dishwasher(status) => status.info(),
            Self::Dehumidifier(status) => status.info(),
        }
    }

    fn snapshot(&self) -> &Snapshot {
        match self {
            Self::Washer(status) => status.snapshot(),
            Self::Dryer(status) => status.snapshot(),
            Self::Dishwasher(status) => status.snapshot(),
            Self::Dehumidifier(status) => status.snapshot(),
        }
    }

    fn is_on(&self) -> Result<bool, DecodeError> {
        match self {
            Self::Washer(status) => status.is_on(),
            Self::Dryer(status) => status.is_on(),
            Self::Dishwasher(status) => status.is_on(),
            Self::Dehumidifier(status) => status.is_on(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::device::{DeviceConfig, DeviceInfo};
    use crate::metadata::ModelMetadata;
    use crate::snapshot::Snapshot;
    use crate::types::{DeviceCategory, DeviceId};

    pub fn info(category: DeviceCategory, metadata: serde_json::Value) -> Arc<DeviceInfo> {
        let metadata = ModelMetadata::from_value(metadata).unwrap();
        let config = DeviceConfig::new(DeviceId::new(), "Test appliance", category);
        Arc::new(DeviceInfo::new(&config, Arc::new(metadata)))
    }

    pub fn snapshot(json: &serde_json::Value) -> Snapshot {
        Snapshot::from_json(&json.to_string()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_metadata() -> ModelMetadata {
        ModelMetadata::from_value(json!({
            "values": {
                "Error": {
                    "records": {
                        "0": {
                            "name": "ERROR_NOERROR",
                            "title": "ERROR_NOERROR_TITLE",
                            "comment": ""
                        },
                        "1": {
                            "name": "IE",
                            "title": "@WM_US_ERROR_IE_W",
                            "comment": "Water supply"
                        }
                    }
                }
            },
            "langProduct": {
                "pack": {
                    "ERROR_NOERROR_TITLE": "No Error (translated)",
                    "@WM_US_ERROR_IE_W": "IE error"
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn error_text_normalizes_no_error() {
        let snap = test_support::snapshot(&json!({"Error": "0"}));
        assert_eq!(error_text(&snap, &error_metadata()).unwrap(), NO_ERROR);
    }

    #[test]
    fn error_text_localizes_real_errors() {
        let snap = test_support::snapshot(&json!({"Error": "1"}));
        assert_eq!(error_text(&snap, &error_metadata()).unwrap(), "IE error");
    }

    #[test]
    fn error_text_unmapped_code_is_off() {
        let snap = test_support::snapshot(&json!({"Error": "77"}));
        assert_eq!(error_text(&snap, &error_metadata()).unwrap(), crate::decode::OFF);
    }

    #[test]
    fn correct_finds_entry() {
        let table = [("Haeavy", "Heavy")];
        assert_eq!(correct(&table, "Haeavy"), Some("Heavy"));
        assert_eq!(correct(&table, "Eco"), None);
    }

    #[test]
    fn decode_picks_facade_by_identity() {
        let snap = test_support::snapshot(&json!({}));
        for category in [
            DeviceCategory::Washer,
            DeviceCategory::Dryer,
            DeviceCategory::Dishwasher,
            DeviceCategory::Dehumidifier,
        ] {
            let info = test_support::info(category, json!({}));
            let status = ApplianceStatus::decode(info, snap.clone());
            assert_eq!(status.category(), category);
        }
    }

    #[test]
    fn dehumidifier_has_no_error_field() {
        let info = test_support::info(DeviceCategory::Dehumidifier, json!({}));
        let status = ApplianceStatus::decode(info, test_support::snapshot(&json!({})));
        assert_eq!(status.error().unwrap(), None);
        assert!(status.as_dehumidifier().is_some());
        assert!(status.as_washer().is_none());
    }
}
