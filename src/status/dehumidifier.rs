// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dehumidifier status.

use std::sync::Arc;

use crate::decode::{OPERATION_ON, resolve_enum_lang, resolve_enum_name};
use crate::device::DeviceInfo;
use crate::error::DecodeError;
use crate::snapshot::Snapshot;

use super::DecodedStatus;

/// Enum symbol of an active air-removal mode.
const AIR_REMOVAL_ON: &str = "@AP_ON_W";

/// Decoded status of a dehumidifier.
///
/// Dehumidifiers report no error field.
#[derive(Debug, Clone)]
pub struct DehumidifierStatus {
    info: Arc<DeviceInfo>,
    snapshot: Snapshot,
}

impl DehumidifierStatus {
    pub(crate) fn new(info: Arc<DeviceInfo>, snapshot: Snapshot) -> Self {
        Self { info, snapshot }
    }

    /// Power state as `"On"` / `"Off"`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Operation` is absent.
    pub fn state(&self) -> Result<String, DecodeError> {
        resolve_enum_lang("Operation", &self.snapshot, self.metadata())
    }

    /// Operation mode symbol (`OpMode`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `OpMode` is absent.
    pub fn mode(&self) -> Result<Option<String>, DecodeError> {
        resolve_enum_name("OpMode", &self.snapshot, self.metadata())
    }

    /// Fan speed symbol (`WindStrength`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `WindStrength` is absent.
    pub fn wind_strength(&self) -> Result<Option<String>, DecodeError> {
        resolve_enum_name("WindStrength", &self.snapshot, self.metadata())
    }

    /// Air-removal mode symbol (`AirRemoval`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `AirRemoval` is absent.
    pub fn air_removal(&self) -> Result<Option<String>, DecodeError> {
        resolve_enum_name("AirRemoval", &self.snapshot, self.metadata())
    }

    /// Returns `true` if air removal is active.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `AirRemoval` is absent.
    pub fn is_air_removal_on(&self) -> Result<bool, DecodeError> {
        Ok(self.air_removal()?.as_deref() == Some(AIR_REMOVAL_ON))
    }

    /// Measured relative humidity in percent.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `SensorHumidity` is missing or malformed.
    pub fn current_humidity(&self) -> Result<i64, DecodeError> {
        self.snapshot.get_int("SensorHumidity")
    }

    /// Target relative humidity in percent.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `HumidityCfg` is missing or malformed.
    pub fn target_humidity(&self) -> Result<i64, DecodeError> {
        self.snapshot.get_int("HumidityCfg")
    }
}

impl DecodedStatus for DehumidifierStatus {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn is_on(&self) -> Result<bool, DecodeError> {
        let operation = resolve_enum_name("Operation", &self.snapshot, self.metadata())?;
        Ok(operation.as_deref() == Some(OPERATION_ON))
    }
}
