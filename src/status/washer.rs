// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Washer status.

use std::sync::Arc;

use crate::decode::{OFF, resolve_enum_lang, resolve_enum_name, resolve_reference_name};
use crate::device::DeviceInfo;
use crate::dispatch::{AttributeValue, WasherAttribute, washer_rule};
use crate::error::DecodeError;
use crate::snapshot::Snapshot;
use crate::types::WasherKind;

use super::{DecodedStatus, correct, error_text};

/// Rinse-count enum symbols and their display strings.
const RINSE_COUNT_DISPLAY: &[(&str, &str)] = &[
    ("@WM_RINSE_COUNT_0_W", "0"),
    ("@WM_RINSE_COUNT_1_W", "1"),
    ("@WM_RINSE_COUNT_2_W", "2"),
    ("@WM_RINSE_COUNT_3_W", "3"),
    ("@WM_RINSE_COUNT_4_W", "4"),
    ("@WM_RINSE_COUNT_5_W", "5"),
];

/// Decoded status of a washer.
///
/// Attributes whose field or bit depends on the washer kind go through
/// [`washer_rule`]; attributes a kind does not have decode to
/// [`AttributeValue::Unavailable`].
#[derive(Debug, Clone)]
pub struct WasherStatus {
    info: Arc<DeviceInfo>,
    snapshot: Snapshot,
    kind: WasherKind,
}

impl WasherStatus {
    pub(crate) fn new(info: Arc<DeviceInfo>, snapshot: Snapshot, kind: WasherKind) -> Self {
        Self {
            info,
            snapshot,
            kind,
        }
    }

    /// Returns the washer kind used for dispatch.
    #[must_use]
    pub fn kind(&self) -> WasherKind {
        self.kind
    }

    /// Decodes a kind-dependent attribute.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the selected field is missing or, for
    /// option bits, not an integer.
    pub fn attribute(&self, attribute: WasherAttribute) -> Result<AttributeValue, DecodeError> {
        washer_rule(attribute, self.kind).decode(&self.snapshot, self.metadata())
    }

    /// Current run state (`State`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `State` is absent.
    pub fn state(&self) -> Result<String, DecodeError> {
        resolve_enum_lang("State", &self.snapshot, self.metadata())
    }

    /// Previous run state (`PreState`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `PreState` is absent.
    pub fn previous_state(&self) -> Result<String, DecodeError> {
        resolve_enum_lang("PreState", &self.snapshot, self.metadata())
    }

    /// Remaining time in minutes.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the time fields are missing or malformed.
    pub fn remaining_time(&self) -> Result<u32, DecodeError> {
        self.snapshot.minutes("Remain_Time_H", "Remain_Time_M")
    }

    /// Initial programme time in minutes.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the time fields are missing or malformed.
    pub fn initial_time(&self) -> Result<u32, DecodeError> {
        self.snapshot.minutes("Initial_Time_H", "Initial_Time_M")
    }

    /// Delayed-start time in minutes.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the time fields are missing or malformed.
    pub fn reserve_time(&self) -> Result<u32, DecodeError> {
        self.snapshot.minutes("Reserve_Time_H", "Reserve_Time_M")
    }

    /// Selected course (`APCourse` on front-loaders, `Course` on top-loaders).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the course field is absent.
    pub fn course(&self) -> Result<String, DecodeError> {
        self.attribute(WasherAttribute::Course).map(|value| value.to_string())
    }

    /// Selected smart (downloaded) course.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `SmartCourse` is absent.
    pub fn smart_course(&self) -> Result<String, DecodeError> {
        resolve_reference_name("SmartCourse", &self.snapshot, self.metadata())
    }

    /// Current error, `"No error"` when the washer reports none.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Error` is absent.
    pub fn error(&self) -> Result<String, DecodeError> {
        error_text(&self.snapshot, self.metadata())
    }

    /// Spin speed setting.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `SpinSpeed` is absent.
    pub fn spin_speed(&self) -> Result<String, DecodeError> {
        resolve_enum_lang("SpinSpeed", &self.snapshot, self.metadata())
    }

    /// Number of rinses.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `RinseCount` is absent.
    pub fn rinse_count(&self) -> Result<String, DecodeError> {
        const FIELD: &str = "RinseCount";

        let Some(symbolic) = resolve_enum_name(FIELD, &self.snapshot, self.metadata())? else {
            return Ok(OFF.to_string());
        };
        match correct(RINSE_COUNT_DISPLAY, &symbolic) {
            Some(display) => Ok(display.to_string()),
            None => resolve_enum_lang(FIELD, &self.snapshot, self.metadata()),
        }
    }

    /// Water temperature (`WaterTemp` / `WTemp`).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn water_temperature(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::WaterTemperature)
    }

    /// Dry level; unavailable on top-loaders.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn dry_level(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::DryLevel)
    }

    /// Water level; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn water_level(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::WaterLevel)
    }

    /// Water flow; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn water_flow(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::WaterFlow)
    }

    /// Soak setting; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn soak(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::Soak)
    }

    /// Fresh-care option; unavailable on top-loaders.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option1` is missing or malformed.
    pub fn fresh_care(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::FreshCare)
    }

    /// Child lock option.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option1` is missing or malformed.
    pub fn child_lock(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::ChildLock)
    }

    /// Door lock; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option1` is missing or malformed.
    pub fn door_lock(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::DoorLock)
    }

    /// Steam option.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option1` is missing or malformed.
    pub fn steam(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::Steam)
    }

    /// Turbo shot option.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option2` is missing or malformed.
    pub fn turbo_shot(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::TurboShot)
    }

    /// Buzzer option; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option2` is missing or malformed.
    pub fn buzzer(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::Buzzer)
    }

    /// Sterilize option; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option2` is missing or malformed.
    pub fn sterilize(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::Sterilize)
    }

    /// Heater option; unavailable on front-loaders.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if `Option2` is missing or malformed.
    pub fn heater(&self) -> Result<AttributeValue, DecodeError> {
        self.attribute(WasherAttribute::Heater)
    }
}

impl DecodedStatus for WasherStatus {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn is_on(&self) -> Result<bool, DecodeError> {
        Ok(self.state()? != OFF)
    }
}
