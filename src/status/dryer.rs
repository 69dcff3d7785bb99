// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dryer status.

use std::sync::Arc;

use crate::decode::{OFF, resolve_enum_name, resolve_reference_name};
use crate::device::DeviceInfo;
use crate::error::DecodeError;
use crate::snapshot::Snapshot;

use super::{DecodedStatus, correct, error_text};

/// Dryer models reuse washer state names in their enum tables.
const STATE_CORRECTIONS: &[(&str, &str)] = &[("세탁 중", "건조 중"), ("전원 OFF", OFF)];

/// Dry-level symbol reported when no level is selected.
const DRY_LEVEL_NONE: &str = "-";

/// Decoded status of a dryer.
#[derive(Debug, Clone)]
pub struct DryerStatus {
    info: Arc<DeviceInfo>,
    snapshot: Snapshot,
}

impl DryerStatus {
    pub(crate) fn new(info: Arc<DeviceInfo>, snapshot: Snapshot) -> Self {
        Self { info, snapshot }
    }

    /// Current run state.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `State` is absent.
    pub fn state(&self) -> Result<String, DecodeError> {
        let Some(state) = resolve_enum_name("State", &self.snapshot, self.metadata())? else {
            return Ok(OFF.to_string());
        };
        Ok(correct(STATE_CORRECTIONS, &state).map_or(state, str::to_string))
    }

    /// Selected dry level, `"Off"` when none is selected.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `DryLevel` is absent.
    pub fn dry_level(&self) -> Result<String, DecodeError> {
        Ok(
            match resolve_enum_name("DryLevel", &self.snapshot, self.metadata())? {
                Some(level) if level != DRY_LEVEL_NONE => level,
                _ => OFF.to_string(),
            },
        )
    }

    /// Current process step, if the code is documented.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `ProcessState` is absent.
    pub fn process_state(&self) -> Result<Option<String>, DecodeError> {
        resolve_enum_name("ProcessState", &self.snapshot, self.metadata())
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
        self.snapshot
            .minutes("Reserve_Initial_Time_H", "Reserve_Initial_Time_M")
    }

    /// Selected course.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Course` is absent.
    pub fn course(&self) -> Result<String, DecodeError> {
        resolve_reference_name("Course", &self.snapshot, self.metadata())
    }

    /// Selected smart course.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `SmartCourse` is absent.
    pub fn smart_course(&self) -> Result<String, DecodeError> {
        resolve_reference_name("SmartCourse", &self.snapshot, self.metadata())
    }

    /// Current error, `"No error"` when the dryer reports none.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Error` is absent.
    pub fn error(&self) -> Result<String, DecodeError> {
        error_text(&self.snapshot, self.metadata())
    }
}

impl DecodedStatus for DryerStatus {
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
