// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dishwasher status.

use std::fmt;
use std::sync::Arc;

use crate::decode::{resolve_enum_name, resolve_reference_name};
use crate::device::DeviceInfo;
use crate::error::DecodeError;
use crate::snapshot::Snapshot;

use super::{DecodedStatus, correct, error_text};

/// Typos in official course names.
const COURSE_CORRECTIONS: &[(&str, &str)] = &[("Haeavy", "Heavy")];

/// Process symbol reported between programmes.
const PROCESS_NONE: &str = "-";

/// Run state of a dishwasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishwasherState {
    /// Powered on, idle.
    Initial,
    /// Running a programme.
    Running,
    /// Programme paused.
    Paused,
    /// Powered off.
    Off,
    /// Programme finished.
    Complete,
    /// Recovering from a power failure.
    PowerFail,
}

impl DishwasherState {
    /// Parses the enum symbol reported by the appliance.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "@DW_STATE_INITIAL_W" => Some(Self::Initial),
            "@DW_STATE_RUNNING_W" => Some(Self::Running),
            "@DW_STATE_PAUSE_W" => Some(Self::Paused),
            "@DW_STATE_POWER_OFF_W" => Some(Self::Off),
            "@DW_STATE_COMPLETE_W" => Some(Self::Complete),
            "@DW_STATE_POWER_FAIL_W" => Some(Self::PowerFail),
            _ => None,
        }
    }

    /// Returns an English display string.
    #[must_use]
    pub const fn readable(&self) -> &'static str {
        match self {
            Self::Initial => "Standby",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Off => "Off",
            Self::Complete => "Complete",
            Self::PowerFail => "Power Failed",
        }
    }
}

impl fmt::Display for DishwasherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.readable())
    }
}

/// Step within a running dishwasher programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishwasherProcess {
    /// Waiting for a delayed start.
    Reserve,
    /// Washing.
    Running,
    /// Rinsing.
    Rinsing,
    /// Drying.
    Drying,
    /// Finished.
    Complete,
    /// Night drying.
    NightDrying,
    /// Programme cancelled.
    Cancelled,
}

impl DishwasherProcess {
    /// Parses the enum symbol reported by the appliance.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "@DW_STATE_RESERVE_W" => Some(Self::Reserve),
            "@DW_STATE_RUNNING_W" => Some(Self::Running),
            "@DW_STATE_RINSING_W" => Some(Self::Rinsing),
            "@DW_STATE_DRYING_W" => Some(Self::Drying),
            "@DW_STATE_COMPLETE_W" => Some(Self::Complete),
            "@DW_STATE_NIGHTDRY_W" => Some(Self::NightDrying),
            "@DW_STATE_CANCEL_W" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns an English display string.
    #[must_use]
    pub const fn readable(&self) -> &'static str {
        match self {
            Self::Reserve => "Delayed Start",
            Self::Running => DishwasherState::Running.readable(),
            Self::Rinsing => "Rinsing",
            Self::Drying => "Drying",
            Self::Complete => DishwasherState::Complete.readable(),
            Self::NightDrying => "Night Drying",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for DishwasherProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.readable())
    }
}

/// Decoded status of a dishwasher.
#[derive(Debug, Clone)]
pub struct DishwasherStatus {
    info: Arc<DeviceInfo>,
    snapshot: Snapshot,
}

impl DishwasherStatus {
    pub(crate) fn new(info: Arc<DeviceInfo>, snapshot: Snapshot) -> Self {
        Self { info, snapshot }
    }

    /// Current run state.
    ///
    /// Undocumented codes and unknown symbols decode as
    /// [`DishwasherState::Off`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `State` is absent.
    pub fn state(&self) -> Result<DishwasherState, DecodeError> {
        let symbol = resolve_enum_name("State", &self.snapshot, self.metadata())?;
        Ok(symbol
            .as_deref()
            .and_then(|symbol| {
                let state = DishwasherState::from_symbol(symbol);
                if state.is_none() {
                    tracing::trace!(symbol = %symbol, "Unknown dishwasher state symbol");
                }
                state
            })
            .unwrap_or(DishwasherState::Off))
    }

    /// Current run state as an English display string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `State` is absent.
    pub fn readable_state(&self) -> Result<&'static str, DecodeError> {
        Ok(self.state()?.readable())
    }

    /// Current programme step, `None` between programmes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Process` is absent.
    pub fn process(&self) -> Result<Option<DishwasherProcess>, DecodeError> {
        let symbol = resolve_enum_name("Process", &self.snapshot, self.metadata())?;
        Ok(symbol
            .as_deref()
            .filter(|symbol| *symbol != PROCESS_NONE)
            .and_then(DishwasherProcess::from_symbol))
    }

    /// Current programme step as an English display string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Process` is absent.
    pub fn readable_process(&self) -> Result<Option<&'static str>, DecodeError> {
        Ok(self.process()?.map(|process| process.readable()))
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

    /// Selected course, with known typos in official names corrected.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Course` is absent.
    pub fn course(&self) -> Result<String, DecodeError> {
        let course = resolve_reference_name("Course", &self.snapshot, self.metadata())?;
        Ok(correct(COURSE_CORRECTIONS, &course).map_or(course, str::to_string))
    }

    /// Selected smart course.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `SmartCourse` is absent.
    pub fn smart_course(&self) -> Result<String, DecodeError> {
        resolve_reference_name("SmartCourse", &self.snapshot, self.metadata())
    }

    /// Current error, `"No error"` when the dishwasher reports none.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if `Error` is absent.
    pub fn error(&self) -> Result<String, DecodeError> {
        error_text(&self.snapshot, self.metadata())
    }
}

impl DecodedStatus for DishwasherStatus {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn is_on(&self) -> Result<bool, DecodeError> {
        Ok(self.state()? != DishwasherState::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::NO_ERROR;
    use crate::status::test_support::{info, snapshot};
    use crate::types::DeviceCategory;
    use serde_json::{Value, json};

    fn dishwasher(fields: &Value) -> DishwasherStatus {
        let meta = json!({
            "values": {
                "State": {
                    "options": {
                        "0": "@DW_STATE_POWER_OFF_W",
                        "1": "@DW_STATE_INITIAL_W",
                        "2": "@DW_STATE_RUNNING_W",
                        "6": "@DW_STATE_POWER_FAIL_W",
                        "9": "@DW_STATE_SOMETHING_NEW_W"
                    }
                },
                "Process": {
                    "options": {
                        "0": "-",
                        "1": "@DW_STATE_RESERVE_W",
                        "4": "@DW_STATE_DRYING_W",
                        "5": "@DW_STATE_NIGHTDRY_W"
                    }
                },
                "Course": {
                    "records": {
                        "1": { "name": "Haeavy", "title": "", "comment": "" },
                        "2": { "name": "Eco", "title": "", "comment": "" }
                    }
                },
                "SmartCourse": {
                    "records": { "3": { "name": "Pots", "title": "", "comment": "" } }
                },
                "Error": {
                    "records": {
                        "0": {
                            "name": "ERROR_NOERROR",
                            "title": "ERROR_NOERROR_TITLE",
                            "comment": ""
                        }
                    }
                }
            }
        });
        DishwasherStatus::new(info(DeviceCategory::Dishwasher, meta), snapshot(fields))
    }

    #[test]
    fn state_and_readable_state() {
        let running = dishwasher(&json!({"State": "2"}));
        assert_eq!(running.state().unwrap(), DishwasherState::Running);
        assert_eq!(running.readable_state().unwrap(), "Running");
        assert!(running.is_on().unwrap());

        let failed = dishwasher(&json!({"State": "6"}));
        assert_eq!(failed.readable_state().unwrap(), "Power Failed");
    }

    #[test]
    fn unknown_state_is_off() {
        for code in ["0", "9", "42"] {
            let status = dishwasher(&json!({"State": code}));
            assert_eq!(status.state().unwrap(), DishwasherState::Off, "code {code}");
            assert!(!status.is_on().unwrap());
        }
    }

    #[test]
    fn process() {
        assert_eq!(
            dishwasher(&json!({"Process": "1"})).process().unwrap(),
            Some(DishwasherProcess::Reserve)
        );
        assert_eq!(
            dishwasher(&json!({"Process": "5"}))
                .readable_process()
                .unwrap(),
            Some("Night Drying")
        );
        assert_eq!(dishwasher(&json!({"Process": "0"})).process().unwrap(), None);
        assert_eq!(
            dishwasher(&json!({"Process": "8"}))
                .readable_process()
                .unwrap(),
            None
        );
    }

    #[test]
    fn course_typo_corrected() {
        assert_eq!(dishwasher(&json!({"Course": "1"})).course().unwrap(), "Heavy");
        assert_eq!(dishwasher(&json!({"Course": "2"})).course().unwrap(), "Eco");
    }

    #[test]
    fn smart_course_error_and_times() {
        let status = dishwasher(&json!({
            "SmartCourse": "3",
            "Error": "0",
            "Remain_Time_H": "0",
            "Remain_Time_M": "59",
            "Initial_Time_H": "2",
            "Initial_Time_M": "15",
            "Reserve_Time_H": "4",
            "Reserve_Time_M": "0"
        }));
        assert_eq!(status.smart_course().unwrap(), "Pots");
        assert_eq!(status.error().unwrap(), NO_ERROR);
        assert_eq!(status.remaining_time().unwrap(), 59);
        assert_eq!(status.initial_time().unwrap(), 135);
        assert_eq!(status.reserve_time().unwrap(), 240);
    }

    #[test]
    fn readable_strings() {
        assert_eq!(DishwasherState::Initial.to_string(), "Standby");
        assert_eq!(DishwasherProcess::Running.readable(), "Running");
        assert_eq!(DishwasherProcess::Complete.to_string(), "Complete");
        assert_eq!(
            DishwasherProcess::from_symbol("@DW_STATE_CANCEL_W"),
            Some(DishwasherProcess::Cancelled)
        );
    }
}
