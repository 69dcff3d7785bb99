// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Variant dispatch for washer attributes.
//!
//! Front-load and top-load washers expose the same logical attributes under
//! different field names and bit positions, and some attributes exist on only
//! one of them. [`washer_rule`] is the single table that resolves an
//! attribute for a washer kind; it is an exhaustive match, so adding an
//! attribute or a kind without a rule does not compile.
//!
//! | Attribute | Front-load | Top-load |
//! |---|---|---|
//! | course | `APCourse` | `Course` |
//! | water temperature | `WaterTemp` | `WTemp` |
//! | dry level | `DryLevel` | unavailable |
//! | water level | unavailable | `WLevel` |
//! | water flow | unavailable | `WFlow` |
//! | soak | unavailable | `Soak` |
//! | fresh care | `Option1` bit 4 | unavailable |
//! | child lock | `Option1` bit 3 | `Option1` bit 0 |
//! | door lock | unavailable | `Option1` bit 3 |
//! | steam | `Option1` bit 4 | `Option1` bit 2 |
//! | turbo shot | `Option2` bit 7 | `Option2` bit 3 |
//! | buzzer | unavailable | `Option2` bit 0 |
//! | sterilize | unavailable | `Option2` bit 1 |
//! | heater | unavailable | `Option2` bit 2 |

use std::fmt;

use crate::decode::{UNAVAILABLE, decode_bit, resolve_enum_lang, resolve_reference_name};
use crate::error::DecodeError;
use crate::metadata::ModelMetadata;
use crate::snapshot::Snapshot;
use crate::types::{BitState, WasherKind};

/// Washer attributes whose source depends on the washer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasherAttribute {
    /// Selected course.
    Course,
    /// Water temperature setting.
    WaterTemperature,
    /// Dry level setting.
    DryLevel,
    /// Water level setting.
    WaterLevel,
    /// Water flow setting.
    WaterFlow,
    /// Soak setting.
    Soak,
    /// Fresh-care option.
    FreshCare,
    /// Child lock option.
    ChildLock,
    /// Door lock option.
    DoorLock,
    /// Steam option.
    Steam,
    /// Turbo shot option.
    TurboShot,
    /// Buzzer option.
    Buzzer,
    /// Sterilize option.
    Sterilize,
    /// Heater option.
    Heater,
}

impl WasherAttribute {
    /// Every dispatched attribute.
    pub const ALL: [Self; 14] = [
        Self::Course,
        Self::WaterTemperature,
        Self::DryLevel,
        Self::WaterLevel,
        Self::WaterFlow,
        Self::Soak,
        Self::FreshCare,
        Self::ChildLock,
        Self::DoorLock,
        Self::Steam,
        Self::TurboShot,
        Self::Buzzer,
        Self::Sterilize,
        Self::Heater,
    ];
}

/// How a looked-up field is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Localized enum display string.
    EnumLang,
    /// Localized reference record name.
    ReferenceName,
}

/// Where a logical attribute comes from on a given device variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Translate a field through the model tables.
    Lookup {
        /// Snapshot field name.
        field: &'static str,
        /// Translation to apply.
        kind: LookupKind,
    },
    /// Read one bit of an option bitmask.
    Bit {
        /// Snapshot field name.
        field: &'static str,
        /// Zero-based bit position.
        bit: u32,
    },
    /// The attribute does not exist on this variant.
    Inapplicable,
}

/// A decoded dispatched attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Display string from a lookup.
    Text(String),
    /// State of an option bit.
    Flag(BitState),
    /// The attribute does not exist on this variant.
    Unavailable,
}

impl AttributeValue {
    /// Returns the bit state, if this is a flag.
    #[must_use]
    pub fn as_flag(&self) -> Option<BitState> {
        match self {
            Self::Flag(state) => Some(*state),
            _ => None,
        }
    }

    /// Returns `true` if the attribute does not exist on this variant.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(state) => f.write_str(state.as_str()),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

const fn lookup(field: &'static str, kind: LookupKind) -> FieldRule {
    FieldRule::Lookup { field, kind }
}

const fn bit(field: &'static str, bit: u32) -> FieldRule {
    FieldRule::Bit { field, bit }
}

/// Returns the rule for a washer attribute on a washer kind.
#[must_use]
pub const fn washer_rule(attribute: WasherAttribute, kind: WasherKind) -> FieldRule {
    match (attribute, kind) {
        (WasherAttribute::Course, WasherKind::FrontLoad) => {
            lookup("APCourse", LookupKind::ReferenceName)
        }
        (WasherAttribute::Course, WasherKind::TopLoad) => {
            lookup("Course", LookupKind::ReferenceName)
        }
        (WasherAttribute::WaterTemperature, WasherKind::FrontLoad) => {
            lookup("WaterTemp", LookupKind::EnumLang)
        }
        (WasherAttribute::WaterTemperature, WasherKind::TopLoad) => {
            lookup("WTemp", LookupKind::EnumLang)
        }
        (WasherAttribute::DryLevel, WasherKind::FrontLoad) => {
            lookup("DryLevel", LookupKind::EnumLang)
        }
        (WasherAttribute::WaterLevel, WasherKind::TopLoad) => {
            lookup("WLevel", LookupKind::EnumLang)
        }
        (WasherAttribute::WaterFlow, WasherKind::TopLoad) => lookup("WFlow", LookupKind::EnumLang),
        (WasherAttribute::Soak, WasherKind::TopLoad) => lookup("Soak", LookupKind::EnumLang),
        (WasherAttribute::FreshCare | WasherAttribute::Steam, WasherKind::FrontLoad) => {
            bit("Option1", 4)
        }
        (WasherAttribute::ChildLock, WasherKind::FrontLoad)
        | (WasherAttribute::DoorLock, WasherKind::TopLoad) => bit("Option1", 3),
        (WasherAttribute::ChildLock, WasherKind::TopLoad) => bit("Option1", 0),
        (WasherAttribute::Steam, WasherKind::TopLoad) => bit("Option1", 2),
        (WasherAttribute::TurboShot, WasherKind::FrontLoad) => bit("Option2", 7),
        (WasherAttribute::TurboShot, WasherKind::TopLoad) => bit("Option2", 3),
        (WasherAttribute::Buzzer, WasherKind::TopLoad) => bit("Option2", 0),
        (WasherAttribute::Sterilize, WasherKind::TopLoad) => bit("Option2", 1),
        (WasherAttribute::Heater, WasherKind::TopLoad) => bit("Option2", 2),
        (WasherAttribute::DryLevel | WasherAttribute::FreshCare, WasherKind::TopLoad)
        | (
            WasherAttribute::WaterLevel
            | WasherAttribute::WaterFlow
            | WasherAttribute::Soak
            | WasherAttribute::DoorLock
            | WasherAttribute::Buzzer
            | WasherAttribute::Sterilize
            | WasherAttribute::Heater,
            WasherKind::FrontLoad,
        ) => FieldRule::Inapplicable,
    }
}

impl FieldRule {
    /// Applies the rule to a snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the selected field is missing, or is not
    /// an integer for bit rules. Inapplicable rules never fail.
    pub fn decode(
        &self,
        snapshot: &Snapshot,
        metadata: &ModelMetadata,
    ) -> Result<AttributeValue, DecodeError> {
        match *self {
            Self::Lookup {
                field,
                kind: LookupKind::EnumLang,
            } => resolve_enum_lang(field, snapshot, metadata).map(AttributeValue::Text),
            Self::Lookup {
                field,
                kind: LookupKind::ReferenceName,
            } => resolve_reference_name(field, snapshot, metadata).map(AttributeValue::Text),
            Self::Bit { field, bit } => decode_bit(snapshot, field, bit).map(AttributeValue::Flag),
            Self::Inapplicable => Ok(AttributeValue::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [WasherKind; 2] = [WasherKind::FrontLoad, WasherKind::TopLoad];

    #[test]
    fn course_field_depends_on_kind() {
        assert_eq!(
            washer_rule(WasherAttribute::Course, WasherKind::FrontLoad),
            lookup("APCourse", LookupKind::ReferenceName)
        );
        assert_eq!(
            washer_rule(WasherAttribute::Course, WasherKind::TopLoad),
            lookup("Course", LookupKind::ReferenceName)
        );
    }

    #[test]
    fn bit_positions() {
        assert_eq!(
            washer_rule(WasherAttribute::ChildLock, WasherKind::FrontLoad),
            bit("Option1", 3)
        );
        assert_eq!(
            washer_rule(WasherAttribute::ChildLock, WasherKind::TopLoad),
            bit("Option1", 0)
        );
        assert_eq!(
            washer_rule(WasherAttribute::TurboShot, WasherKind::FrontLoad),
            bit("Option2", 7)
        );
        assert_eq!(
            washer_rule(WasherAttribute::Heater, WasherKind::TopLoad),
            bit("Option2", 2)
        );
    }

    #[test]
    fn front_load_inapplicable_attributes() {
        for attribute in [
            WasherAttribute::WaterLevel,
            WasherAttribute::WaterFlow,
            WasherAttribute::Soak,
            WasherAttribute::DoorLock,
            WasherAttribute::Buzzer,
            WasherAttribute::Sterilize,
            WasherAttribute::Heater,
        ] {
            assert_eq!(
                washer_rule(attribute, WasherKind::FrontLoad),
                FieldRule::Inapplicable,
                "{attribute:?}"
            );
        }
    }

    #[test]
    fn top_load_inapplicable_attributes() {
        for attribute in [WasherAttribute::DryLevel, WasherAttribute::FreshCare] {
            assert_eq!(
                washer_rule(attribute, WasherKind::TopLoad),
                FieldRule::Inapplicable
            );
        }
    }

    #[test]
    fn every_attribute_available_on_some_kind() {
        for attribute in WasherAttribute::ALL {
            assert!(
                KINDS
                    .iter()
                    .any(|kind| washer_rule(attribute, *kind) != FieldRule::Inapplicable),
                "{attribute:?} has no source on any washer kind"
            );
        }
    }

    #[test]
    fn inapplicable_decodes_without_touching_snapshot() {
        let snapshot = Snapshot::new(crate::snapshot::RawSnapshot::new());
        let value = FieldRule::Inapplicable
            .decode(&snapshot, &ModelMetadata::default())
            .unwrap();
        assert!(value.is_unavailable());
        assert_eq!(value.to_string(), UNAVAILABLE);
    }

    #[test]
    fn bit_rule_decodes_flag() {
        let snapshot = Snapshot::from_json(r#"{"Option2": "128"}"#).unwrap();
        let value = washer_rule(WasherAttribute::TurboShot, WasherKind::FrontLoad)
            .decode(&snapshot, &ModelMetadata::default())
            .unwrap();
        assert_eq!(value.as_flag(), Some(BitState::On));
        assert_eq!(value.to_string(), "ON");
    }

    #[test]
    fn attribute_value_display() {
        assert_eq!(AttributeValue::Text("Cold".to_string()).to_string(), "Cold");
        assert_eq!(AttributeValue::Flag(BitState::Off).to_string(), "OFF");
        assert_eq!(AttributeValue::Text("x".to_string()).as_flag(), None);
    }
}
