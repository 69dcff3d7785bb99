// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance category and sub-type.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::MetadataError;

/// Appliance category decoded by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DeviceCategory {
    /// Washing machine.
    Washer,
    /// Tumble dryer.
    Dryer,
    /// Dishwasher.
    Dishwasher,
    /// Dehumidifier.
    Dehumidifier,
}

impl DeviceCategory {
    /// Returns the category name as used by the cloud device list.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Washer => "WASHER",
            Self::Dryer => "DRYER",
            Self::Dishwasher => "DISHWASHER",
            Self::Dehumidifier => "DEHUMIDIFIER",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WASHER" => Ok(Self::Washer),
            "DRYER" => Ok(Self::Dryer),
            "DISHWASHER" => Ok(Self::Dishwasher),
            "DEHUMIDIFIER" | "DEHUM" => Ok(Self::Dehumidifier),
            _ => Err(MetadataError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeviceCategory {
    type Error = MetadataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Washer sub-type.
///
/// Front-load and top-load washers report the same logical attributes under
/// different field names and bit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasherKind {
    /// Front-loading drum washer.
    FrontLoad,
    /// Top-loading washer.
    TopLoad,
}

impl WasherKind {
    /// Derives the washer kind from the model type reported by the metadata.
    ///
    /// Only `"TL"` denotes a top-loader; every other model type decodes as a
    /// front-loader.
    ///
    /// # Examples
    ///
    /// ```
    /// use thinq_lib::types::WasherKind;
    ///
    /// assert_eq!(WasherKind::from_model_type("TL"), WasherKind::TopLoad);
    /// assert_eq!(WasherKind::from_model_type("FL"), WasherKind::FrontLoad);
    /// ```
    #[must_use]
    pub fn from_model_type(model_type: &str) -> Self {
        if model_type == "TL" {
            Self::TopLoad
        } else {
            Self::FrontLoad
        }
    }

    /// Returns the short model type code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontLoad => "FL",
            Self::TopLoad => "TL",
        }
    }
}

impl FromStr for WasherKind {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FL" | "FRONT_LOAD" | "FRONT-LOAD" => Ok(Self::FrontLoad),
            "TL" | "TOP_LOAD" | "TOP-LOAD" => Ok(Self::TopLoad),
            _ => Err(MetadataError::UnknownWasherKind(s.to_string())),
        }
    }
}

/// The (category, sub-type) pair that selects variant rules.
///
/// Only washers carry a sub-type, so it lives inside the washer variant.
/// The identity never changes for the lifetime of a device handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceIdentity {
    /// A washer of the given kind.
    Washer(WasherKind),
    /// A dryer.
    Dryer,
    /// A dishwasher.
    Dishwasher,
    /// A dehumidifier.
    Dehumidifier,
}

impl DeviceIdentity {
    /// Builds the identity from a category and the model type code.
    #[must_use]
    pub fn new(category: DeviceCategory, model_type: &str) -> Self {
        match category {
            DeviceCategory::Washer => Self::Washer(WasherKind::from_model_type(model_type)),
            DeviceCategory::Dryer => Self::Dryer,
            DeviceCategory::Dishwasher => Self::Dishwasher,
            DeviceCategory::Dehumidifier => Self::Dehumidifier,
        }
    }

    /// Returns the appliance category.
    #[must_use]
    pub const fn category(&self) -> DeviceCategory {
        match self {
            Self::Washer(_) => DeviceCategory::Washer,
            Self::Dryer => DeviceCategory::Dryer,
            Self::Dishwasher => DeviceCategory::Dishwasher,
            Self::Dehumidifier => DeviceCategory::Dehumidifier,
        }
    }

    /// Returns the washer kind, if this is a washer.
    #[must_use]
    pub const fn washer_kind(&self) -> Option<WasherKind> {
        match self {
            Self::Washer(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_str() {
        assert_eq!("washer".parse::<DeviceCategory>().unwrap(), DeviceCategory::Washer);
        assert_eq!("DRYER".parse::<DeviceCategory>().unwrap(), DeviceCategory::Dryer);
        assert_eq!(
            "Dehum".parse::<DeviceCategory>().unwrap(),
            DeviceCategory::Dehumidifier
        );
        assert!(matches!(
            "OVEN".parse::<DeviceCategory>(),
            Err(MetadataError::UnknownCategory(_))
        ));
    }

    #[test]
    fn category_deserialize() {
        let category: DeviceCategory = serde_json::from_str(r#""DISHWASHER""#).unwrap();
        assert_eq!(category, DeviceCategory::Dishwasher);
        assert!(serde_json::from_str::<DeviceCategory>(r#""FRIDGE""#).is_err());
    }

    #[test]
    fn washer_kind_from_model_type() {
        assert_eq!(WasherKind::from_model_type("TL"), WasherKind::TopLoad);
        assert_eq!(WasherKind::from_model_type("FL"), WasherKind::FrontLoad);
        assert_eq!(WasherKind::from_model_type(""), WasherKind::FrontLoad);
    }

    #[test]
    fn washer_kind_from_str() {
        assert_eq!("top-load".parse::<WasherKind>().unwrap(), WasherKind::TopLoad);
        assert!("side".parse::<WasherKind>().is_err());
    }

    #[test]
    fn identity_new() {
        assert_eq!(
            DeviceIdentity::new(DeviceCategory::Washer, "TL"),
            DeviceIdentity::Washer(WasherKind::TopLoad)
        );
        assert_eq!(
            DeviceIdentity::new(DeviceCategory::Dryer, "TL"),
            DeviceIdentity::Dryer
        );
    }

    #[test]
    fn identity_accessors() {
        let washer = DeviceIdentity::Washer(WasherKind::FrontLoad);
        assert_eq!(washer.category(), DeviceCategory::Washer);
        assert_eq!(washer.washer_kind(), Some(WasherKind::FrontLoad));
        assert_eq!(DeviceIdentity::Dishwasher.washer_kind(), None);
    }
}
