// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw status snapshots polled from an appliance.
//!
//! A snapshot is the decoded monitoring payload: a flat mapping from field
//! name (`"State"`, `"Option1"`, `"Remain_Time_H"`, ...) to the raw scalar
//! the appliance reported. Values are kept as strings because the cloud mixes
//! quoted and unquoted numbers for the same field across models.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::DecodeError;

/// Raw field map as delivered by a monitoring transport.
pub type RawSnapshot = HashMap<String, String>;

/// An immutable snapshot of one poll.
///
/// Cloning is cheap; every clone shares the same field map.
///
/// # Examples
///
/// ```
/// use thinq_lib::Snapshot;
///
/// let snapshot = Snapshot::from_json(r#"{"Remain_Time_H": 1, "Remain_Time_M": "25"}"#).unwrap();
/// assert_eq!(snapshot.minutes("Remain_Time_H", "Remain_Time_M").unwrap(), 85);
/// ```
#[derive(Debug, Clone)]
pub struct Snapshot {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    fields: RawSnapshot,
    received_at: DateTime<Utc>,
}

/// A JSON scalar accepted as a snapshot value.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

impl Snapshot {
    /// Wraps a raw field map, stamping it with the current time.
    #[must_use]
    pub fn new(fields: RawSnapshot) -> Self {
        Self {
            inner: Arc::new(Inner {
                fields,
                received_at: Utc::now(),
            }),
        }
    }

    /// Parses a flat JSON object of scalars into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON object whose values are
    /// all strings, numbers or booleans.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Scalar> = serde_json::from_str(payload)?;
        Ok(Self::new(
            raw.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }

    /// Returns the raw value of a field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent.
    pub fn get(&self, field: &str) -> Result<&str, DecodeError> {
        self.inner
            .fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| DecodeError::FieldMissing(field.to_string()))
    }

    /// Returns a field parsed as a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::FieldMissing`] if the field is absent and
    /// [`DecodeError::MalformedValue`] if it is not an integer.
    pub fn get_int(&self, field: &str) -> Result<i64, DecodeError> {
        self.parse_field(field)
    }

    /// Combines an hour field and a minute field into minutes (`H*60+M`).
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if either field is missing or is not a
    /// non-negative integer, or [`DecodeError::MalformedValue`] on the hour
    /// field if the total does not fit in a `u32`.
    pub fn minutes(&self, hours_field: &str, minutes_field: &str) -> Result<u32, DecodeError> {
        let hours: u32 = self.parse_field(hours_field)?;
        let minutes: u32 = self.parse_field(minutes_field)?;
        hours
            .checked_mul(60)
            .and_then(|total| total.checked_add(minutes))
            .ok_or_else(|| DecodeError::MalformedValue {
                field: hours_field.to_string(),
                value: hours.to_string(),
            })
    }

    /// Returns `true` if the snapshot contains the field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.inner.fields.contains_key(field)
    }

    /// Returns the number of fields in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    /// Returns `true` if the snapshot has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Returns the raw field map.
    #[must_use]
    pub fn fields(&self) -> &RawSnapshot {
        &self.inner.fields
    }

    /// Returns when this snapshot was received.
    #[must_use]
    pub fn received_at(&self) -> DateTime<Utc> {
        self.inner.received_at
    }

    fn parse_field<T: FromStr>(&self, field: &str) -> Result<T, DecodeError> {
        let raw = self.get(field)?;
        raw.trim().parse().map_err(|_| DecodeError::MalformedValue {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }
}

impl From<RawSnapshot> for Snapshot {
    fn from(fields: RawSnapshot) -> Self {
        Self::new(fields)
    }
}
