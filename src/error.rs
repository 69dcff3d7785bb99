// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ThinQ` library.
//!
//! Only genuine mismatches between a snapshot and the caller's expectations
//! are errors. Codes missing from the model metadata, localization misses,
//! attributes that do not apply to a device variant and polls that have no
//! data yet all resolve to sentinel values instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while decoding a snapshot field.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error occurred while loading model metadata or device configuration.
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error reported by the monitoring transport.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors raised while decoding a single snapshot field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The snapshot does not contain the requested field.
    #[error("missing field in snapshot: {0}")]
    FieldMissing(String),

    /// The field exists but is not an integer.
    #[error("field {field} is not an integer: {value:?}")]
    MalformedValue {
        /// The field that failed to parse.
        field: String,
        /// The raw value found in the snapshot.
        value: String,
    },
}

/// Errors related to model metadata and device configuration.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The appliance category is not one this library decodes.
    #[error("unknown appliance category: {0}")]
    UnknownCategory(String),

    /// The washer sub-type is not recognized.
    #[error("unknown washer kind: {0}")]
    UnknownWasherKind(String),
}

/// Errors reported by a monitoring transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The transport failed to talk to the cloud service.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Internal channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_missing_display() {
        let err = DecodeError::FieldMissing("Option1".to_string());
        assert_eq!(err.to_string(), "missing field in snapshot: Option1");
    }

    #[test]
    fn malformed_value_display() {
        let err = DecodeError::MalformedValue {
            field: "Option1".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "field Option1 is not an integer: \"abc\"");
    }

    #[test]
    fn error_from_decode_error() {
        let err: Error = DecodeError::FieldMissing("State".to_string()).into();
        assert!(matches!(err, Error::Decode(DecodeError::FieldMissing(f)) if f == "State"));
    }

    #[test]
    fn metadata_error_display() {
        let err = MetadataError::UnknownCategory("OVEN".to_string());
        assert_eq!(err.to_string(), "unknown appliance category: OVEN");
    }
}
