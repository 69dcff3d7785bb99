// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-flag decoding for packed option fields.

use crate::error::DecodeError;
use crate::snapshot::Snapshot;
use crate::types::BitState;

/// Decodes bit `bit_index` (zero-based) of an integer-encoded field.
///
/// Bit positions past the width of the value read as [`BitState::Off`].
///
/// # Errors
///
/// Returns [`DecodeError::FieldMissing`] if the field is absent and
/// [`DecodeError::MalformedValue`] if it is not an integer.
///
/// # Examples
///
/// ```
/// use thinq_lib::Snapshot;
/// use thinq_lib::decode::decode_bit;
/// use thinq_lib::types::BitState;
///
/// let snapshot = Snapshot::from_json(r#"{"Option1": "24"}"#).unwrap();
/// assert_eq!(decode_bit(&snapshot, "Option1", 3).unwrap(), BitState::On);
/// assert_eq!(decode_bit(&snapshot, "Option1", 0).unwrap(), BitState::Off);
/// ```
pub fn decode_bit(
    snapshot: &Snapshot,
    field: &str,
    bit_index: u32,
) -> Result<BitState, DecodeError> {
    let value = snapshot.get_int(field)?;
    let bit = value.checked_shr(bit_index).unwrap_or(0) & 1;
    Ok(BitState::from(bit != 0))
}
