// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field decoders.
//!
//! - [`decode_bit`] reads one flag out of an integer option bitmask.
//! - The `resolve_*` functions translate raw codes through the model's enum
//!   and reference tables and localize the result through the language packs.
//!
//! Both work on a [`Snapshot`](crate::Snapshot) and never mutate it.

mod bit;
mod lookup;

pub use bit::decode_bit;
pub use lookup::{
    LocalizationPolicy, NO_ERROR, NO_ERROR_TITLE, OFF, ON, OPERATION_OFF, OPERATION_ON,
    ReferenceAttribute, UNAVAILABLE, resolve_enum_lang, resolve_enum_name, resolve_reference,
    resolve_reference_comment, resolve_reference_name, resolve_reference_title,
};
