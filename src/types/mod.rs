// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across the decoding layer.
//!
//! # Types
//!
//! - [`BitState`] - ON/OFF result of a packed option bit
//! - [`DeviceId`] - Cloud identifier of a single appliance
//! - [`DeviceCategory`] - Washer, dryer, dishwasher or dehumidifier
//! - [`WasherKind`] - Front-load or top-load washer
//! - [`DeviceIdentity`] - The (category, sub-type) pair used for variant dispatch

mod bit_state;
mod device_id;
mod identity;

pub use bit_state::BitState;
pub use device_id::DeviceId;
pub use identity::{DeviceCategory, DeviceIdentity, WasherKind};
