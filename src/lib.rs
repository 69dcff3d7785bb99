// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ThinQ` Lib - decodes status snapshots from cloud-connected LG appliances.
//!
//! Appliances report their status as flat maps of raw codes. This library
//! turns one such snapshot into a typed, human-readable view using the
//! appliance model's metadata (enum tables, reference tables and language
//! packs) and the appliance variant.
//!
//! # Supported Appliances
//!
//! - **Washers**: front-load and top-load, with variant-specific fields and option bits
//! - **Dryers**: state, dry level, courses, times, errors
//! - **Dishwashers**: typed state and process, courses, times, errors
//! - **Dehumidifiers**: power, modes, humidity readings
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use thinq_lib::monitor::{MemoryTransport, Poll};
//! use thinq_lib::metadata::ModelMetadata;
//! use thinq_lib::types::{DeviceCategory, DeviceId};
//! use thinq_lib::{Device, DeviceConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> thinq_lib::Result<()> {
//! let metadata = ModelMetadata::from_json(r#"{
//!     "modelType": "FL",
//!     "values": { "State": { "options": { "1": "@WM_STATE_RUNNING_W" } } },
//!     "langProduct": { "pack": { "@WM_STATE_RUNNING_W": "Washing" } }
//! }"#)?;
//!
//! let transport = Arc::new(MemoryTransport::new());
//! let config = DeviceConfig::new(DeviceId::new(), "Laundry", DeviceCategory::Washer);
//! let mut device = Device::new(&config, Arc::new(metadata), Arc::clone(&transport));
//!
//! // Nothing is decoded before monitoring starts.
//! assert!(!device.poll()?.is_ready());
//!
//! device.start_monitoring().await?;
//! transport.feed(device.id()).push_json(r#"{"State": "1", "Option1": "24"}"#)?;
//!
//! if let Poll::Ready(status) = device.poll()? {
//!     let washer = status.as_washer().expect("configured as a washer");
//!     assert_eq!(washer.state()?, "Washing");
//!     assert_eq!(washer.child_lock()?.to_string(), "ON");
//!     assert_eq!(washer.door_lock()?.to_string(), "unavailable");
//! }
//! # Ok(())
//! # }
//! ```

pub mod decode;
mod device;
pub mod dispatch;
pub mod error;
pub mod metadata;
pub mod monitor;
mod snapshot;
pub mod status;
pub mod types;

pub use device::{Device, DeviceConfig, DeviceInfo};
pub use dispatch::{AttributeValue, FieldRule, WasherAttribute};
pub use error::{DecodeError, Error, MetadataError, ProtocolError, Result};
pub use metadata::ModelMetadata;
pub use monitor::{MonitorState, MonitorTransport, Poll};
pub use snapshot::{RawSnapshot, Snapshot};
pub use status::{
    ApplianceStatus, DecodedStatus, DehumidifierStatus, DishwasherStatus, DryerStatus,
    WasherStatus,
};
pub use types::{BitState, DeviceCategory, DeviceId, DeviceIdentity, WasherKind};
