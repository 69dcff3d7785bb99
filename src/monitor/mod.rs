// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Monitoring sessions and the lazy poll contract.
//!
//! Snapshots only flow after a monitoring session has been started for a
//! device. A [`MonitorTransport`] owns the session with the cloud service and
//! hands out the latest payload on a non-blocking [`poll`](MonitorTransport::poll);
//! the [`Device`](crate::Device) handle gates polls on its [`MonitorState`]
//! and reports [`Poll::NotReady`] whenever there is nothing to decode.
//!
//! [`MemoryTransport`] is an in-process transport fed through channels, used
//! for tests and for replaying captured payloads.

mod memory;

pub use memory::{MemoryTransport, SnapshotFeed};

use crate::error::ProtocolError;
use crate::snapshot::RawSnapshot;
use crate::types::DeviceId;

/// Transport boundary: starts monitoring sessions and yields raw snapshots.
#[allow(async_fn_in_trait)]
pub trait MonitorTransport {
    /// Starts a monitoring session for the device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the session cannot be started.
    async fn start_monitoring(&self, device: DeviceId) -> Result<(), ProtocolError>;

    /// Stops the monitoring session for the device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the transport fails to stop the session.
    async fn stop_monitoring(&self, device: DeviceId) -> Result<(), ProtocolError>;

    /// Returns the next available snapshot, or `None` if nothing new is ready.
    ///
    /// Must not block.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the session is broken.
    fn poll(&self, device: DeviceId) -> Result<Option<RawSnapshot>, ProtocolError>;
}

/// Monitoring state of a device handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    /// No session has been started.
    #[default]
    NotMonitoring,
    /// A session is running; polls may yield snapshots.
    MonitoringActive,
}

impl MonitorState {
    /// Returns `true` while a session is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::MonitoringActive)
    }
}

/// Outcome of a poll.
///
/// "Monitoring not started" and "no new data yet" both map to
/// [`Poll::NotReady`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    /// Nothing to decode yet.
    NotReady,
    /// A decoded status for one snapshot.
    Ready(T),
}

impl<T> Poll<T> {
    /// Returns `true` if a value is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Converts into an `Option`.
    #[must_use]
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::NotReady => None,
        }
    }

    /// Maps the ready value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Poll<U> {
        match self {
            Self::Ready(value) => Poll::Ready(f(value)),
            Self::NotReady => Poll::NotReady,
        }
    }
}

impl<T> From<Option<T>> for Poll<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotReady, Self::Ready)
    }
}
