// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process monitoring transport.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use crate::error::ProtocolError;
use crate::snapshot::{RawSnapshot, Snapshot};
use crate::types::DeviceId;

use super::MonitorTransport;

/// A monitoring transport backed by in-memory channels.
///
/// Each device gets a queue fed through a [`SnapshotFeed`]. Payloads are only
/// delivered while a session is active; anything queued before
/// [`start_monitoring`](MonitorTransport::start_monitoring) or after
/// [`stop_monitoring`](MonitorTransport::stop_monitoring) is discarded as
/// stale. A poll returns the most recent payload and drops older ones.
///
/// # Examples
///
/// ```
/// use thinq_lib::monitor::{MemoryTransport, MonitorTransport};
/// use thinq_lib::types::DeviceId;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = MemoryTransport::new();
/// let device = DeviceId::new();
/// let feed = transport.feed(device);
///
/// transport.start_monitoring(device).await?;
/// feed.push_json(r#"{"State": "1"}"#)?;
///
/// assert!(transport.poll(device)?.is_some());
/// assert!(transport.poll(device)?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryTransport {
    queues: Mutex<HashMap<DeviceId, Queue>>,
    active: Arc<Mutex<HashSet<DeviceId>>>,
}

#[derive(Debug)]
struct Queue {
    sender: UnboundedSender<RawSnapshot>,
    receiver: UnboundedReceiver<RawSnapshot>,
}

impl Queue {
    fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Empties the queue, returning the number of payloads dropped.
    fn drain(&mut self) -> usize {
        let mut dropped = 0_usize;
        while self.receiver.try_recv().is_ok() {
            dropped += 1;
        }
        dropped
    }

    /// Takes the newest queued payload, dropping everything older.
    fn latest(&mut self) -> Result<Option<RawSnapshot>, TryRecvError> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) if latest.is_some() => return Ok(latest),
                Err(err) => return Err(err),
            }
        }
    }
}

/// Sending half of a device queue in a [`MemoryTransport`].
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    device: DeviceId,
    sender: UnboundedSender<RawSnapshot>,
    active: Arc<Mutex<HashSet<DeviceId>>>,
}

impl SnapshotFeed {
    /// Returns the device this feed delivers to.
    #[must_use]
    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// Queues a raw snapshot. Dropped if the device is not being monitored.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::ChannelClosed`] if the transport was dropped.
    pub fn push(&self, snapshot: RawSnapshot) -> Result<(), ProtocolError> {
        if !self.active.lock().contains(&self.device) {
            tracing::trace!(device = %self.device, "Dropped payload for unmonitored device");
            return Ok(());
        }
        self.sender
            .send(snapshot)
            .map_err(|_| ProtocolError::ChannelClosed(format!("feed for {}", self.device)))
    }

    /// Parses a JSON payload and queues it.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Transport`] if the payload is not a flat JSON
    /// object, or [`ProtocolError::ChannelClosed`] if the transport was
    /// dropped.
    pub fn push_json(&self, payload: &str) -> Result<(), ProtocolError> {
        let snapshot =
            Snapshot::from_json(payload).map_err(|e| ProtocolError::Transport(e.to_string()))?;
        self.push(snapshot.fields().clone())
    }
}

impl MemoryTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a feed for the device, creating its queue if needed.
    #[must_use]
    pub fn feed(&self, device: DeviceId) -> SnapshotFeed {
        let mut queues = self.queues.lock();
        let queue = queues.entry(device).or_insert_with(Queue::new);
        SnapshotFeed {
            device,
            sender: queue.sender.clone(),
            active: Arc::clone(&self.active),
        }
    }

    /// Returns `true` if a session is active for the device.
    #[must_use]
    pub fn is_monitoring(&self, device: DeviceId) -> bool {
        self.active.lock().contains(&device)
    }
}

impl MonitorTransport for MemoryTransport {
    async fn start_monitoring(&self, device: DeviceId) -> Result<(), ProtocolError> {
        let mut queues = self.queues.lock();
        let stale = queues.entry(device).or_insert_with(Queue::new).drain();
        if stale > 0 {
            tracing::trace!(device = %device, stale, "Discarded payloads queued before monitoring");
        }
        self.active.lock().insert(device);
        Ok(())
    }

    async fn stop_monitoring(&self, device: DeviceId) -> Result<(), ProtocolError> {
        self.active.lock().remove(&device);
        if let Some(queue) = self.queues.lock().get_mut(&device) {
            let unread = queue.drain();
            if unread > 0 {
                tracing::trace!(device = %device, unread, "Discarded unread payloads on stop");
            }
        }
        Ok(())
    }

    fn poll(&self, device: DeviceId) -> Result<Option<RawSnapshot>, ProtocolError> {
        if !self.is_monitoring(device) {
            return Ok(None);
        }
        let mut queues = self.queues.lock();
        let Some(queue) = queues.get_mut(&device) else {
            return Ok(None);
        };
        queue
            .latest()
            .map_err(|_| ProtocolError::ChannelClosed(format!("monitor queue for {device}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(state: &str) -> RawSnapshot {
        let mut raw = RawSnapshot::new();
        raw.insert("State".to_string(), state.to_string());
        raw
    }

    #[tokio::test]
    async fn poll_before_start_is_none() {
        let transport = MemoryTransport::new();
        let device = DeviceId::new();
        let feed = transport.feed(device);
        feed.push(raw("1")).unwrap();

        assert!(transport.poll(device).unwrap().is_none());
    }

    #[tokio::test]
    async fn pushes_before_start_are_dropped() {
        let transport = MemoryTransport::new();
        let device = DeviceId::new();
        let feed = transport.feed(device);
        feed.push(raw("stale")).unwrap();
        assert_eq!(transport.queues.lock().get_mut(&device).unwrap().drain(), 0);

        transport.start_monitoring(device).await.unwrap();
        assert!(transport.poll(device).unwrap().is_none());

        feed.push(raw("fresh")).unwrap();
        let snapshot = transport.poll(device).unwrap().unwrap();
        assert_eq!(snapshot.get("State").map(String::as_str), Some("fresh"));
    }

    #[tokio::test]
    async fn poll_returns_latest_payload() {
        let transport = MemoryTransport::new();
        let device = DeviceId::new();
        let feed = transport.feed(device);
        transport.start_monitoring(device).await.unwrap();

        feed.push(raw("old")).unwrap();
        feed.push(raw("new")).unwrap();

        let latest = transport.poll(device).unwrap().unwrap();
        assert_eq!(latest["State"], "new");
        assert!(transport.poll(device).unwrap().is_none());

        feed.push(raw("newer")).unwrap();
        assert_eq!(transport.poll(device).unwrap().unwrap()["State"], "newer");
    }

    #[tokio::test]
    async fn stop_halts_delivery() {
        let transport = MemoryTransport::new();
        let device = DeviceId::new();
        let feed = transport.feed(device);
        transport.start_monitoring(device).await.unwrap();
        assert!(transport.is_monitoring(device));

        transport.stop_monitoring(device).await.unwrap();
        feed.push(raw("1")).unwrap();
        feed.push(raw("2")).unwrap();
        assert!(!transport.is_monitoring(device));
        assert!(transport.poll(device).unwrap().is_none());
        assert_eq!(transport.queues.lock().get_mut(&device).unwrap().drain(), 0);
    }

    #[tokio::test]
    async fn stop_discards_unread_payloads() {
        let transport = MemoryTransport::new();
        let device = DeviceId::new();
        let feed = transport.feed(device);
        transport.start_monitoring(device).await.unwrap();
        feed.push(raw("unread")).unwrap();

        transport.stop_monitoring(device).await.unwrap();
        assert_eq!(transport.queues.lock().get_mut(&device).unwrap().drain(), 0);
    }

    #[tokio::test]
    async fn devices_are_isolated() {
        let transport = MemoryTransport::new();
        let washer = DeviceId::new();
        let dryer = DeviceId::new();
        let washer_feed = transport.feed(washer);
        transport.start_monitoring(washer).await.unwrap();
        transport.start_monitoring(dryer).await.unwrap();

        washer_feed.push(raw("1")).unwrap();
        assert!(transport.poll(dryer).unwrap().is_none());
        assert!(transport.poll(washer).unwrap().is_some());
    }

    #[test]
    fn push_json_rejects_nested_payload() {
        let transport = MemoryTransport::new();
        let feed = transport.feed(DeviceId::new());
        assert!(matches!(
            feed.push_json(r#"{"State": [1]}"#),
            Err(ProtocolError::Transport(_))
        ));
    }
}
