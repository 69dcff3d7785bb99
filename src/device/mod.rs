// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device handles and the monitoring poll gate.
//!
//! A [`Device`] owns one appliance's monitoring session. Polls return
//! [`Poll::NotReady`] until [`Device::start_monitoring`] has been called and
//! the transport has produced a payload; each payload is then wrapped in the
//! [`ApplianceStatus`] facade matching the appliance.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use thinq_lib::monitor::{MemoryTransport, Poll};
//! use thinq_lib::metadata::ModelMetadata;
//! use thinq_lib::types::{DeviceCategory, DeviceId};
//! use thinq_lib::{Device, DeviceConfig};
//!
//! # async fn example(metadata: ModelMetadata) -> thinq_lib::Result<()> {
//! let transport = Arc::new(MemoryTransport::new());
//! let config = DeviceConfig::new(DeviceId::new(), "Laundry", DeviceCategory::Washer);
//! let mut device = Device::new(&config, Arc::new(metadata), transport);
//!
//! device.start_monitoring().await?;
//! if let Poll::Ready(status) = device.poll()? {
//!     if let Some(washer) = status.as_washer() {
//!         println!("{}", washer.state()?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::DeviceConfig;

use std::sync::Arc;

use crate::error::Error;
use crate::metadata::ModelMetadata;
use crate::monitor::{MonitorState, MonitorTransport, Poll};
use crate::snapshot::Snapshot;
use crate::status::ApplianceStatus;
use crate::types::{DeviceId, DeviceIdentity};

/// Immutable description of an appliance shared by its status objects.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    id: DeviceId,
    name: String,
    model_type: String,
    identity: DeviceIdentity,
    metadata: Arc<ModelMetadata>,
}

impl DeviceInfo {
    /// Builds device information from a configuration and model metadata.
    #[must_use]
    pub fn new(config: &DeviceConfig, metadata: Arc<ModelMetadata>) -> Self {
        let model_type = config
            .model_type
            .clone()
            .unwrap_or_else(|| metadata.model_type().to_string());
        Self {
            id: config.id,
            name: config.name.clone(),
            identity: DeviceIdentity::new(config.category, &model_type),
            model_type,
            metadata,
        }
    }

    /// Returns the cloud identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the user-facing name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the model type code.
    #[must_use]
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// Returns the (category, sub-type) identity.
    #[must_use]
    pub fn identity(&self) -> DeviceIdentity {
        self.identity
    }

    /// Returns the model metadata.
    #[must_use]
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

/// Handle for one monitored appliance.
#[derive(Debug)]
pub struct Device<T: MonitorTransport> {
    info: Arc<DeviceInfo>,
    transport: Arc<T>,
    state: MonitorState,
}

impl<T: MonitorTransport> Device<T> {
    /// Creates a handle. Monitoring is not started.
    #[must_use]
    pub fn new(config: &DeviceConfig, metadata: Arc<ModelMetadata>, transport: Arc<T>) -> Self {
        Self {
            info: Arc::new(DeviceInfo::new(config, metadata)),
            transport,
            state: MonitorState::NotMonitoring,
        }
    }

    /// Returns the device information.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Returns the cloud identifier.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.info.id()
    }

    /// Returns the (category, sub-type) identity.
    #[must_use]
    pub fn identity(&self) -> DeviceIdentity {
        self.info.identity()
    }

    /// Returns the monitoring state.
    #[must_use]
    pub fn monitor_state(&self) -> MonitorState {
        self.state
    }

    /// Starts the monitoring session. Does nothing if already monitoring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the transport cannot start a session.
    pub async fn start_monitoring(&mut self) -> Result<(), Error> {
        if self.state.is_active() {
            return Ok(());
        }
        self.transport.start_monitoring(self.id()).await?;
        self.state = MonitorState::MonitoringActive;
        tracing::debug!(device = %self.id(), name = %self.info.name(), "Monitoring started");
        Ok(())
    }

    /// Stops the monitoring session. Later polls return [`Poll::NotReady`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the transport fails to stop the session.
    pub async fn stop_monitoring(&mut self) -> Result<(), Error> {
        if !self.state.is_active() {
            return Ok(());
        }
        self.transport.stop_monitoring(self.id()).await?;
        self.state = MonitorState::NotMonitoring;
        tracing::debug!(device = %self.id(), "Monitoring stopped");
        Ok(())
    }

    /// Reads the latest snapshot without blocking.
    ///
    /// Returns [`Poll::NotReady`] if monitoring has not been started or no
    /// new payload is available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] if the transport reports a broken session.
    pub fn poll(&self) -> Result<Poll<ApplianceStatus>, Error> {
        if !self.state.is_active() {
            tracing::trace!(device = %self.id(), "Poll before monitoring started");
            return Ok(Poll::NotReady);
        }
        let Some(raw) = self.transport.poll(self.id())? else {
            tracing::trace!(device = %self.id(), "No snapshot ready");
            return Ok(Poll::NotReady);
        };
        tracing::trace!(device = %self.id(), fields = raw.len(), "Snapshot received");
        Ok(Poll::Ready(ApplianceStatus::decode(
            Arc::clone(&self.info),
            Snapshot::new(raw),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::monitor::MemoryTransport;
    use crate::snapshot::RawSnapshot;
    use crate::types::{DeviceCategory, WasherKind};

    /// Transport whose session cannot be torn down.
    struct StuckTransport;

    impl MonitorTransport for StuckTransport {
        async fn start_monitoring(&self, _device: DeviceId) -> Result<(), ProtocolError> {
            Ok(())
        }

        async fn stop_monitoring(&self, _device: DeviceId) -> Result<(), ProtocolError> {
            Err(ProtocolError::Transport("session refused to close".to_string()))
        }

        fn poll(&self, _device: DeviceId) -> Result<Option<RawSnapshot>, ProtocolError> {
            Ok(None)
        }
    }

    fn metadata(model_type: &str) -> Arc<ModelMetadata> {
        Arc::new(
            ModelMetadata::from_value(serde_json::json!({ "modelType": model_type })).unwrap(),
        )
    }

    #[test]
    fn info_uses_metadata_model_type() {
        let config = DeviceConfig::new(DeviceId::new(), "Laundry", DeviceCategory::Washer);
        let info = DeviceInfo::new(&config, metadata("TL"));
        assert_eq!(info.model_type(), "TL");
        assert_eq!(info.identity(), DeviceIdentity::Washer(WasherKind::TopLoad));
    }

    #[test]
    fn info_model_type_override() {
        let config = DeviceConfig::new(DeviceId::new(), "Laundry", DeviceCategory::Washer)
            .with_model_type("FL");
        let info = DeviceInfo::new(&config, metadata("TL"));
        assert_eq!(info.model_type(), "FL");
        assert_eq!(info.identity(), DeviceIdentity::Washer(WasherKind::FrontLoad));
    }

    #[tokio::test]
    async fn poll_before_start_is_not_ready() {
        let transport = Arc::new(MemoryTransport::new());
        let config = DeviceConfig::new(DeviceId::new(), "Dryer", DeviceCategory::Dryer);
        let device = Device::new(&config, metadata("DRY"), Arc::clone(&transport));

        transport.feed(device.id()).push_json(r#"{"State": "1"}"#).unwrap();

        assert_eq!(device.monitor_state(), MonitorState::NotMonitoring);
        assert!(!device.poll().unwrap().is_ready());
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let transport = Arc::new(MemoryTransport::new());
        let config = DeviceConfig::new(DeviceId::new(), "Dryer", DeviceCategory::Dryer);
        let mut device = Device::new(&config, metadata("DRY"), Arc::clone(&transport));
        let feed = transport.feed(device.id());

        device.start_monitoring().await.unwrap();
        feed.push_json(r#"{"State": "1"}"#).unwrap();
        device.start_monitoring().await.unwrap();

        assert!(device.poll().unwrap().is_ready());
    }

    #[tokio::test]
    async fn stop_returns_to_not_monitoring() {
        let transport = Arc::new(MemoryTransport::new());
        let config = DeviceConfig::new(DeviceId::new(), "Dryer", DeviceCategory::Dryer);
        let mut device = Device::new(&config, metadata("DRY"), Arc::clone(&transport));
        let feed = transport.feed(device.id());

        device.start_monitoring().await.unwrap();
        device.stop_monitoring().await.unwrap();
        feed.push_json(r#"{"State": "1"}"#).unwrap();

        assert_eq!(device.monitor_state(), MonitorState::NotMonitoring);
        assert!(!device.poll().unwrap().is_ready());
    }

    #[tokio::test]
    async fn failed_stop_keeps_monitoring() {
        let config = DeviceConfig::new(DeviceId::new(), "Dryer", DeviceCategory::Dryer);
        let mut device = Device::new(&config, metadata("DRY"), Arc::new(StuckTransport));
        device.start_monitoring().await.unwrap();

        assert!(matches!(
            device.stop_monitoring().await,
            Err(Error::Protocol(ProtocolError::Transport(_)))
        ));
        assert_eq!(device.monitor_state(), MonitorState::MonitoringActive);
    }
}
