//! WebGPU runtime implementation

use super::client::WgpuClient;
use super::device::WgpuDevice;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// WebGPU Runtime adapter
///
/// Implements the generic Runtime trait for the WebGPU backend.
/// Provides cross-platform GPU acceleration.
#[derive(Clone, Debug, Default)]
pub struct WgpuRuntime;

impl Runtime for WgpuRuntime {
    type Device = WgpuDevice;
    type Client = WgpuClient;

    fn name() -> &'static str {
        "wgpu"
    }

    fn default_device() -> Self::Device {
        WgpuDevice::new(0)
    }

    fn default_client(device: &Self::Device) -> Result<Self::Client> {
        WgpuClient::new(device.clone()).map_err(|e| Error::Backend(e.to_string()))
    }
}
