//! CPU client implementation

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::runtime::RuntimeClient;

/// CPU client for operation dispatch
///
/// Carries the launch configuration for CPU kernels: the number of worker
/// lanes the grid-stride loop is partitioned across.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    lanes: usize,
}

impl CpuClient {
    /// Create a new CPU client with the default lane count
    ///
    /// With the `rayon` feature the default is the rayon pool width;
    /// without it, 1.
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            lanes: default_lanes(),
        }
    }

    /// Create a CPU client with a fixed lane count
    ///
    /// `lanes` is clamped to at least 1. More lanes than rayon threads is
    /// fine; lanes are work items, not OS threads.
    pub fn with_lanes(device: CpuDevice, lanes: usize) -> Self {
        Self {
            device,
            lanes: lanes.max(1),
        }
    }

    /// Number of worker lanes histogram kernels are partitioned across
    pub fn lanes(&self) -> usize {
        self.lanes
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }
}

#[cfg(feature = "rayon")]
fn default_lanes() -> usize {
    rayon::current_num_threads().max(1)
}

#[cfg(not(feature = "rayon"))]
fn default_lanes() -> usize {
    1
}
