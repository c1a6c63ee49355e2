//! Backend Portability: CPU ↔ WebGPU
//!
//! Demonstrates writing backend-agnostic binning code that runs identically
//! on CPU and WebGPU. The same generic function accumulates two batches of
//! samples into one histogram, and both backends produce matching counts.
//!
//! Run CPU-only (default):
//! ```sh
//! cargo run --example histogram_cpu_wgpu
//! ```
//!
//! Run with WebGPU comparison:
//! ```sh
//! cargo run --example histogram_cpu_wgpu --features wgpu
//! ```

use histr::prelude::*;

/// A backend-agnostic computation: bin two batches into one histogram.
///
/// This function works on *any* runtime because it only requires the
/// `HistogramOps` trait.
fn accumulate_batches<R: Runtime>(device: &R::Device) -> Result<Vec<i64>>
where
    R::Client: HistogramOps,
{
    let client = R::default_client(device)?;

    let batch_a = [0.25f32, 1.25, 2.25, 3.25, 9.75];
    let batch_b = [0.75f32, 0.5, 3.5, -2.0, 10.0]; // -2.0 and 10.0 are dropped

    let mut counts = vec![0i64; 10];
    client.histogram_into(&batch_a, (0.0, 10.0), &mut counts)?;
    client.histogram_into(&batch_b, (0.0, 10.0), &mut counts)?;

    Ok(counts)
}

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // CPU computation
    // -----------------------------------------------------------------------
    let cpu_counts = accumulate_batches::<CpuRuntime>(&CpuDevice::new())?;
    println!("CPU counts:  {cpu_counts:?}");

    // -----------------------------------------------------------------------
    // WebGPU computation (feature-gated)
    // -----------------------------------------------------------------------
    #[cfg(feature = "wgpu")]
    {
        match accumulate_batches::<WgpuRuntime>(&WgpuDevice::new(0)) {
            Ok(wgpu_counts) => {
                println!("WGPU counts: {wgpu_counts:?}");
                assert_eq!(cpu_counts, wgpu_counts, "backends must agree");
                println!("CPU and WebGPU agree bin-for-bin.");
            }
            Err(e) => println!("WebGPU unavailable ({e}), skipping GPU comparison"),
        }
    }

    Ok(())
}
