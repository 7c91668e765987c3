//! Command to print per-channel gain factors.

use anyhow::Result;
use colored::Colorize;
use resc_core::calibration;

/// Execute the gain command.
pub fn execute(channel: usize) -> Result<()> {
    match calibration::gain(channel) {
        Some(gain) if calibration::is_live(channel) => {
            println!("channel {channel}: {gain} PE/ADC");
        },
        Some(_) => {
            println!("channel {channel}: {}", "disabled".yellow());
        },
        None => {
            anyhow::bail!(
                "channel {} out of range (detector has {} channels)",
                channel,
                calibration::n_channels()
            );
        },
    }

    Ok(())
}
