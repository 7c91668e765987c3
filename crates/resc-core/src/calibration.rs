//! Per-channel calibration constants.
//!
//! The ADC->PE conversion table for the 260-channel detector. A gain of
//! `0.0` marks a channel that is disabled or whose gain is unknown; such
//! channels carry no usable signal and must be skipped by consumers.
//!
//! The published table stores raw values; the physical gain applies the
//! [`ADC_TO_PE_SCALE`] factor on top. Keeping the scale out of the stored
//! numbers lets the table be compared against the published constants
//! digit for digit.

/// Scale factor converting a raw table value to an ADC->PE gain.
pub const ADC_TO_PE_SCALE: f64 = 1e-3;

/// Raw ADC->PE conversion table, one entry per channel.
pub static TO_PE: [f64; 260] = [
    7.05, 0.0, 0.0, 8.09, 4.38, 7.87, 3.58, 7.5,
    7.44, 4.82, 7.07, 5.79, 0.0, 5.55, 7.95, 7.02,
    6.39, 8.1, 7.15, 7.43, 7.15, 11.4, 3.97, 7.28,
    5.41, 7.4, 0.0, 0.0, 7.04, 7.27, 4.22, 16.79,
    4.14, 7.04, 0.0, 5.38, 7.39, 7.02, 4.53, 5.17,
    7.13, 5.48, 4.6, 7.33, 6.14, 6.52, 7.59, 4.76,
    7.56, 7.54, 4.57, 4.6, 7.12, 8.0, 4.7, 8.68,
    3.74, 4.97, 10.36, 7.53, 6.02, 12.45, 0.0, 4.49,
    4.82, 0.0, 8.13, 7.27, 3.55, 5.65, 4.55, 8.64,
    7.97, 0.0, 3.57, 3.69, 5.87, 5.12, 9.8, 0.0,
    5.08, 4.09, 3.87, 8.17, 6.73, 9.03, 0.0, 6.93,
    0.0, 6.52, 7.39, 0.0, 4.92, 7.48, 5.82, 4.05,
    3.9, 5.77, 8.14, 7.62, 7.61, 5.55, 0.0, 7.12,
    5.02, 4.57, 4.46, 7.44, 3.57, 7.58, 7.16, 7.33,
    7.69, 6.03, 5.87, 9.64, 4.68, 7.88, 0.0, 10.84,
    7.0, 3.62, 7.5, 7.45, 7.69, 7.69, 3.49, 3.61,
    7.44, 6.38, 0.0, 5.1, 3.72, 5.22, 0.0, 0.0,
    4.43, 0.0, 3.87, 0.0, 3.6, 5.35, 8.4, 5.1,
    6.45, 5.07, 4.28, 3.5, 0.0, 7.28, 0.0, 4.25,
    0.0, 4.72, 6.26, 7.28, 5.34, 7.55, 3.85, 5.54,
    7.5, 7.31, 0.0, 7.76, 7.57, 6.66, 7.29, 0.0,
    7.59, 3.8, 3.58, 5.21, 4.29, 7.36, 7.76, 4.0,
    6.23, 5.86, 0.0, 7.34, 3.58, 3.57, 5.26, 0.0,
    7.67, 4.05, 4.3, 4.21, 7.59, 7.59, 0.0, 6.41,
    4.86, 3.73, 5.09, 7.59, 7.64, 7.7, 0.0, 5.25,
    8.0, 5.32, 7.91, 0.0, 4.41, 11.82, 0.0, 4.51,
    7.05, 8.63, 5.12, 4.45, 4.03, 0.0, 0.0, 3.54,
    4.18, 9.5, 3.64, 3.67, 7.28, 3.59, 5.03, 3.6,
    5.4, 7.18, 3.73, 6.21, 6.47, 3.7, 7.69, 4.58,
    7.46, 6.74, 0.0, 3.66, 7.49, 7.55, 3.64, 0.0,
    7.34, 4.06, 3.74, 3.97, 0.0, 4.29, 4.96, 3.77,
    8.57, 8.57, 8.57, 8.57, 8.57, 8.57, 214.29, 171.43,
    171.43, 171.43, 171.43, 171.43,
];

/// Number of channels in the calibration table.
#[must_use]
pub const fn n_channels() -> usize {
    TO_PE.len()
}

/// The scaled ADC->PE gain for a channel, or `None` when the channel
/// number is out of range.
///
/// A returned gain of `0.0` means the channel is disabled; see
/// [`is_live`].
#[must_use]
pub fn gain(channel: usize) -> Option<f64> {
    TO_PE.get(channel).map(|g| g * ADC_TO_PE_SCALE)
}

/// Whether a channel is live, i.e. in range with a non-zero gain.
#[must_use]
pub fn is_live(channel: usize) -> bool {
    gain(channel).is_some_and(|g| g != 0.0)
}

/// Base URL of data files hosted in the pax repository master branch.
const PAX_DATA_URL: &str = "https://raw.githubusercontent.com/XENON1T/pax/master/pax/data/";

/// Returns the URL of a file hosted in the pax repository master branch.
///
/// The result is a remote resource identifier suitable for
/// [`crate::ResourceCache::get_text`] and
/// [`crate::ResourceCache::get_bytes`].
#[must_use]
pub fn pax_file(name: &str) -> String {
    format!("{PAX_DATA_URL}{name}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(n_channels(), 260);
    }

    #[test]
    fn test_gain_applies_scale() {
        // Channel 0 is published as 7.05; the physical gain is 7.05e-3.
        assert_eq!(TO_PE[0], 7.05);
        assert_eq!(gain(0).unwrap(), 7.05 * ADC_TO_PE_SCALE);
    }

    #[test]
    fn test_disabled_channels_are_not_live() {
        assert_eq!(gain(1), Some(0.0));
        assert!(!is_live(1));
        assert!(is_live(0));
    }

    #[test]
    fn test_out_of_range_channel() {
        assert_eq!(gain(n_channels()), None);
        assert!(!is_live(n_channels()));
    }

    #[test]
    fn test_gains_are_plausible() {
        // Every live channel sits well below one PE per ADC unit.
        for channel in 0..n_channels() {
            let g = gain(channel).unwrap();
            assert!((0.0..1.0).contains(&g), "channel {channel} gain {g} out of range");
        }
    }

    #[test]
    fn test_pax_file_url() {
        let url = pax_file("pmt_positions.json");
        assert!(url.starts_with("https://raw.githubusercontent.com/XENON1T/pax/"));
        assert!(url.ends_with("/pmt_positions.json"));
        assert!(crate::ResourceCache::is_remote(&url));
    }
}
