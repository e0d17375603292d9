/// Maps raw ADC counts to battery volts through the board's voltage divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryCalibration {
    /// ADC count at the top of the measurable range
    pub full_scale_raw: u16,
    /// Battery voltage that produces `full_scale_raw`
    pub full_scale_volts: f32,
}

impl BatteryCalibration {
    pub fn volts(&self, raw: u16) -> f32 {
        if self.full_scale_raw == 0 {
            return 0.0;
        }
        raw.min(self.full_scale_raw) as f32 / self.full_scale_raw as f32 * self.full_scale_volts
    }
}

/// Average of several ADC readings, ignoring an empty sample set
pub fn average_raw(samples: &[u16]) -> Option<u16> {
    if samples.is_empty() {
        return None;
    }
    let sum: u32 = samples.iter().map(|s| *s as u32).sum();
    Some((sum / samples.len() as u32) as u16)
}

pub fn is_low(volts: f32, threshold: f32) -> bool {
    volts < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIVIDER: BatteryCalibration = BatteryCalibration {
        full_scale_raw: 4095,
        full_scale_volts: 6.6,
    };

    #[test]
    fn converts_raw_counts() {
        assert_eq!(DIVIDER.volts(0), 0.0);
        assert!((DIVIDER.volts(4095) - 6.6).abs() < 1e-4);
        assert!((DIVIDER.volts(2482) - 4.0).abs() < 0.01);
    }

    #[test]
    fn clamps_above_full_scale() {
        assert_eq!(DIVIDER.volts(u16::MAX), DIVIDER.volts(4095));
    }

    #[test]
    fn uncalibrated_reads_zero() {
        let calibration = BatteryCalibration {
            full_scale_raw: 0,
            full_scale_volts: 3.3,
        };
        assert_eq!(calibration.volts(100), 0.0);
    }

    #[test]
    fn averages_samples() {
        assert_eq!(average_raw(&[]), None);
        assert_eq!(average_raw(&[2000, 2002, 2004]), Some(2002));
    }

    #[test]
    fn low_threshold() {
        assert!(is_low(3.2, 3.3));
        assert!(!is_low(3.3, 3.3));
    }
}
