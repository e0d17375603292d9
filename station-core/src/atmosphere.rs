//! Derived atmospheric values computed from one BME280 sample.

use libm::{logf, powf};

/// Height of the standard atmosphere's troposphere model, in meters
const ISA_SCALE_HEIGHT_M: f32 = 44330.0;
const ISA_EXPONENT: f32 = 5.255;

// Magnus formula coefficients (Alduchov & Eskridge)
const MAGNUS_B: f32 = 243.04;
const MAGNUS_A: f32 = 17.625;

/// Below this temperature the heat index equals the air temperature
pub const HEAT_INDEX_THRESHOLD_C: f32 = 26.7;

// Rothfusz regression, Celsius coefficients
const HI_C1: f32 = -8.784_695;
const HI_C2: f32 = 1.611_394_1;
const HI_C3: f32 = 2.338_549;
const HI_C4: f32 = -0.146_116_05;
const HI_C5: f32 = -1.230_809_4e-2;
const HI_C6: f32 = -1.642_482_8e-2;
const HI_C7: f32 = 2.211_732e-3;
const HI_C8: f32 = 7.254_6e-4;
const HI_C9: f32 = -3.582e-6;

pub fn corrected_temperature(raw_celsius: f32, temp_corr: f32) -> f32 {
    raw_celsius + temp_corr
}

/// Reduce the absolute pressure measured at `elevation_m` to sea level (QNH).
pub fn relative_pressure(absolute_hpa: f32, elevation_m: i32) -> f32 {
    let ratio = 1.0 - elevation_m as f32 / ISA_SCALE_HEIGHT_M;
    absolute_hpa / powf(ratio, ISA_EXPONENT)
}

/// Dew point in degrees Celsius.
pub fn dew_point(temperature: f32, humidity: f32) -> f32 {
    let humidity = humidity.clamp(0.1, 100.0);
    let gamma = logf(humidity / 100.0) + (MAGNUS_A * temperature) / (MAGNUS_B + temperature);
    MAGNUS_B * gamma / (MAGNUS_A - gamma)
}

pub fn dew_point_spread(temperature: f32, dew_point: f32) -> f32 {
    temperature - dew_point
}

/// Apparent temperature in degrees Celsius.
pub fn heat_index(temperature: f32, humidity: f32) -> f32 {
    if temperature <= HEAT_INDEX_THRESHOLD_C {
        return temperature;
    }

    let t = temperature;
    let r = humidity.clamp(0.0, 100.0);
    HI_C1
        + HI_C2 * t
        + HI_C3 * r
        + HI_C4 * t * r
        + HI_C5 * t * t
        + HI_C6 * r * r
        + HI_C7 * t * t * r
        + HI_C8 * t * r * r
        + HI_C9 * t * t * r * r
}

/// Relative pressure rounded to whole hPa, as kept in the pressure history
pub fn round_hpa(pressure: f32) -> u16 {
    libm::roundf(pressure).clamp(0.0, u16::MAX as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn applies_temperature_correction() {
        assert_eq!(corrected_temperature(21.5, -1.0), 20.5);
        assert_eq!(corrected_temperature(21.5, 0.0), 21.5);
    }

    #[test]
    fn sea_level_is_unchanged() {
        assert!(close(relative_pressure(1013.25, 0), 1013.25, 0.001));
    }

    #[test]
    fn pressure_reduced_to_sea_level() {
        let qnh = relative_pressure(950.0, 505);
        assert!(close(qnh, 1009.0, 0.5), "qnh was {}", qnh);
        assert!(relative_pressure(950.0, 1000) > qnh);
        assert!(relative_pressure(1020.0, -100) < 1020.0);
    }

    #[test]
    fn dew_point_magnus() {
        let dp = dew_point(20.0, 50.0);
        assert!(close(dp, 9.26, 0.05), "dew point was {}", dp);
        assert!(close(dew_point(15.0, 100.0), 15.0, 0.01));
    }

    #[test]
    fn dew_point_never_above_temperature() {
        for t in [-20.0, 0.0, 12.5, 35.0] {
            for rh in [5.0, 40.0, 80.0, 99.0] {
                let dp = dew_point(t, rh);
                assert!(dp <= t + 0.01, "t={} rh={} dp={}", t, rh, dp);
                assert!(dew_point_spread(t, dp) >= -0.01);
            }
        }
    }

    #[test]
    fn zero_humidity_is_finite() {
        assert!(dew_point(20.0, 0.0).is_finite());
    }

    #[test]
    fn heat_index_below_threshold() {
        assert_eq!(heat_index(20.0, 90.0), 20.0);
        assert_eq!(heat_index(HEAT_INDEX_THRESHOLD_C, 90.0), HEAT_INDEX_THRESHOLD_C);
    }

    #[test]
    fn heat_index_hot_and_humid() {
        let hi = heat_index(30.0, 70.0);
        assert!(close(hi, 35.0, 0.5), "heat index was {}", hi);
        assert!(heat_index(30.0, 90.0) > hi);
    }

    #[test]
    fn rounding_to_whole_hpa() {
        assert_eq!(round_hpa(1012.5), 1013);
        assert_eq!(round_hpa(1012.49), 1012);
        assert_eq!(round_hpa(-3.0), 0);
    }
}
