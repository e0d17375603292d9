//! Zambretti forecaster: maps sea-level pressure, its three hour trend and the
//! season to one of 26 forecast letters `A` (settled fine) .. `Z` (stormy).

use crate::history::PressureHistory;

const FALLING_TABLE: [char; 10] = ['A', 'A', 'B', 'D', 'H', 'O', 'R', 'U', 'V', 'X'];
const STEADY_TABLE: [char; 11] = ['A', 'A', 'B', 'E', 'K', 'N', 'P', 'S', 'W', 'X', 'Z'];
const RISING_TABLE: [char; 14] = [
    'A', 'A', 'B', 'C', 'F', 'G', 'I', 'J', 'L', 'M', 'Q', 'T', 'Y', 'Z',
];

/// Pressure change over three hours, in hPa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    RisingFast,
    Rising,
    RisingSlow,
    Steady,
    FallingSlow,
    Falling,
    FallingFast,
}

/// Coarse direction used to select a Zambretti table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Steady,
    Falling,
}

impl Trend {
    pub fn from_difference(hpa_per_3h: f32) -> Self {
        if hpa_per_3h > 3.5 {
            Trend::RisingFast
        } else if hpa_per_3h > 1.5 {
            Trend::Rising
        } else if hpa_per_3h > 0.25 {
            Trend::RisingSlow
        } else if hpa_per_3h > -0.25 {
            Trend::Steady
        } else if hpa_per_3h >= -1.5 {
            Trend::FallingSlow
        } else if hpa_per_3h >= -3.5 {
            Trend::Falling
        } else {
            Trend::FallingFast
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Trend::RisingFast | Trend::Rising | Trend::RisingSlow => Direction::Rising,
            Trend::Steady => Direction::Steady,
            Trend::FallingSlow | Trend::Falling | Trend::FallingFast => Direction::Falling,
        }
    }

    /// Position in the translation tables
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Winter is October to March; the forecast shifts one step towards unsettled.
fn is_winter(month: u8) -> bool {
    !(4..=9).contains(&month)
}

fn pick(table: &[char], z: f64) -> char {
    let index = libm::round(z).clamp(0.0, (table.len() - 1) as f64) as usize;
    table[index]
}

/// Forecast letter for a sea-level pressure in hPa. `month` is 1-based; when
/// the time is unknown no seasonal adjustment is made.
pub fn letter(pressure_hpa: f32, trend: Trend, month: Option<u8>) -> char {
    let p = pressure_hpa as f64;
    let winter = month.is_some_and(is_winter);
    let season = if winter { 1.0 } else { 0.0 };

    match trend.direction() {
        Direction::Falling => {
            let z = 0.000_974_6 * p * p - 2.106_8 * p + 1138.701_9;
            pick(&FALLING_TABLE, z + season)
        }
        Direction::Steady => pick(&STEADY_TABLE, 138.24 - 0.133 * p),
        Direction::Rising => {
            let z = 142.57 - 0.137_6 * p;
            pick(&RISING_TABLE, z + season)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub letter: char,
    pub trend: Trend,
    /// Three hour pressure difference the trend was derived from
    pub difference: f32,
    pub accuracy_percent: u8,
}

impl Forecast {
    /// Forecast for the current sea-level pressure, with the trend taken from
    /// the recorded history.
    pub fn new(history: &PressureHistory, pressure_hpa: u16, month: Option<u8>) -> Self {
        let difference = history.three_hour_difference();
        let trend = Trend::from_difference(difference);
        let letter = letter(pressure_hpa as f32, trend, month);

        log::debug!(
            "Zambretti: {} hPa, {:+.2} hPa/3h ({:?}) -> {}",
            pressure_hpa,
            difference,
            trend,
            letter
        );

        Self {
            letter,
            trend,
            difference,
            accuracy_percent: history.accuracy_percent(),
        }
    }
}
