//! Sea-level pressure history kept across deep sleep cycles.
//!
//! A sample is recorded on the first wake more than 30 minutes after the
//! previous one, newest first, together with the time it was taken. The
//! spacing therefore follows the sleep interval and is never assumed.
//! `accuracy` counts how many slots hold real measurements; the Zambretti
//! estimate gets better as it grows.

use core::fmt;

use serde::{Deserialize, Serialize};

pub const HISTORY_LEN: usize = 12;

/// Minimum age of the newest sample before a new one is recorded
pub const SAMPLE_INTERVAL_SECS: i64 = 1800;

/// A history older than this no longer describes the current weather
pub const MAX_AGE_SECS: i64 = 21600;

/// Best accuracy the Zambretti method reaches, in percent
pub const MAX_ACCURACY_PERCENT: u32 = 94;

const THREE_HOURS_SECS: f32 = 10800.0;

const MAGIC: [u8; 4] = *b"ZAMB";
const LAYOUT_VERSION: u8 = 2;

/// Upper bound of the persisted representation in bytes
pub const MAX_ENCODED_LEN: usize = 192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    BadMagic,
    UnsupportedVersion(u8),
    Decode,
    Encode,
    InvalidAccuracy(u8),
    InvalidTimestamps,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadMagic => write!(f, "no pressure history stored"),
            Error::UnsupportedVersion(v) => write!(f, "unsupported history layout {}", v),
            Error::Decode => write!(f, "pressure history could not be decoded"),
            Error::Encode => write!(f, "pressure history does not fit its buffer"),
            Error::InvalidAccuracy(a) => write!(f, "invalid history accuracy {}", a),
            Error::InvalidTimestamps => write!(f, "pressure history samples out of order"),
        }
    }
}

/// Outcome of feeding a new pressure value into the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    /// The stored history was too old (or from the future) and was restarted
    Reset,
    /// A new sample was recorded
    Shifted,
    /// The newest sample is younger than the sample interval
    Unchanged,
}

impl HistoryUpdate {
    /// Whether the history has to be written back to storage
    pub fn is_dirty(self) -> bool {
        !matches!(self, HistoryUpdate::Unchanged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressureHistory {
    values: [u16; HISTORY_LEN],
    /// Unix time each slot of `values` was recorded
    taken_at: [i64; HISTORY_LEN],
    accuracy: u8,
}

#[derive(Serialize)]
struct Record<'a> {
    magic: [u8; 4],
    version: u8,
    history: &'a PressureHistory,
}

#[derive(Deserialize)]
struct Header {
    magic: [u8; 4],
    version: u8,
}

impl PressureHistory {
    /// Start a fresh history where every slot holds the current pressure
    pub fn new(now: i64, pressure_hpa: u16) -> Self {
        Self {
            values: [pressure_hpa; HISTORY_LEN],
            taken_at: [now; HISTORY_LEN],
            accuracy: 1,
        }
    }

    pub fn latest(&self) -> u16 {
        self.values[0]
    }

    pub fn values(&self) -> &[u16; HISTORY_LEN] {
        &self.values
    }

    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    /// Unix time of the newest sample
    pub fn timestamp(&self) -> i64 {
        self.taken_at[0]
    }

    /// Seconds between the newest sample and sample `index`
    pub fn age_of(&self, index: usize) -> Option<i64> {
        self.taken_at
            .get(index)
            .map(|taken_at| self.taken_at[0] - taken_at)
    }

    pub fn accuracy_percent(&self) -> u8 {
        (self.accuracy as u32 * MAX_ACCURACY_PERCENT / HISTORY_LEN as u32) as u8
    }

    pub fn update(&mut self, now: i64, pressure_hpa: u16) -> HistoryUpdate {
        let age = now - self.timestamp();

        if !(0..=MAX_AGE_SECS).contains(&age) {
            log::info!("Pressure history is {} s old, starting over", age);
            *self = Self::new(now, pressure_hpa);
            return HistoryUpdate::Reset;
        }

        if age <= SAMPLE_INTERVAL_SECS {
            return HistoryUpdate::Unchanged;
        }

        self.values.copy_within(0..HISTORY_LEN - 1, 1);
        self.taken_at.copy_within(0..HISTORY_LEN - 1, 1);
        self.values[0] = pressure_hpa;
        self.taken_at[0] = now;
        if (self.accuracy as usize) < HISTORY_LEN {
            self.accuracy += 1;
        }
        HistoryUpdate::Shifted
    }

    /// Pressure change over three hours estimated from every recorded sample.
    ///
    /// The difference between the newest sample and sample `k` is scaled from
    /// the real age of sample `k` to three hours, and the scaled differences
    /// are averaged.
    pub fn three_hour_difference(&self) -> f32 {
        let newest = self.values[0] as f32;
        let (sum, count) = (1..self.accuracy as usize)
            .filter_map(|k| {
                let age = self.taken_at[0] - self.taken_at[k];
                (age > 0).then(|| {
                    (newest - self.values[k] as f32) * THREE_HOURS_SECS / age as f32
                })
            })
            .fold((0.0f32, 0u32), |(sum, count), d| (sum + d, count + 1));

        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Encode behind a magic number and layout version into `buf`
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], Error> {
        let record = Record {
            magic: MAGIC,
            version: LAYOUT_VERSION,
            history: self,
        };
        postcard::to_slice(&record, buf).map_err(|_| Error::Encode)
    }

    /// Decode a record written by `to_bytes`; trailing bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (header, body) =
            postcard::take_from_bytes::<Header>(bytes).map_err(|_| Error::BadMagic)?;
        if header.magic != MAGIC {
            return Err(Error::BadMagic);
        }
        if header.version != LAYOUT_VERSION {
            return Err(Error::UnsupportedVersion(header.version));
        }

        let history: Self = postcard::from_bytes(body).map_err(|_| Error::Decode)?;

        let accuracy = history.accuracy;
        if accuracy == 0 || accuracy as usize > HISTORY_LEN {
            return Err(Error::InvalidAccuracy(accuracy));
        }
        let recorded = &history.taken_at[..accuracy as usize];
        if recorded.windows(2).any(|pair| pair[1] > pair[0]) {
            return Err(Error::InvalidTimestamps);
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn encode(history: &PressureHistory) -> [u8; MAX_ENCODED_LEN] {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        history.to_bytes(&mut buf).unwrap();
        buf
    }

    /// Wake every `sleep_secs` for `hours` with the pressure changing by
    /// `hpa_per_hour`; the history only sees the whole hPa values.
    fn run(sleep_secs: i64, hours: i64, hpa_per_hour: f32) -> PressureHistory {
        let mut history = PressureHistory::new(T0, 1000);
        let mut now = T0;
        while now < T0 + hours * 3600 {
            now += sleep_secs;
            let elapsed_hours = (now - T0) as f32 / 3600.0;
            let pressure = libm::roundf(1000.0 + hpa_per_hour * elapsed_hours) as u16;
            history.update(now, pressure);
        }
        history
    }

    #[test]
    fn first_run_fills_every_slot() {
        let history = PressureHistory::new(T0, 1012);
        assert_eq!(history.values(), &[1012; HISTORY_LEN]);
        assert_eq!(history.accuracy(), 1);
        assert_eq!(history.accuracy_percent(), 7);
        assert_eq!(history.three_hour_difference(), 0.0);
    }

    #[test]
    fn keeps_samples_within_interval() {
        let mut history = PressureHistory::new(T0, 1012);
        assert_eq!(history.update(T0 + 600, 1015), HistoryUpdate::Unchanged);
        assert_eq!(history.update(T0 + 1800, 1015), HistoryUpdate::Unchanged);
        assert_eq!(history.latest(), 1012);
        assert_eq!(history.timestamp(), T0);
    }

    #[test]
    fn shifts_after_half_an_hour() {
        let mut history = PressureHistory::new(T0, 1012);
        assert_eq!(history.update(T0 + 1801, 1013), HistoryUpdate::Shifted);
        assert_eq!(history.latest(), 1013);
        assert_eq!(history.values()[1], 1012);
        assert_eq!(history.accuracy(), 2);
        assert_eq!(history.timestamp(), T0 + 1801);
        assert_eq!(history.age_of(1), Some(1801));
    }

    #[test]
    fn resets_when_stale_or_clock_went_back() {
        let mut history = PressureHistory::new(T0, 1012);
        history.update(T0 + 2000, 1013);
        assert_eq!(history.update(T0 + 2000 + 21601, 1001), HistoryUpdate::Reset);
        assert_eq!(history, PressureHistory::new(T0 + 23601, 1001));

        assert_eq!(history.update(T0, 1005), HistoryUpdate::Reset);
        assert_eq!(history.accuracy(), 1);
    }

    #[test]
    fn accuracy_saturates() {
        let mut history = PressureHistory::new(T0, 1000);
        for i in 1..=20 {
            history.update(T0 + i * 1900, 1000 + i as u16);
        }
        assert_eq!(history.accuracy() as usize, HISTORY_LEN);
        assert_eq!(history.accuracy_percent(), 94);
        assert_eq!(history.latest(), 1020);
        assert_eq!(history.values()[HISTORY_LEN - 1], 1009);
        assert_eq!(history.age_of(HISTORY_LEN - 1), Some(11 * 1900));
    }

    #[test]
    fn hourly_wakes_use_real_sample_age() {
        // low battery schedule: one sample per hour, -1 hPa/h is -3 hPa/3h
        let history = run(3600, 3, -1.0);
        assert_eq!(history.accuracy(), 4);
        assert_eq!(history.age_of(1), Some(3600));
        let difference = history.three_hour_difference();
        assert!((difference + 3.0).abs() < 0.001, "difference was {}", difference);
    }

    #[test]
    fn ten_minute_wakes_record_every_forty_minutes() {
        // -1.5 hPa/h loses exactly 1 hPa between two recorded samples
        let history = run(600, 3, -1.5);
        assert_eq!(history.age_of(1), Some(2400));
        assert_eq!(history.accuracy(), 5);
        let difference = history.three_hour_difference();
        assert!((difference + 4.5).abs() < 0.001, "difference was {}", difference);
    }

    #[test]
    fn steady_rise_extrapolates_to_three_hours() {
        let mut history = PressureHistory::new(T0, 1000);
        for i in 1..=4 {
            history.update(T0 + i * 3600, 1000 + i as u16);
        }
        let difference = history.three_hour_difference();
        assert!((difference - 3.0).abs() < 0.001, "difference was {}", difference);
    }

    #[test]
    fn falling_pressure_is_negative() {
        let mut history = PressureHistory::new(T0, 1010);
        history.update(T0 + 2700, 1009);
        assert!((history.three_hour_difference() + 4.0).abs() < 0.001);
    }

    #[test]
    fn bytes_survive_storage() {
        let mut history = PressureHistory::new(T0, 998);
        history.update(T0 + 1801, 1001);
        let decoded = PressureHistory::from_bytes(&encode(&history));
        assert_eq!(decoded, Ok(history));
    }

    #[test]
    fn record_fits_its_buffer() {
        // largest varints: huge timestamps and pressures
        let start = i64::MAX - 30_000;
        let mut history = PressureHistory::new(start, u16::MAX);
        for i in 1..=HISTORY_LEN as i64 {
            history.update(start + i * 1801, u16::MAX);
        }
        assert_eq!(history.accuracy() as usize, HISTORY_LEN);
        let mut buf = [0u8; MAX_ENCODED_LEN];
        assert!(history.to_bytes(&mut buf).is_ok());
    }

    #[test]
    fn erased_flash_is_rejected() {
        assert_eq!(
            PressureHistory::from_bytes(&[0xFF; MAX_ENCODED_LEN]),
            Err(Error::BadMagic)
        );
        assert_eq!(PressureHistory::from_bytes(&[0u8; 2]), Err(Error::BadMagic));
    }

    #[test]
    fn corruption_is_detected() {
        let mut bytes = encode(&PressureHistory::new(T0, 1012));
        bytes[4] = 9;
        assert_eq!(
            PressureHistory::from_bytes(&bytes),
            Err(Error::UnsupportedVersion(9))
        );

        let mut history = PressureHistory::new(T0, 1012);
        history.accuracy = 13;
        assert_eq!(
            PressureHistory::from_bytes(&encode(&history)),
            Err(Error::InvalidAccuracy(13))
        );

        let mut history = PressureHistory::new(T0, 1012);
        history.update(T0 + 1801, 1013);
        history.taken_at[1] = T0 + 5000;
        assert_eq!(
            PressureHistory::from_bytes(&encode(&history)),
            Err(Error::InvalidTimestamps)
        );

        let bytes = encode(&PressureHistory::new(T0, 1012));
        assert_eq!(PressureHistory::from_bytes(&bytes[..10]), Err(Error::Decode));
    }
}
