use core::fmt;

use crate::clock::LocalTime;
use crate::history::MAX_AGE_SECS;

/// Largest UTC offset in hours in use anywhere (UTC+14, Line Islands)
pub const MAX_TZ_HOURS: i8 = 14;

/// Valid elevation range in meters, from the Dead Sea shore to high plateaus
pub const MIN_ELEVATION_M: i32 = -500;
pub const MAX_ELEVATION_M: i32 = 9000;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Language of the published forecast and trend texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
    Fr,
    It,
    Pl,
    Ro,
    Sp,
    Tr,
    Nl,
    No,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::It,
        Language::Pl,
        Language::Ro,
        Language::Sp,
        Language::Tr,
        Language::Nl,
        Language::No,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::De => "DE",
            Language::Fr => "FR",
            Language::It => "IT",
            Language::Pl => "PL",
            Language::Ro => "RO",
            Language::Sp => "SP",
            Language::Tr => "TR",
            Language::Nl => "NL",
            Language::No => "NO",
        }
    }

    /// Case-insensitive lookup of a two letter language code
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Timezone offset in seconds for a whole-hour offset from UTC
pub const fn tz_seconds(tz_hours: i8) -> i32 {
    tz_hours as i32 * 3600
}

/// Daylight saving adjustment in seconds
pub const fn dst_seconds(dst_minutes: i16) -> i32 {
    dst_minutes as i32 * 60
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    EmptyWifiSsid,
    EmptyWifiPassword,
    EmptyDeviceId,
    InvalidMqttHostname,
    InvalidNtpServer,
    EmptyMqttTopic,
    ZeroSleepTime,
    ZeroLowBatterySleepTime,
    SleepTooLong(u32),
    NonFiniteTempCorr,
    NonFiniteLowBatteryVolts,
    TimezoneOutOfRange(i8),
    ElevationOutOfRange(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyWifiSsid => write!(f, "wifi_ssid must not be empty"),
            Error::EmptyWifiPassword => write!(f, "wifi_psk must not be empty"),
            Error::EmptyDeviceId => write!(f, "device_id must not be empty"),
            Error::InvalidMqttHostname => {
                write!(f, "mqtt_hostname is not a valid IPv4 address or hostname")
            }
            Error::InvalidNtpServer => write!(f, "ntp_server is not a valid hostname"),
            Error::EmptyMqttTopic => write!(f, "mqtt_topic must not be empty"),
            Error::ZeroSleepTime => write!(f, "sleep_time_min must be greater than zero"),
            Error::ZeroLowBatterySleepTime => {
                write!(f, "low_battery_sleep_min must be greater than zero")
            }
            Error::SleepTooLong(minutes) => write!(
                f,
                "a sleep of {} min outlasts the {} h pressure history",
                minutes,
                MAX_AGE_SECS / 3600
            ),
            Error::NonFiniteTempCorr => write!(f, "temp_corr must be a finite number"),
            Error::NonFiniteLowBatteryVolts => {
                write!(f, "low_battery_volts must be a finite number")
            }
            Error::TimezoneOutOfRange(tz) => {
                write!(f, "tz {} is outside -{}..={}", tz, MAX_TZ_HOURS, MAX_TZ_HOURS)
            }
            Error::ElevationOutOfRange(elevation) => write!(
                f,
                "elevation {} m is outside {}..={}",
                elevation, MIN_ELEVATION_M, MAX_ELEVATION_M
            ),
        }
    }
}

pub struct Config {
    // Device ID (used as DHCP hostname and MQTT client id)
    pub device_id: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT port (usually 1883)
    pub mqtt_port: u16,

    // MQTT credentials, both optional
    pub mqtt_username: Option<&'static str>,
    pub mqtt_password: Option<&'static str>,

    // Topic prefix, every value is published below it
    pub mqtt_topic: &'static str,

    // Language of forecast and trend texts
    pub language: Language,

    // Additive correction of the temperature sensor in degrees Celsius
    pub temp_corr: f32,

    // Station elevation in meters above sea level
    pub elevation: i32,

    // Deep sleep between two measurements, in minutes
    pub sleep_time_min: u32,

    // SNTP server hostname
    pub ntp_server: &'static str,

    // Offset from UTC in whole hours
    pub tz: i8,

    // Daylight saving adjustment in minutes
    pub dst_mn: i16,

    // Battery voltage under which the station sleeps longer
    pub low_battery_volts: f32,

    // Deep sleep used while the battery is low, in minutes
    pub low_battery_sleep_min: u32,
}

impl Config {
    pub const fn tz_sec(&self) -> i32 {
        tz_seconds(self.tz)
    }

    pub const fn dst_sec(&self) -> i32 {
        dst_seconds(self.dst_mn)
    }

    /// Offset applied to UTC to get the station's local time
    pub const fn utc_offset_secs(&self) -> i32 {
        self.tz_sec() + self.dst_sec()
    }

    pub const fn sleep_duration_secs(&self) -> u64 {
        self.sleep_time_min as u64 * 60
    }

    /// Sleep duration for the next cycle, extended while the battery is low
    pub fn next_sleep_secs(&self, battery_volts: f32) -> u64 {
        if battery_volts < self.low_battery_volts {
            self.low_battery_sleep_min as u64 * 60
        } else {
            self.sleep_duration_secs()
        }
    }

    /// Local wall clock time for log output, DST included
    pub fn local_time(&self, utc_secs: i64) -> Option<LocalTime> {
        LocalTime::from_unix(utc_secs, self.utc_offset_secs())
    }

    /// Month for the seasonal forecast adjustment. DST only shifts the logged
    /// time, the season follows standard time.
    pub fn season_month(&self, utc_secs: i64) -> Option<u8> {
        LocalTime::from_unix(utc_secs, self.tz_sec()).map(|local| local.month())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.device_id.trim().is_empty() {
            return Err(Error::EmptyDeviceId);
        }
        if self.wifi_ssid.is_empty() {
            return Err(Error::EmptyWifiSsid);
        }
        if self.wifi_psk.is_empty() {
            return Err(Error::EmptyWifiPassword);
        }
        if !is_valid_host(self.mqtt_hostname) {
            return Err(Error::InvalidMqttHostname);
        }
        if self.mqtt_topic.trim_matches('/').is_empty() {
            return Err(Error::EmptyMqttTopic);
        }
        if !is_valid_host(self.ntp_server) {
            return Err(Error::InvalidNtpServer);
        }
        if self.sleep_time_min == 0 {
            return Err(Error::ZeroSleepTime);
        }
        if self.low_battery_sleep_min == 0 {
            return Err(Error::ZeroLowBatterySleepTime);
        }
        // every wake would find a stale history and start over
        for minutes in [self.sleep_time_min, self.low_battery_sleep_min] {
            if minutes as i64 * 60 >= MAX_AGE_SECS {
                return Err(Error::SleepTooLong(minutes));
            }
        }
        if !self.temp_corr.is_finite() {
            return Err(Error::NonFiniteTempCorr);
        }
        if !self.low_battery_volts.is_finite() {
            return Err(Error::NonFiniteLowBatteryVolts);
        }
        if !(-MAX_TZ_HOURS..=MAX_TZ_HOURS).contains(&self.tz) {
            return Err(Error::TimezoneOutOfRange(self.tz));
        }
        if !(MIN_ELEVATION_M..=MAX_ELEVATION_M).contains(&self.elevation) {
            return Err(Error::ElevationOutOfRange(self.elevation));
        }
        Ok(())
    }
}

/// Accepts dotted IPv4 addresses and RFC 1123 hostnames.
pub fn is_valid_host(host: &str) -> bool {
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let all_numeric = host.split('.').all(|label| {
        !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit())
    });
    if all_numeric {
        return is_valid_ipv4(host);
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

fn is_valid_ipv4(host: &str) -> bool {
    let mut octets = 0;
    for part in host.split('.') {
        if part.len() > 1 && part.starts_with('0') {
            return false;
        }
        if part.parse::<u8>().is_err() {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            device_id: "solarweatherstation",
            wifi_ssid: "home",
            wifi_psk: "secret",
            mqtt_hostname: "192.168.0.10",
            mqtt_port: 1883,
            mqtt_username: None,
            mqtt_password: None,
            mqtt_topic: "home/weather/solarweatherstation",
            language: Language::Nl,
            temp_corr: -1.0,
            elevation: 505,
            sleep_time_min: 10,
            ntp_server: "nl.pool.ntp.org",
            tz: 1,
            dst_mn: 60,
            low_battery_volts: 3.3,
            low_battery_sleep_min: 60,
        }
    }

    #[test]
    fn derived_offsets() {
        let config = config();
        assert_eq!(config.tz_sec(), 3600);
        assert_eq!(config.dst_sec(), 3600);
        assert_eq!(config.utc_offset_secs(), 7200);
        assert_eq!(config.sleep_duration_secs(), 600);
    }

    #[test]
    fn negative_timezone() {
        assert_eq!(tz_seconds(-5), -18000);
        assert_eq!(tz_seconds(0), 0);
        assert_eq!(dst_seconds(0), 0);
        assert_eq!(dst_seconds(30), 1800);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("NL"), Some(Language::Nl));
        assert_eq!(Language::from_code("nl"), Some(Language::Nl));
        assert_eq!(Language::from_code(" sp "), Some(Language::Sp));
        assert_eq!(Language::from_code("ES"), None);
        assert_eq!(Language::from_code(""), None);

        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn accepts_default_settings() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn rejects_invalid_settings() {
        let mut c = config();
        c.sleep_time_min = 0;
        assert_eq!(c.validate(), Err(Error::ZeroSleepTime));

        let mut c = config();
        c.wifi_ssid = "";
        assert_eq!(c.validate(), Err(Error::EmptyWifiSsid));

        let mut c = config();
        c.mqtt_hostname = "192.168.0.***";
        assert_eq!(c.validate(), Err(Error::InvalidMqttHostname));

        let mut c = config();
        c.ntp_server = "pool..ntp.org";
        assert_eq!(c.validate(), Err(Error::InvalidNtpServer));

        let mut c = config();
        c.tz = 15;
        assert_eq!(c.validate(), Err(Error::TimezoneOutOfRange(15)));

        let mut c = config();
        c.elevation = 12_000;
        assert_eq!(c.validate(), Err(Error::ElevationOutOfRange(12_000)));

        let mut c = config();
        c.mqtt_topic = "/";
        assert_eq!(c.validate(), Err(Error::EmptyMqttTopic));

        let mut c = config();
        c.device_id = " ";
        assert_eq!(c.validate(), Err(Error::EmptyDeviceId));

        let mut c = config();
        c.wifi_psk = "";
        assert_eq!(c.validate(), Err(Error::EmptyWifiPassword));

        let mut c = config();
        c.low_battery_sleep_min = 0;
        assert_eq!(c.validate(), Err(Error::ZeroLowBatterySleepTime));
    }

    #[test]
    fn rejects_sleep_outlasting_history() {
        let mut c = config();
        c.sleep_time_min = 359;
        assert_eq!(c.validate(), Ok(()));

        c.sleep_time_min = 360;
        assert_eq!(c.validate(), Err(Error::SleepTooLong(360)));

        let mut c = config();
        c.low_battery_sleep_min = 24 * 60;
        assert_eq!(c.validate(), Err(Error::SleepTooLong(1440)));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let mut c = config();
        c.temp_corr = f32::NAN;
        assert_eq!(c.validate(), Err(Error::NonFiniteTempCorr));

        let mut c = config();
        c.low_battery_volts = f32::INFINITY;
        assert_eq!(c.validate(), Err(Error::NonFiniteLowBatteryVolts));
    }

    #[test]
    fn season_ignores_daylight_saving() {
        // 2023-12-31 23:30:00 UTC
        let t = 1_704_065_400;
        let mut c = config();
        c.tz = 0;
        c.dst_mn = 60;

        assert_eq!(c.local_time(t).map(|local| local.month()), Some(1));
        assert_eq!(c.season_month(t), Some(12));

        c.tz = 1;
        assert_eq!(c.season_month(t), Some(1));
    }

    #[test]
    fn host_validation() {
        assert!(is_valid_host("192.168.0.10"));
        assert!(is_valid_host("broker.local"));
        assert!(is_valid_host("mqtt-01"));
        assert!(!is_valid_host("256.1.1.1"));
        assert!(!is_valid_host("10.0.0"));
        assert!(!is_valid_host("010.0.0.1"));
        assert!(!is_valid_host("-broker"));
        assert!(!is_valid_host("has space"));
        assert!(!is_valid_host(""));
    }

    #[test]
    fn low_battery_extends_sleep() {
        let config = config();
        assert_eq!(config.next_sleep_secs(4.1), 600);
        assert_eq!(config.next_sleep_secs(3.2), 3600);
    }
}
