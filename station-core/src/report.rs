use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::atmosphere;
use crate::config::Language;
use crate::zambretti::Forecast;

/// Capacity of one published value, large enough for any translated forecast
pub const VALUE_LEN: usize = 96;
pub const TOPIC_LEN: usize = 128;
pub const TOPIC_COUNT: usize = 11;
pub const INFLUX_LEN: usize = 512;

/// One raw sample as delivered by the sensors
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Degrees Celsius, before correction
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
    /// Absolute pressure at the station in hPa
    pub pressure: f32,
    pub battery_volts: f32,
}

/// Values derived from a reading and the station settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub dew_point: f32,
    pub dew_point_spread: f32,
    pub heat_index: f32,
    pub absolute_pressure: f32,
    pub relative_pressure: f32,
    pub battery_volts: f32,
}

impl Measurements {
    pub fn from_reading(reading: &Reading, temp_corr: f32, elevation_m: i32) -> Self {
        let temperature = atmosphere::corrected_temperature(reading.temperature, temp_corr);
        let dew_point = atmosphere::dew_point(temperature, reading.humidity);

        Self {
            temperature,
            humidity: reading.humidity,
            dew_point,
            dew_point_spread: atmosphere::dew_point_spread(temperature, dew_point),
            heat_index: atmosphere::heat_index(temperature, reading.humidity),
            absolute_pressure: reading.pressure,
            relative_pressure: atmosphere::relative_pressure(reading.pressure, elevation_m),
            battery_volts: reading.battery_volts,
        }
    }

    /// Sea-level pressure as stored in the history and fed to the forecast
    pub fn relative_pressure_hpa(&self) -> u16 {
        atmosphere::round_hpa(self.relative_pressure)
    }
}

/// A published value: `suffix` is appended to the configured topic prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub suffix: &'static str,
    pub value: String<VALUE_LEN>,
}

pub struct Report {
    pub measurements: Measurements,
    pub forecast: Forecast,
    pub language: Language,
}

impl Report {
    pub fn forecast_text(&self) -> &'static str {
        self.language.texts().forecast(self.forecast.letter)
    }

    pub fn trend_text(&self) -> &'static str {
        self.language.texts().trend(self.forecast.trend)
    }

    pub fn topics(&self) -> Result<Vec<Topic, TOPIC_COUNT>, fmt::Error> {
        let m = &self.measurements;
        let mut topics = Vec::new();

        push(&mut topics, "tempc", format_args!("{:.2}", m.temperature))?;
        push(&mut topics, "heatindex", format_args!("{:.2}", m.heat_index))?;
        push(&mut topics, "dewpoint", format_args!("{:.2}", m.dew_point))?;
        push(&mut topics, "spread", format_args!("{:.2}", m.dew_point_spread))?;
        push(&mut topics, "humi", format_args!("{:.2}", m.humidity))?;
        push(&mut topics, "abshpa", format_args!("{:.2}", m.absolute_pressure))?;
        push(&mut topics, "relhpa", format_args!("{}", m.relative_pressure_hpa()))?;
        push(&mut topics, "battv", format_args!("{:.2}", m.battery_volts))?;
        push(&mut topics, "zambrettisays", format_args!("{}", self.forecast_text()))?;
        push(&mut topics, "trend", format_args!("{}", self.trend_text()))?;
        push(&mut topics, "accuracy", format_args!("{}", self.forecast.accuracy_percent))?;

        Ok(topics)
    }

    /// One line protocol record with every value, tagged with the station id
    pub fn write_influx(&self, station: &str) -> Result<String<INFLUX_LEN>, fmt::Error> {
        let m = &self.measurements;
        let mut payload: String<INFLUX_LEN> = String::new();

        write!(payload, "weather,station={}", station)?;
        write!(
            payload,
            " tempc={:.2},heatindex={:.2},dewpoint={:.2},spread={:.2},humi={:.2}",
            m.temperature, m.heat_index, m.dew_point, m.dew_point_spread, m.humidity
        )?;
        write!(
            payload,
            ",abshpa={:.2},relhpa={}i,battv={:.2}",
            m.absolute_pressure,
            m.relative_pressure_hpa(),
            m.battery_volts
        )?;
        write!(
            payload,
            ",trend={:.2},zambretti=\"{}\",accuracy={}i",
            self.forecast.difference, self.forecast.letter, self.forecast.accuracy_percent
        )?;

        Ok(payload)
    }
}

fn push(
    topics: &mut Vec<Topic, TOPIC_COUNT>,
    suffix: &'static str,
    args: fmt::Arguments<'_>,
) -> fmt::Result {
    let mut value = String::new();
    value.write_fmt(args)?;
    topics.push(Topic { suffix, value }).map_err(|_| fmt::Error)
}

/// Full topic name for a value, tolerating a trailing slash on the prefix
pub fn topic_path(prefix: &str, suffix: &str) -> Result<String<TOPIC_LEN>, fmt::Error> {
    let mut path = String::new();
    write!(path, "{}/{}", prefix.trim_end_matches('/'), suffix)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zambretti::Trend;

    fn report(language: Language) -> Report {
        let reading = Reading {
            temperature: 21.0,
            humidity: 50.0,
            pressure: 950.0,
            battery_volts: 4.05,
        };
        Report {
            measurements: Measurements::from_reading(&reading, -1.0, 505),
            forecast: Forecast {
                letter: 'K',
                trend: Trend::Steady,
                difference: 0.1,
                accuracy_percent: 47,
            },
            language,
        }
    }

    #[test]
    fn derives_measurements() {
        let m = report(Language::En).measurements;
        assert_eq!(m.temperature, 20.0);
        assert_eq!(m.heat_index, 20.0);
        assert_eq!(m.relative_pressure_hpa(), 1009);
        assert!(m.dew_point < m.temperature);
        assert!((m.dew_point_spread - (m.temperature - m.dew_point)).abs() < 1e-5);
    }

    #[test]
    fn publishes_every_value() {
        let topics = report(Language::En).topics().unwrap();
        let suffixes: Vec<&str, TOPIC_COUNT> = topics.iter().map(|t| t.suffix).collect();
        assert_eq!(
            suffixes.as_slice(),
            &[
                "tempc",
                "heatindex",
                "dewpoint",
                "spread",
                "humi",
                "abshpa",
                "relhpa",
                "battv",
                "zambrettisays",
                "trend",
                "accuracy"
            ]
        );

        let value = |suffix: &str| {
            topics
                .iter()
                .find(|t| t.suffix == suffix)
                .map(|t| t.value.as_str())
                .unwrap()
        };
        assert_eq!(value("tempc"), "20.00");
        assert_eq!(value("humi"), "50.00");
        assert_eq!(value("abshpa"), "950.00");
        assert_eq!(value("relhpa"), "1009");
        assert_eq!(value("battv"), "4.05");
        assert_eq!(value("zambrettisays"), "Fairly fine, showers likely");
        assert_eq!(value("trend"), "Steady");
        assert_eq!(value("accuracy"), "47");
    }

    #[test]
    fn texts_follow_language() {
        let topics = report(Language::Nl).topics().unwrap();
        assert_eq!(topics[8].value.as_str(), "Vrij mooi, buien waarschijnlijk");
        assert_eq!(topics[9].value.as_str(), "Stabiel");
    }

    #[test]
    fn every_translation_fits_a_value() {
        for language in Language::ALL {
            let texts = language.texts();
            for letter in 'A'..='Z' {
                assert!(texts.forecast(letter).len() <= VALUE_LEN);
            }
        }
    }

    #[test]
    fn influx_line() {
        let line = report(Language::En).write_influx("solarweatherstation").unwrap();
        assert!(line.starts_with("weather,station=solarweatherstation tempc=20.00,"));
        assert!(line.contains(",relhpa=1009i,"));
        assert!(line.ends_with(",trend=0.10,zambretti=\"K\",accuracy=47i"));
    }

    #[test]
    fn topic_names() {
        assert_eq!(
            topic_path("home/weather/solarweatherstation", "tempc")
                .unwrap()
                .as_str(),
            "home/weather/solarweatherstation/tempc"
        );
        assert_eq!(topic_path("station/", "humi").unwrap().as_str(), "station/humi");
    }
}
