use embassy_net::Stack;
use static_cell::StaticCell;
use station_core::{
    report::{topic_path, Report},
    Forecast, Measurements, PressureHistory, Reading,
};

use crate::config::CONFIG;
use crate::constants::*;
use crate::mqtt::Mqtt;
use crate::ntp;
use crate::storage::HistoryStorage;
use crate::transport::Transport;

static RX_BUF: StaticCell<[u8; RX_BUFFER_SIZE]> = StaticCell::new();
static TX_BUF: StaticCell<[u8; TX_BUFFER_SIZE]> = StaticCell::new();
static MQTT_RX_BUF: StaticCell<[u8; MQTT_RX_BUFFER_SIZE]> = StaticCell::new();
static MQTT_TX_BUF: StaticCell<[u8; MQTT_TX_BUFFER_SIZE]> = StaticCell::new();

#[derive(Debug)]
pub enum Error {
    Transport,
    Mqtt,
    Format,
}

/// Everything one wake cycle does once the network is up: fetch the time,
/// advance the pressure history, forecast and publish.
pub struct Station {
    stack: Stack<'static>,
    storage: HistoryStorage<'static>,
    rx_buf: &'static mut [u8; RX_BUFFER_SIZE],
    tx_buf: &'static mut [u8; TX_BUFFER_SIZE],
    mqtt_rx_buf: &'static mut [u8; MQTT_RX_BUFFER_SIZE],
    mqtt_tx_buf: &'static mut [u8; MQTT_TX_BUFFER_SIZE],
}

impl Station {
    pub fn new(stack: Stack<'static>, storage: HistoryStorage<'static>) -> Self {
        Self {
            stack,
            storage,
            rx_buf: RX_BUF.init([0; RX_BUFFER_SIZE]),
            tx_buf: TX_BUF.init([0; TX_BUFFER_SIZE]),
            mqtt_rx_buf: MQTT_RX_BUF.init([0; MQTT_RX_BUFFER_SIZE]),
            mqtt_tx_buf: MQTT_TX_BUF.init([0; MQTT_TX_BUFFER_SIZE]),
        }
    }

    pub async fn forecast(&mut self, reading: &Reading) -> Report {
        let measurements = Measurements::from_reading(reading, CONFIG.temp_corr, CONFIG.elevation);
        let pressure = measurements.relative_pressure_hpa();

        let now = match ntp::unix_time(self.stack, CONFIG.ntp_server).await {
            Ok(now) => Some(now),
            Err(e) => {
                log::warn!("No time from {}: {:?}", CONFIG.ntp_server, e);
                None
            }
        };

        if let Some(local) = now.and_then(|now| CONFIG.local_time(now)) {
            log::info!("Local time: {}", local);
        }
        let month = now.and_then(|now| CONFIG.season_month(now));

        let history = self.update_history(now, pressure);
        let forecast = Forecast::new(&history, pressure, month);

        Report {
            measurements,
            forecast,
            language: CONFIG.language,
        }
    }

    /// Without the current time a sample cannot be placed in the history, so
    /// the stored one is used unchanged.
    fn update_history(&mut self, now: Option<i64>, pressure_hpa: u16) -> PressureHistory {
        let stored = match self.storage.load() {
            Ok(history) => Some(history),
            Err(e) => {
                log::info!("No usable pressure history: {:?}", e);
                None
            }
        };

        match (stored, now) {
            (Some(mut history), Some(now)) => {
                let update = history.update(now, pressure_hpa);
                log::info!(
                    "Pressure history {:?}, accuracy {}%",
                    update,
                    history.accuracy_percent()
                );
                if update.is_dirty() {
                    self.save_history(&history);
                }
                history
            }
            (None, Some(now)) => {
                let history = PressureHistory::new(now, pressure_hpa);
                self.save_history(&history);
                history
            }
            (Some(history), None) => history,
            (None, None) => PressureHistory::new(0, pressure_hpa),
        }
    }

    fn save_history(&mut self, history: &PressureHistory) {
        match self.storage.save(history) {
            Ok(()) => log::debug!("Pressure history saved"),
            Err(e) => log::error!("Failed to save pressure history: {:?}", e),
        }
    }

    pub async fn publish(&mut self, report: &Report) -> Result<(), Error> {
        let topics = report.topics().map_err(|_| Error::Format)?;

        let transport = Transport::new(
            self.stack,
            &mut self.rx_buf[..],
            &mut self.tx_buf[..],
            CONFIG.mqtt_hostname,
            CONFIG.mqtt_port,
        )
        .await
        .map_err(|e| {
            log::error!("Transport failed: {:?}", e);
            Error::Transport
        })?;

        let mut mqtt = Mqtt::new(
            transport,
            &mut self.mqtt_tx_buf[..],
            &mut self.mqtt_rx_buf[..],
        )
        .await
        .map_err(|_| Error::Mqtt)?;

        for topic in topics.iter() {
            let path = topic_path(CONFIG.mqtt_topic, topic.suffix).map_err(|_| Error::Format)?;
            log::info!("{} = {}", path, topic.value);
            mqtt.send_message(&path, topic.value.as_bytes(), true)
                .await
                .map_err(|_| Error::Mqtt)?;
        }

        #[cfg(feature = "influx")]
        {
            let line = report
                .write_influx(CONFIG.device_id)
                .map_err(|_| Error::Format)?;
            let path = topic_path(CONFIG.mqtt_topic, "influx").map_err(|_| Error::Format)?;
            mqtt.send_message(&path, line.as_bytes(), false)
                .await
                .map_err(|_| Error::Mqtt)?;
        }

        mqtt.disconnect().await;

        log::info!("MQTT data published successfully");
        Ok(())
    }
}
