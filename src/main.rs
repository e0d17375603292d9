#![no_std]
#![no_main]

use static_cell::StaticCell;

use embassy_executor::Spawner;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{self as hal};
use esp_println::logger::init_logger;
use esp_radio::Controller;
use esp_storage::FlashStorage;

use hal::{
    i2c::master::{BusTimeout, I2c},
    rtc_cntl::Rtc,
    time::Rate,
    timer::timg::TimerGroup,
};

pub mod config;
pub mod constants;
mod mqtt;
mod ntp;
pub mod sensors;
mod sleep;
mod station;
mod storage;
pub mod transport;
mod wifi;

use config::CONFIG;
use constants::*;
use sensors::{battery::Battery, bme280::Bme280, Sensors};
use sleep::enter_deep_sleep_secs;
use station::Station;
use station_core::battery::is_low;
use storage::HistoryStorage;
use wifi::Wifi;

esp_bootloader_esp_idf::esp_app_desc!();

static RADIO: StaticCell<Controller<'static>> = StaticCell::new();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    init_logger(log::LevelFilter::Info);

    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let rtc = Rtc::new(peripherals.LPWR);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!(
        "Solar weather station v{} ({}), language {}",
        VERSION,
        CONFIG.device_id,
        CONFIG.language
    );

    // measure before the radio warms up the board
    let (sda, scl) = (peripherals.GPIO21, peripherals.GPIO22);

    let i2c_config = hal::i2c::master::Config::default()
        .with_frequency(Rate::from_khz(100))
        .with_timeout(BusTimeout::BusCycles(24));

    let i2c = match I2c::new(peripherals.I2C0, i2c_config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl).into_async(),
        Err(e) => {
            log::error!("Failed to configure I2C: {:?}", e);
            enter_deep_sleep_secs(rtc, SLEEP_ON_ERROR_SECS);
        }
    };

    let bme280 = match Bme280::new(i2c).await {
        Ok(bme280) => bme280,
        Err(e) => {
            log::error!("BME280 not found: {:?}", e);
            enter_deep_sleep_secs(rtc, SLEEP_ON_ERROR_SECS);
        }
    };
    let battery = Battery::new(peripherals.ADC1, peripherals.GPIO35);
    let mut sensors = Sensors::new(bme280, battery);

    let reading = match sensors.measure().await {
        Ok(reading) => reading,
        Err(e) => {
            log::error!("Measurement failed: {:?}", e);
            enter_deep_sleep_secs(rtc, SLEEP_ON_ERROR_SECS);
        }
    };
    log::debug!("Sensor data received: {:?}", reading);

    let sleep_secs = CONFIG.next_sleep_secs(reading.battery_volts);
    if is_low(reading.battery_volts, CONFIG.low_battery_volts) {
        log::warn!(
            "Battery low ({:.2} V), next wake in {} min",
            reading.battery_volts,
            CONFIG.low_battery_sleep_min
        );
    }

    let radio = match esp_radio::init() {
        Ok(radio) => RADIO.init(radio),
        Err(e) => {
            log::error!("Failed to initialise radio: {:?}", e);
            enter_deep_sleep_secs(rtc, sleep_secs);
        }
    };

    let wifi = match Wifi::new(radio, peripherals.WIFI, spawner) {
        Ok(wifi) => wifi,
        Err(e) => {
            log::error!("Failed to initialise WiFi: {:?}", e);
            enter_deep_sleep_secs(rtc, sleep_secs);
        }
    };

    if let Err(e) = wifi.connect().await {
        log::error!("WiFi unavailable: {:?}", e);
        enter_deep_sleep_secs(rtc, sleep_secs);
    }

    let storage = HistoryStorage::new(FlashStorage::new(peripherals.FLASH), HISTORY_FLASH_OFFSET);
    let mut station = Station::new(wifi.stack, storage);

    let report = station.forecast(&reading).await;
    log::info!(
        "Zambretti says {} ({}), {}",
        report.forecast.letter,
        report.forecast_text(),
        report.trend_text()
    );

    if let Err(e) = station.publish(&report).await {
        log::error!("Failed to publish: {:?}", e);
    }

    enter_deep_sleep_secs(rtc, sleep_secs);
}
