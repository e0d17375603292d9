use bme280_rs::{AsyncBme280, Configuration, Oversampling, SensorMode};
use embassy_time::{Delay, Duration, Timer};
use log::info;
use station_core::Reading;

use super::{Sensor, SensorError};
use crate::constants::BME280_SETTLE_MS;

const PASCAL_PER_HPA: f32 = 100.0;

pub struct Bme280<I2C> {
    sensor: AsyncBme280<I2C, Delay>,
}

impl<I2C: embedded_hal_async::i2c::I2c> Bme280<I2C> {
    pub async fn new(i2c: I2C) -> Result<Self, SensorError> {
        info!("Initialising BME280...");
        let mut sensor = AsyncBme280::new(i2c, Delay);
        sensor.init().await.map_err(|_| SensorError::InitFailure)?;

        info!("Initialised BME280");

        Ok(Self { sensor })
    }

    async fn set_mode(&mut self, mode: SensorMode) -> Result<(), SensorError> {
        self.sensor
            .set_sampling_configuration(
                Configuration::default()
                    .with_temperature_oversampling(Oversampling::Oversample1)
                    .with_pressure_oversampling(Oversampling::Oversample1)
                    .with_humidity_oversampling(Oversampling::Oversample1)
                    .with_sensor_mode(mode),
            )
            .await
            .map_err(|_| SensorError::InitFailure)
    }
}

impl<I2C: embedded_hal_async::i2c::I2c> Sensor for Bme280<I2C> {
    async fn measure(&mut self, reading: &mut Reading) -> Result<(), SensorError> {
        // forced mode takes a single sample, then the sensor sleeps again
        self.set_mode(SensorMode::Forced).await?;
        Timer::after(Duration::from_millis(BME280_SETTLE_MS)).await;

        let sample = self
            .sensor
            .read_sample()
            .await
            .map_err(|_| SensorError::MeasurementFailure)?;
        reading.temperature = sample
            .temperature
            .ok_or(SensorError::Bme280NoTemperatureData)?;
        reading.humidity = sample.humidity.ok_or(SensorError::Bme280NoHumidityData)?;
        reading.pressure = sample.pressure.ok_or(SensorError::Bme280NoPressureData)? / PASCAL_PER_HPA;
        Ok(())
    }
}
