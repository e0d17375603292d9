#![allow(async_fn_in_trait)]

use esp_hal::{i2c::master::I2c, Async};
use station_core::Reading;

pub mod battery;
pub mod bme280;

use crate::sensors::{battery::Battery, bme280::Bme280};

#[derive(Debug)]
pub enum SensorError {
    InitFailure,
    MeasurementFailure,
    Bme280NoTemperatureData,
    Bme280NoHumidityData,
    Bme280NoPressureData,
}

pub trait Sensor {
    async fn measure(&mut self, reading: &mut Reading) -> Result<(), SensorError>;
}

pub struct Sensors {
    pub bme280: Bme280<I2c<'static, Async>>,
    pub battery: Battery<'static>,
}

impl Sensors {
    pub fn new(bme280: Bme280<I2c<'static, Async>>, battery: Battery<'static>) -> Self {
        Self { bme280, battery }
    }

    pub async fn measure(&mut self) -> Result<Reading, SensorError> {
        let mut reading = Reading::default();
        self.bme280.measure(&mut reading).await?;
        self.battery.measure(&mut reading).await?;
        Ok(reading)
    }
}
