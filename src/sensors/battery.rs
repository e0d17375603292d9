use esp_hal::{
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    peripherals::{ADC1, GPIO35},
    Blocking,
};
use log::debug;
use station_core::{battery::average_raw, Reading};

use super::{Sensor, SensorError};
use crate::constants::{BATTERY_CALIBRATION, BATTERY_SAMPLES};

/// Battery voltage read through a divider on GPIO35
pub struct Battery<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO35<'d>, ADC1<'d>>,
}

impl<'d> Battery<'d> {
    pub fn new(adc: ADC1<'d>, pin: GPIO35<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(pin, Attenuation::_11dB);
        let adc = Adc::new(adc, config);

        Self { adc, pin }
    }

    fn read_raw(&mut self) -> Result<u16, SensorError> {
        let mut samples = [0u16; BATTERY_SAMPLES];
        for sample in samples.iter_mut() {
            *sample = nb::block!(self.adc.read_oneshot(&mut self.pin))
                .map_err(|_| SensorError::MeasurementFailure)?;
        }
        average_raw(&samples).ok_or(SensorError::MeasurementFailure)
    }
}

impl Sensor for Battery<'_> {
    async fn measure(&mut self, reading: &mut Reading) -> Result<(), SensorError> {
        let raw = self.read_raw()?;
        reading.battery_volts = BATTERY_CALIBRATION.volts(raw);
        debug!("Battery: raw {} -> {:.2} V", raw, reading.battery_volts);
        Ok(())
    }
}
