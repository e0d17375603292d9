use embedded_storage::{ReadStorage, Storage};
use esp_storage::{FlashStorage, FlashStorageError};
use station_core::history::{self, PressureHistory, MAX_ENCODED_LEN};

#[derive(Debug)]
pub enum Error {
    #[allow(dead_code)]
    Flash(FlashStorageError),
    #[allow(dead_code)]
    History(history::Error),
}

/// Pressure history kept in a reserved flash sector across deep sleep
pub struct HistoryStorage<'d> {
    flash: FlashStorage<'d>,
    offset: u32,
}

impl<'d> HistoryStorage<'d> {
    pub fn new(flash: FlashStorage<'d>, offset: u32) -> Self {
        Self { flash, offset }
    }

    pub fn load(&mut self) -> Result<PressureHistory, Error> {
        let mut bytes = [0u8; MAX_ENCODED_LEN];
        self.flash
            .read(self.offset, &mut bytes)
            .map_err(Error::Flash)?;
        PressureHistory::from_bytes(&bytes).map_err(Error::History)
    }

    pub fn save(&mut self, history: &PressureHistory) -> Result<(), Error> {
        let mut bytes = [0u8; MAX_ENCODED_LEN];
        history.to_bytes(&mut bytes).map_err(Error::History)?;
        self.flash.write(self.offset, &bytes).map_err(Error::Flash)
    }
}
