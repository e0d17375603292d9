use station_core::battery::BatteryCalibration;

/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of the heap in DRAM, mostly used by the WiFi driver
pub const HEAP_SIZE: usize = 72 * 1024;

/// Size of the TCP socket receive buffer
pub const RX_BUFFER_SIZE: usize = 4096;
/// Size of the TCP socket transmit buffer
pub const TX_BUFFER_SIZE: usize = 4096;

/// Size of the MQTT client receive buffer for application data
pub const MQTT_RX_BUFFER_SIZE: usize = 1024;
/// Size of the MQTT client transmit buffer for application data
pub const MQTT_TX_BUFFER_SIZE: usize = 1024;
/// Maximum number of MQTT v5 properties per packet
pub const MQTT_MAX_PROPERTIES: usize = 5;
/// MQTT keep alive, the session only lives for one wake cycle
pub const MQTT_KEEP_ALIVE_SECS: u16 = 30;

/// Seconds to wait for the WiFi link and a DHCP lease
pub const WIFI_CONNECT_TIMEOUT_SECS: u64 = 20;
/// Delay before the connection task retries a failed join
pub const WIFI_RECONNECT_DELAY_MS: u64 = 5000;

/// Standard SNTP port
pub const NTP_PORT: u16 = 123;
/// Seconds to wait for an SNTP answer
pub const NTP_TIMEOUT_SECS: u64 = 5;
/// UDP buffer size for SNTP, one packet is 48 bytes
pub const NTP_BUFFER_SIZE: usize = 128;

/// Seconds to wait for the broker to accept the TCP connection
pub const SOCKET_TIMEOUT_SECS: u64 = 30;

/// Sleep used when the hardware could not even be initialised
pub const SLEEP_ON_ERROR_SECS: u64 = 60 * 5;

/// Offset of the flash sector holding the pressure history: the last 4 KiB of
/// a 4 MiB flash, outside every partition of the default table.
pub const HISTORY_FLASH_OFFSET: u32 = 0x3F_F000;

/// Number of ADC readings averaged for one battery measurement
pub const BATTERY_SAMPLES: usize = 8;

/// 12 bit ADC at 11 dB attenuation behind a 1:1 divider (2x 100k)
pub const BATTERY_CALIBRATION: BatteryCalibration = BatteryCalibration {
    full_scale_raw: 4095,
    full_scale_volts: 6.6,
};

/// BME280 needs at most ~10 ms per sample with x1 oversampling
pub const BME280_SETTLE_MS: u64 = 50;
