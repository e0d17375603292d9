use core::str::FromStr;

use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use embassy_time::{with_timeout, Duration, Timer};
use esp_hal::{peripherals::WIFI, rng::Rng};
use esp_radio::{
    wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiError, WifiEvent},
    Controller,
};
use heapless::String;
use log::{info, warn};
use static_cell::StaticCell;

use crate::config::CONFIG;
use crate::constants::{WIFI_CONNECT_TIMEOUT_SECS, WIFI_RECONNECT_DELAY_MS};

static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();

#[derive(Debug)]
pub enum Error {
    WifiInitFailed,
    HostnameTooLong,
    SpawnFailed,
    Timeout,
}

/// Station mode network: joined once per wake cycle, dropped by deep sleep
pub struct Wifi {
    pub stack: Stack<'static>,
}

impl Wifi {
    pub fn new(
        radio: &'static Controller<'static>,
        wifi: WIFI<'static>,
        spawner: Spawner,
    ) -> Result<Self, Error> {
        let (controller, interfaces) =
            esp_radio::wifi::new(radio, wifi, Default::default()).map_err(|e| {
                warn!("WiFi driver: {:?}", e);
                Error::WifiInitFailed
            })?;

        let mut dhcp = DhcpConfig::default();
        dhcp.hostname =
            Some(String::<32>::from_str(CONFIG.device_id).map_err(|_| Error::HostnameTooLong)?);

        let rng = Rng::new();
        let seed = (rng.random() as u64) << 32 | rng.random() as u64;

        let (stack, runner) = embassy_net::new(
            interfaces.sta,
            embassy_net::Config::dhcpv4(dhcp),
            RESOURCES.init(StackResources::new()),
            seed,
        );

        spawner
            .spawn(join(controller))
            .map_err(|_| Error::SpawnFailed)?;
        spawner
            .spawn(net_task(runner))
            .map_err(|_| Error::SpawnFailed)?;

        Ok(Self { stack })
    }

    /// Wait for the link and a DHCP lease, giving up after
    /// `WIFI_CONNECT_TIMEOUT_SECS` so a missing router costs one cycle only.
    pub async fn connect(&self) -> Result<(), Error> {
        let ready = async {
            self.stack.wait_link_up().await;
            info!("WiFi link up, waiting for DHCP...");
            self.stack.wait_config_up().await;
        };
        with_timeout(Duration::from_secs(WIFI_CONNECT_TIMEOUT_SECS), ready)
            .await
            .map_err(|_| Error::Timeout)?;

        if let Some(config) = self.stack.config_v4() {
            info!("Got IP: {}", config.address);
        }
        Ok(())
    }
}

fn configure(controller: &mut WifiController<'static>) -> Result<(), WifiError> {
    let client = ClientConfig::default()
        .with_ssid(CONFIG.wifi_ssid.into())
        .with_password(CONFIG.wifi_psk.into());
    controller.set_config(&ModeConfig::Client(client))
}

/// Join the configured network and rejoin after a drop. Owns the controller
/// until deep sleep, dropping it would shut the radio down.
#[embassy_executor::task]
async fn join(mut controller: WifiController<'static>) {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;

        if !matches!(controller.is_started(), Ok(true)) {
            if let Err(e) = configure(&mut controller) {
                warn!("WiFi config rejected: {:?}", e);
            } else if let Err(e) = controller.start_async().await {
                warn!("WiFi start failed: {:?}", e);
            }
        }

        info!("Joining {:?} (attempt {})", CONFIG.wifi_ssid, attempt);
        match controller.connect_async().await {
            Ok(()) => {
                info!("WiFi joined");
                attempt = 0;
                controller.wait_for_event(WifiEvent::StaDisconnected).await;
                warn!("WiFi connection lost");
            }
            Err(e) => {
                warn!("WiFi join failed: {:?}", e);
                Timer::after(Duration::from_millis(WIFI_RECONNECT_DELAY_MS)).await;
            }
        }
    }
}

#[embassy_executor::task]
async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await
}
