use embedded_io_async::{Read, Write};
use rust_mqtt::{
    client::{
        client::MqttClient,
        client_config::{ClientConfig, MqttVersion},
    },
    packet::v5::publish_packet::QualityOfService,
    utils::rng_generator::CountingRng,
};

use crate::config::CONFIG;
use crate::constants::{MQTT_KEEP_ALIVE_SECS, MQTT_MAX_PROPERTIES};

#[derive(Debug)]
pub enum Error {
    ConnectionFailed,
    PublishMessageFailed,
}

pub struct Mqtt<'a, T>
where
    T: Read + Write,
{
    client: MqttClient<'a, T, MQTT_MAX_PROPERTIES, CountingRng>,
}

impl<'a, T> Mqtt<'a, T>
where
    T: Read + Write,
{
    pub async fn new(
        transport: T,
        tx_buffer: &'a mut [u8],
        rx_buffer: &'a mut [u8],
    ) -> Result<Self, Error> {
        let mut config = ClientConfig::new(MqttVersion::MQTTv5, CountingRng(20000));
        config.add_max_subscribe_qos(QualityOfService::QoS0);
        config.add_client_id(CONFIG.device_id);
        config.keep_alive = MQTT_KEEP_ALIVE_SECS;
        config.max_packet_size = tx_buffer.len() as u32;
        if let Some(username) = CONFIG.mqtt_username {
            config.add_username(username);
        }
        if let Some(password) = CONFIG.mqtt_password {
            config.add_password(password);
        }

        let tx_len = tx_buffer.len();
        let rx_len = rx_buffer.len();
        let mut client = MqttClient::<_, MQTT_MAX_PROPERTIES, _>::new(
            transport, tx_buffer, tx_len, rx_buffer, rx_len, config,
        );

        match client.connect_to_broker().await {
            Ok(()) => {
                log::info!("MQTT connected to broker successfully");
            }
            Err(e) => {
                log::error!("MQTT connect_to_broker failed: {:?}", e);
                return Err(Error::ConnectionFailed);
            }
        }

        Ok(Self { client })
    }

    /// Publish with QoS 0. Retained values let subscribers see the last
    /// reading while the station sleeps.
    pub async fn send_message(
        &mut self,
        topic: &str,
        message: &[u8],
        retain: bool,
    ) -> Result<(), Error> {
        match self
            .client
            .send_message(topic, message, QualityOfService::QoS0, retain)
            .await
        {
            Ok(()) => {
                log::debug!("Published {} bytes to {}", message.len(), topic);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to publish message to {}: {:?}", topic, e);
                Err(Error::PublishMessageFailed)
            }
        }
    }

    pub async fn disconnect(mut self) {
        if let Err(e) = self.client.disconnect().await {
            log::warn!("MQTT disconnect failed: {:?}", e);
        }
    }
}
