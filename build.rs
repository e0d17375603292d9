use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;
use station_core::config::{Config, Language};

fn default_device_id() -> String {
    "solarweatherstation".into()
}

fn default_mqtt_port() -> u16 {
    1883
}

fn default_mqtt_topic() -> String {
    "home/weather/solarweatherstation".into()
}

fn default_low_battery_volts() -> f32 {
    3.3
}

fn default_low_battery_sleep_min() -> u32 {
    60
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_device_id")]
    device_id: String,
    wifi_ssid: String,
    wifi_psk: String,
    mqtt_hostname: String,
    #[serde(default = "default_mqtt_port")]
    mqtt_port: u16,
    mqtt_username: Option<String>,
    mqtt_password: Option<String>,
    #[serde(default = "default_mqtt_topic")]
    mqtt_topic: String,
    language: String,
    temp_corr: f32,
    elevation: i32,
    sleep_time_min: u32,
    ntp_server: String,
    tz: i8,
    dst_mn: i16,
    #[serde(default = "default_low_battery_volts")]
    low_battery_volts: f32,
    #[serde(default = "default_low_battery_sleep_min")]
    low_battery_sleep_min: u32,
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    let language = Language::from_code(&raw.language).ok_or_else(|| {
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        format!(
            "language {:?} is not supported, use one of {}",
            raw.language,
            supported.join("/")
        )
    })?;

    let config = Config {
        device_id: leak(raw.device_id),
        wifi_ssid: leak(raw.wifi_ssid),
        wifi_psk: leak(raw.wifi_psk),
        mqtt_hostname: leak(raw.mqtt_hostname),
        mqtt_port: raw.mqtt_port,
        mqtt_username: raw.mqtt_username.map(leak),
        mqtt_password: raw.mqtt_password.map(leak),
        mqtt_topic: leak(raw.mqtt_topic),
        language,
        temp_corr: raw.temp_corr,
        elevation: raw.elevation,
        sleep_time_min: raw.sleep_time_min,
        ntp_server: leak(raw.ntp_server),
        tz: raw.tz,
        dst_mn: raw.dst_mn,
        low_battery_volts: raw.low_battery_volts,
        low_battery_sleep_min: raw.low_battery_sleep_min,
    };

    // Refuse to build firmware that cannot work
    config
        .validate()
        .map_err(|e| format!("invalid cfg.toml: {}", e))?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            device_id: {device_id:?},
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            mqtt_topic: {mt:?},
            language: Language::{language:?},
            temp_corr: {temp_corr:?},
            elevation: {elevation},
            sleep_time_min: {sleep},
            ntp_server: {ntp:?},
            tz: {tz},
            dst_mn: {dst},
            low_battery_volts: {low_v:?},
            low_battery_sleep_min: {low_sleep},
        }};

        const _: () = assert!(CONFIG.sleep_time_min > 0);
    "#,
        device_id = config.device_id,
        ssid = config.wifi_ssid,
        psk = config.wifi_psk,
        mh = config.mqtt_hostname,
        mp = config.mqtt_port,
        mu = config.mqtt_username,
        mpw = config.mqtt_password,
        mt = config.mqtt_topic,
        language = config.language,
        temp_corr = config.temp_corr,
        elevation = config.elevation,
        sleep = config.sleep_time_min,
        ntp = config.ntp_server,
        tz = config.tz,
        dst = config.dst_mn,
        low_v = config.low_battery_volts,
        low_sleep = config.low_battery_sleep_min,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
