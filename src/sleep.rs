use esp_hal::rtc_cntl::sleep::TimerWakeupSource;
use esp_hal::rtc_cntl::Rtc;
use log::info;

/// Enter deep sleep with a timer wakeup. The chip resets on wake, so the next
/// cycle starts again from `main`.
pub fn enter_deep_sleep_secs(mut rtc: Rtc, sleep_duration_secs: u64) -> ! {
    info!("Entering deep sleep for {sleep_duration_secs} secs");

    let timer = TimerWakeupSource::new(core::time::Duration::from_secs(sleep_duration_secs));
    rtc.sleep_deep(&[&timer]);
}
