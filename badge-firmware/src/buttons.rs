//! Button scan task
//!
//! Samples every wired button at a fixed period, debounces them and turns
//! transitions into input events for the registered tree.

use defmt::*;
use embassy_time::{Duration, Ticker};

use badge_core::input::{gpio_event, ButtonScanner, ScanTiming};
use badge_hal::Modifiers;

use crate::channels::{INPUT_CHANNEL, REGISTERED};
use crate::gpio::Button;

/// Number of scanned buttons
pub const BUTTON_COUNT: usize = 7;

/// GPIO of each scanned button, in scanner order
pub const BUTTON_PINS: [u8; BUTTON_COUNT] = [2, 3, 4, 5, 6, 7, 22];

/// Debounce and repeat timing
pub const SCAN_TIMING: ScanTiming = ScanTiming {
    period_ms: 5,
    debounce_ms: 20,
    hold_ms: 500,
    repeat_ms: 100,
};

/// Button scan task
#[embassy_executor::task]
pub async fn button_task(mut scanner: ButtonScanner<Button, BUTTON_COUNT>) {
    info!("Button task started");

    // Pins only mean something once a tree says what they are
    let (tree, dev_id) = REGISTERED.wait().await;
    debug!("Scanning {} buttons for device {}", BUTTON_COUNT, dev_id);

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_TIMING.period_ms as u64));
    loop {
        ticker.next().await;

        for (index, kind) in scanner.scan() {
            let Some(&gpio) = BUTTON_PINS.get(index) else {
                continue;
            };
            let Some(event) = gpio_event(tree, dev_id, gpio, kind, Modifiers::empty()) else {
                trace!("GPIO {} not in device tree", gpio);
                continue;
            };

            trace!("GPIO {} {}", gpio, kind.name());
            if INPUT_CHANNEL.try_send(event).is_err() {
                warn!("Input queue full, dropped GPIO {} event", gpio);
            }
        }
    }
}
