//! Breakout on the RP2040 badge
//!
//! Plays one game and leaves the final frame on screen.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use badge_apps::breakout;
use badge_core::config::BreakoutConfig;
use badge_display::Framebuffer;
use badge_firmware::buttons::button_task;
use badge_firmware::devtree::{BADGE_TREE, FRAME_LEN, PANEL};

static FRAMEBUFFER: ConstStaticCell<[u8; FRAME_LEN]> = ConstStaticCell::new([0; FRAME_LEN]);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (mut board, scanner) = badge_firmware::init(p);
    spawner.spawn(unwrap!(button_task(scanner)));

    let mut fb = unwrap!(Framebuffer::for_display(FRAMEBUFFER.take(), &PANEL));
    let cfg = BreakoutConfig::for_screen(PANEL.width as u32, PANEL.height as u32);
    let mut delay = Delay;

    match breakout::run(&mut board, &BADGE_TREE, &mut fb, &mut delay, cfg).await {
        Ok(outcome) => info!("Breakout finished: {}", outcome),
        Err(e) => error!("Breakout failed: {}", e),
    }

    // Dropping the board would release the backlight pin
    core::future::pending::<()>().await;
}
