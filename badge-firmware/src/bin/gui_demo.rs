//! Widget grid demo on the RP2040 badge

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use badge_apps::gui_demo;
use badge_display::Framebuffer;
use badge_firmware::buttons::button_task;
use badge_firmware::devtree::{BADGE_TREE, FRAME_LEN, PANEL};

// Too large for the stack; lives in .bss
static FRAMEBUFFER: ConstStaticCell<[u8; FRAME_LEN]> = ConstStaticCell::new([0; FRAME_LEN]);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (mut board, scanner) = badge_firmware::init(p);
    spawner.spawn(unwrap!(button_task(scanner)));

    let mut fb = unwrap!(Framebuffer::for_display(FRAMEBUFFER.take(), &PANEL));

    match gui_demo::run(&mut board, &BADGE_TREE, &mut fb).await {
        Ok(()) => info!("GUI demo finished"),
        Err(e) => error!("GUI demo failed: {}", e),
    }
}
