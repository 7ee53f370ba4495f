//! Widget grid demo
//!
//! Shows two columns of labels beside a textbox and two buttons, then turns
//! every input event into a GUI event and redraws whatever changed.

use badge_display::color::to_rgb565;
use badge_display::{DisplayError, Element, Framebuffer, Grid, GuiEvent, Orientation, Theme};
use badge_hal::{Board, DevTree, Timeout, BACKLIGHT_MAX};
use embedded_graphics::prelude::{Point, Size};

use crate::version::banner;
use crate::{drawn, log_event, push, AppError};

/// Name shown in the banner
pub const APP_NAME: &str = "gui-demo";

/// The demo's widget grid
pub fn demo_grid() -> Grid {
    Grid::new(
        Point::new(10, 10),
        Size::new(216, 100),
        2,
        3,
        [
            Element::label("Row 1"),
            Element::textbox(),
            Element::label("Row 2"),
            Element::button("Hello,"),
            Element::label("Row 2"),
            Element::button("World!"),
        ],
    )
}

/// Run the demo
///
/// Returns `Ok(())` only if the board stops delivering input, which real
/// boards never do.
pub async fn run<B: Board>(
    board: &mut B,
    tree: &'static DevTree,
    fb: &mut Framebuffer<'_>,
) -> Result<(), AppError> {
    banner(APP_NAME);

    let dev = board.register(tree)?;
    let disp = tree.primary_display().ok_or(AppError::NoDisplay)?;
    if fb.pixels().len() != disp.frame_len() {
        return Err(AppError::Display(DisplayError::BufferSize));
    }
    info!("Registered device {}, display {}x{}", dev.0, disp.width, disp.height);

    if let Err(e) = board.disp_backlight(dev, 0, BACKLIGHT_MAX) {
        warn!("Backlight unavailable: {}", e);
    }

    fb.set_orientation(Orientation::RotCw);
    let theme = Theme::DEFAULT;
    let dims = fb.dims();
    let mut grid = demo_grid();
    grid.calc_layout(dims, &theme);

    fb.background(to_rgb565(theme.bg_col));
    drawn(grid.draw(fb, &theme));
    push(board, dev, fb);

    loop {
        let Some(ev) = board.event_wait(Timeout::Forever).await else {
            info!("Input closed");
            return Ok(());
        };
        log_event(&ev);

        let resp = grid.event(dims, &theme, GuiEvent::from(&ev));
        info!("Resp: {}", resp.code());

        if resp.is_change() {
            drawn(grid.redraw(fb, &theme));
            push(board, dev, fb);
        }
    }
}
