//! Breakout
//!
//! Fixed-step game loop. Each frame:
//!
//! 1. Wait one frame delay
//! 2. Erase the paddle and ball at their old positions
//! 3. Advance the simulation, erase a struck block and repaint live blocks
//!    the old ball overlapped
//! 4. Poll one input event, without blocking, to steer the paddle
//! 5. Draw paddle, ball, lives and the end-of-game banner
//! 6. Push the frame
//!
//! The loop ends once the game is won or lost.

use core::fmt::Write;

use badge_core::config::BreakoutConfig;
use badge_core::game::{Ball, Breakout};
use badge_core::state::Outcome;
use badge_display::color::{row_color, to_rgb565, BLACK, WHITE};
use badge_display::draw::{draw_text, draw_text_centered, fill_circle, fill_rect};
use badge_display::{DisplayError, Framebuffer, Orientation};
use badge_hal::{Board, DevTree, EventKind, InputEvent, NavInput, Timeout, BACKLIGHT_MAX};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::prelude::Point;
use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::version::banner;
use crate::{drawn, push, AppError};

/// Name shown in the banner
pub const APP_NAME: &str = "breakout";

/// Gap drawn between neighbouring blocks
const BLOCK_GAP: i32 = 1;

/// Paddle direction requested by an input event, if it steers at all
///
/// Left and right steer while held; releasing either stops the paddle.
pub fn steering(ev: &InputEvent) -> Option<i8> {
    let direction = match ev.nav_input {
        NavInput::Left => -1,
        NavInput::Right => 1,
        _ => return None,
    };
    match ev.kind {
        EventKind::Press | EventKind::Hold => Some(direction),
        EventKind::Release => Some(0),
    }
}

/// Run one game
pub async fn run<B, D>(
    board: &mut B,
    tree: &'static DevTree,
    fb: &mut Framebuffer<'_>,
    delay: &mut D,
    cfg: BreakoutConfig,
) -> Result<Outcome, AppError>
where
    B: Board,
    D: DelayNs,
{
    banner(APP_NAME);

    let dev = board.register(tree)?;
    let disp = tree.primary_display().ok_or(AppError::NoDisplay)?;
    if fb.pixels().len() != disp.frame_len() {
        return Err(AppError::Display(DisplayError::BufferSize));
    }

    fb.set_orientation(Orientation::Upright);
    let dims = fb.dims();
    if cfg.width as u32 > dims.width || cfg.height as u32 > dims.height {
        return Err(AppError::Display(DisplayError::InvalidDimensions));
    }
    let mut game = Breakout::new(cfg)?;
    info!(
        "Breakout {}x{}: {} blocks, {} lives",
        cfg.width,
        cfg.height,
        cfg.block_count(),
        cfg.lives
    );

    if let Err(e) = board.disp_backlight(dev, 0, BACKLIGHT_MAX) {
        warn!("Backlight unavailable: {}", e);
    }

    fb.background(to_rgb565(BLACK));
    draw_blocks(fb, &game);
    draw_sprites(fb, &game, WHITE);
    draw_lives(fb, &game);
    push(board, dev, fb);

    loop {
        delay.delay_ms(cfg.frame_delay_ms).await;

        let old_ball = game.ball();
        draw_sprites(fb, &game, BLACK);
        let report = game.tick();

        if let Some(hit) = report.cleared {
            debug!("Block {},{} cleared, {}", hit.row, hit.col, hit.bounce);
            erase_block(fb, &cfg, hit.row, hit.col);
        }
        repair_blocks(fb, &game, old_ball);

        if let Some(ev) = board.event_wait(Timeout::Immediate).await {
            trace!("Input {} {}", ev.nav_input, ev.kind.name());
            if let Some(direction) = steering(&ev) {
                game.steer(direction);
            }
        }

        draw_sprites(fb, &game, WHITE);
        if report.life_lost {
            info!("Ball lost, {} lives left", game.lives());
            draw_lives(fb, &game);
        }

        if let Some(text) = report.outcome.banner() {
            let center = Point::new(cfg.width / 2, cfg.height / 2);
            drawn(draw_text_centered(fb, &FONT_10X20, WHITE, center, text));
        }
        push(board, dev, fb);

        if report.outcome.is_terminal() {
            info!("Game over after {} ticks: {}", game.ticks(), report.outcome);
            return Ok(report.outcome);
        }
    }
}

fn block_rect(cfg: &BreakoutConfig, row: u8, col: u8) -> (i32, i32, i32, i32) {
    let w = cfg.cell_width();
    let h = cfg.cell_height();
    (col as i32 * w, row as i32 * h, w, h)
}

fn draw_block(fb: &mut Framebuffer<'_>, cfg: &BreakoutConfig, row: u8, col: u8) {
    let (x, y, w, h) = block_rect(cfg, row, col);
    drawn(fill_rect(
        fb,
        row_color(row),
        x + BLOCK_GAP,
        y + BLOCK_GAP,
        w - 2 * BLOCK_GAP,
        h - 2 * BLOCK_GAP,
    ));
}

fn draw_blocks(fb: &mut Framebuffer<'_>, game: &Breakout) {
    let cfg = game.config();
    for (row, col) in game.grid().alive_cells() {
        draw_block(fb, cfg, row, col);
    }
}

/// Repaint live blocks under an erased ball
fn repair_blocks(fb: &mut Framebuffer<'_>, game: &Breakout, ball: Ball) {
    let cfg = game.config();
    let r = cfg.ball_radius;
    if ball.y - r >= cfg.block_area_height {
        return;
    }

    for (row, col) in game.grid().alive_cells() {
        let (x, y, w, h) = block_rect(cfg, row, col);
        let overlaps =
            ball.x + r >= x && ball.x - r < x + w && ball.y + r >= y && ball.y - r < y + h;
        if overlaps {
            draw_block(fb, cfg, row, col);
        }
    }
}

fn erase_block(fb: &mut Framebuffer<'_>, cfg: &BreakoutConfig, row: u8, col: u8) {
    let (x, y, w, h) = block_rect(cfg, row, col);
    drawn(fill_rect(fb, BLACK, x, y, w, h));
}

/// Draw (or erase, with black) the paddle and the ball
fn draw_sprites(fb: &mut Framebuffer<'_>, game: &Breakout, argb: u32) {
    let cfg = game.config();
    let paddle = game.paddle();
    let ball = game.ball();

    drawn(fill_rect(
        fb,
        argb,
        paddle.x - cfg.paddle_width / 2,
        cfg.paddle_y,
        cfg.paddle_width,
        cfg.paddle_height,
    ));
    drawn(fill_circle(fb, argb, ball.x, ball.y, cfg.ball_radius));
}

/// Lives counter in the strip below the paddle
fn draw_lives(fb: &mut Framebuffer<'_>, game: &Breakout) {
    let cfg = game.config();
    let top = cfg.paddle_y + cfg.paddle_height + 1;
    drawn(fill_rect(fb, BLACK, 0, top, cfg.width, cfg.height - top));

    let mut text: String<16> = String::new();
    // Fits: "Lives: " plus at most three digits
    let _ = write!(text, "Lives: {}", game.lives().max(0));
    drawn(draw_text(fb, &FONT_6X10, WHITE, Point::new(2, top), &text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{key, MockBoard, NoDelay, FRAME_LEN, PANEL, TREE};
    use badge_core::config::ConfigError;
    use embassy_futures::block_on;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::RgbColor;

    const LEFT: u32 = 2;
    const RIGHT: u32 = 3;

    fn cfg() -> BreakoutConfig {
        BreakoutConfig::for_screen(240, 240)
    }

    fn frame_pixel(frame: &[u8], x: usize, y: usize) -> Rgb565 {
        let i = (y * 240 + x) * 2;
        let raw = u16::from_le_bytes([frame[i], frame[i + 1]]);
        Rgb565::from(embedded_graphics::pixelcolor::raw::RawU16::new(raw))
    }

    #[test]
    fn test_steering() {
        assert_eq!(steering(&key(LEFT, EventKind::Press)), Some(-1));
        assert_eq!(steering(&key(RIGHT, EventKind::Hold)), Some(1));
        assert_eq!(steering(&key(RIGHT, EventKind::Release)), Some(0));
        assert_eq!(steering(&key(0, EventKind::Press)), None);
    }

    #[test]
    fn test_single_block_is_won() {
        // One block spanning the whole width cannot be missed
        let cfg = BreakoutConfig {
            rows: 1,
            cols: 1,
            ..cfg()
        };
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let mut board = MockBoard::default();

        let outcome = block_on(run(&mut board, &TREE, &mut fb, &mut NoDelay, cfg)).unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(board.backlight, Some(BACKLIGHT_MAX));
        assert!(board.updates > 1);
        assert!(board.waits.iter().all(|t| *t == Timeout::Immediate));
        // Block area is blank again
        assert_eq!(frame_pixel(&board.last_frame, 120, 40), Rgb565::BLACK);
    }

    #[test]
    fn test_dodging_paddle_loses() {
        // Holding left parks the paddle far from where the served ball lands
        let cfg = BreakoutConfig { lives: 0, ..cfg() };
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let mut board = MockBoard::with_events([key(LEFT, EventKind::Press)]);

        let outcome = block_on(run(&mut board, &TREE, &mut fb, &mut NoDelay, cfg)).unwrap();
        assert_eq!(outcome, Outcome::Lost);
    }

    #[test]
    fn test_first_frame() {
        let cfg = cfg();
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let game = Breakout::new(cfg).unwrap();

        fb.background(to_rgb565(BLACK));
        draw_blocks(&mut fb, &game);
        draw_sprites(&mut fb, &game, WHITE);
        draw_lives(&mut fb, &game);

        // Block interiors carry the row colour, gaps stay black
        assert_eq!(fb.pixel(15, 8), Some(to_rgb565(row_color(0))));
        assert_eq!(fb.pixel(15, 24), Some(to_rgb565(row_color(1))));
        assert_eq!(fb.pixel(30, 8), Some(Rgb565::BLACK));
        // Paddle centred on its row, ball just above it
        assert_eq!(fb.pixel(120, cfg.paddle_y + 1), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(120, cfg.paddle_y - cfg.ball_radius - 1), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(0, cfg.paddle_y + 1), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_erase_block() {
        let cfg = cfg();
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let game = Breakout::new(cfg).unwrap();

        draw_blocks(&mut fb, &game);
        erase_block(&mut fb, &cfg, 2, 3);
        assert_eq!(fb.pixel(105, 40), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(75, 40), Some(to_rgb565(row_color(2))));
    }

    #[test]
    fn test_repair_blocks_under_erased_ball() {
        let cfg = cfg();
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let game = Breakout::new(cfg).unwrap();
        draw_blocks(&mut fb, &game);

        // Ball straddling blocks (2,1) and (2,2), erased with black
        let ball = Ball {
            x: 60,
            y: 40,
            x_speed: 1,
            y_speed: 2,
        };
        drawn(fill_circle(&mut fb, BLACK, ball.x, ball.y, cfg.ball_radius));
        assert_eq!(fb.pixel(60, 40), Some(Rgb565::BLACK));

        repair_blocks(&mut fb, &game, ball);
        assert_eq!(interior(&cfg, 2, 1, |x, y| fb.pixel(x, y)), Interior::Block);
        assert_eq!(interior(&cfg, 2, 2, |x, y| fb.pixel(x, y)), Interior::Block);
    }

    #[test]
    fn test_live_blocks_stay_intact() {
        let cfg = BreakoutConfig { lives: 0, ..cfg() };

        for seed in 0..24u64 {
            let mut state = seed;
            let mut script: Vec<InputEvent> = (0..300)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    match (state >> 33) % 4 {
                        0 => key(LEFT, EventKind::Press),
                        1 => key(LEFT, EventKind::Release),
                        2 => key(RIGHT, EventKind::Press),
                        _ => key(RIGHT, EventKind::Release),
                    }
                })
                .collect();
            script.push(key(LEFT, EventKind::Press));

            let mut buf = vec![0u8; FRAME_LEN];
            let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
            let mut board = MockBoard::with_events(script);
            let outcome = block_on(run(&mut board, &TREE, &mut fb, &mut NoDelay, cfg)).unwrap();
            if outcome == Outcome::Won {
                // No live blocks left, and the ball may sit in the last cleared cell
                continue;
            }

            for row in 0..cfg.rows {
                for col in 0..cfg.cols {
                    let state = interior(&cfg, row, col, |x, y| {
                        Some(frame_pixel(&board.last_frame, x as usize, y as usize))
                    });
                    assert_ne!(state, Interior::Mixed, "seed {} block {},{}", seed, row, col);
                }
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum Interior {
        Block,
        Cleared,
        Mixed,
    }

    /// Classify the pixels inside a block's gap
    fn interior(
        cfg: &BreakoutConfig,
        row: u8,
        col: u8,
        pixel: impl Fn(i32, i32) -> Option<Rgb565>,
    ) -> Interior {
        let (x, y, w, h) = block_rect(cfg, row, col);
        let block = to_rgb565(row_color(row));
        let mut seen = (false, false, false);
        for py in y + BLOCK_GAP..y + h - BLOCK_GAP {
            for px in x + BLOCK_GAP..x + w - BLOCK_GAP {
                match pixel(px, py) {
                    Some(c) if c == block => seen.0 = true,
                    Some(c) if c == Rgb565::BLACK => seen.1 = true,
                    _ => seen.2 = true,
                }
            }
        }
        match seen {
            (true, false, false) => Interior::Block,
            (false, true, false) => Interior::Cleared,
            _ => Interior::Mixed,
        }
    }

    #[test]
    fn test_invalid_config() {
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let mut board = MockBoard::default();
        let cfg = BreakoutConfig { cols: 0, ..cfg() };

        assert_eq!(
            block_on(run(&mut board, &TREE, &mut fb, &mut NoDelay, cfg)),
            Err(AppError::Config(ConfigError::ZeroGrid))
        );
    }

    #[test]
    fn test_config_larger_than_screen() {
        let mut buf = vec![0u8; FRAME_LEN];
        let mut fb = Framebuffer::for_display(&mut buf, &PANEL).unwrap();
        let mut board = MockBoard::default();

        assert_eq!(
            block_on(run(&mut board, &TREE, &mut fb, &mut NoDelay, BreakoutConfig::default())),
            Err(AppError::Display(DisplayError::InvalidDimensions))
        );
    }
}
