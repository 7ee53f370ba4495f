use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use super::widget::Element;
use super::{GuiEvent, Response, Theme};
use crate::draw::{draw_text, draw_text_centered, fill_rect, stroke_rect};
use badge_hal::{EventKind, NavInput};

/// Maximum number of cells in a grid
pub const MAX_ELEMENTS: usize = 16;

struct Slot {
    element: Element,
    bounds: Rectangle,
    dirty: bool,
}

/// Direction of a focus move
#[derive(Clone, Copy)]
enum Step {
    Up,
    Down,
    Left,
    Right,
    Next,
    Prev,
}

/// Grid of widgets, filled row by row
pub struct Grid {
    pos: Point,
    size: Size,
    cols: u8,
    rows: u8,
    slots: Vec<Slot, MAX_ELEMENTS>,
    selected: Option<usize>,
    laid_out: bool,
}

impl Grid {
    /// Create a grid
    ///
    /// Elements fill cells left to right, top to bottom. Elements beyond
    /// `cols * rows` or [`MAX_ELEMENTS`] are dropped. Focus starts on the
    /// first selectable element.
    pub fn new(
        pos: Point,
        size: Size,
        cols: u8,
        rows: u8,
        elements: impl IntoIterator<Item = Element>,
    ) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let cells = (cols as usize * rows as usize).min(MAX_ELEMENTS);

        let mut slots = Vec::new();
        for element in elements.into_iter().take(cells) {
            // take() keeps us within capacity
            let _ = slots.push(Slot {
                element,
                bounds: Rectangle::zero(),
                dirty: true,
            });
        }
        let selected = slots.iter().position(|s| s.element.is_selectable());

        Self {
            pos,
            size,
            cols,
            rows,
            slots,
            selected,
            laid_out: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the focused element
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.slots.get(index).map(|s| &s.element)
    }

    /// Screen area of an element, valid after `calc_layout`
    pub fn bounds(&self, index: usize) -> Option<Rectangle> {
        self.slots.get(index).map(|s| s.bounds)
    }

    /// Compute element bounds for a screen of `dims`
    ///
    /// The grid is clipped to the screen. Marks everything dirty.
    pub fn calc_layout(&mut self, dims: Size, theme: &Theme) {
        let screen = Rectangle::new(Point::zero(), dims);
        let area = Rectangle::new(self.pos, self.size).intersection(&screen);
        let cell = Size::new(
            area.size.width / self.cols as u32,
            area.size.height / self.rows as u32,
        );
        let cols = self.cols as usize;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let col = (index % cols) as i32;
            let row = (index / cols) as i32;
            let offset = Point::new(col * cell.width as i32, row * cell.height as i32);
            let top_left = area.top_left + offset;
            slot.bounds = Rectangle::new(top_left, cell).offset(-theme.padding);
            slot.dirty = true;
        }
        self.laid_out = true;
    }

    /// Draw the whole grid
    pub fn draw<D>(&mut self, target: &mut D, theme: &Theme) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::new(self.pos, self.size);
        fill_rect(
            target,
            theme.bg_col,
            area.top_left.x,
            area.top_left.y,
            area.size.width as i32,
            area.size.height as i32,
        )?;

        for slot in self.slots.iter_mut() {
            slot.dirty = true;
        }
        self.redraw(target, theme)
    }

    /// Draw only elements whose state changed
    pub fn redraw<D>(&mut self, target: &mut D, theme: &Theme) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.dirty {
                draw_element(target, theme, slot, self.selected == Some(index))?;
                slot.dirty = false;
            }
        }
        Ok(())
    }

    /// Feed one input event to the focused element
    pub fn event(&mut self, dims: Size, theme: &Theme, ev: GuiEvent) -> Response {
        if !self.laid_out {
            self.calc_layout(dims, theme);
        }
        let Some(sel) = self.selected else {
            return Response::Ignored;
        };

        let editing = matches!(&self.slots[sel].element, Element::TextBox(tb) if tb.is_editing());
        if editing {
            return self.edit(sel, ev);
        }

        if ev.kind == EventKind::Release {
            return self.release(sel, ev);
        }

        match ev.input {
            NavInput::Up => self.step(sel, Step::Up),
            NavInput::Down => self.step(sel, Step::Down),
            NavInput::Left => self.step(sel, Step::Left),
            NavInput::Right => self.step(sel, Step::Right),
            NavInput::Tab if ev.modkeys.shifted() => self.step(sel, Step::Prev),
            NavInput::Tab => self.step(sel, Step::Next),
            NavInput::Accept if ev.kind == EventKind::Press => self.accept(sel),
            NavInput::Char => self.type_char(sel, ev.value),
            _ => Response::Ignored,
        }
    }

    /// Typing into a focused textbox starts editing
    fn type_char(&mut self, sel: usize, value: Option<char>) -> Response {
        let slot = &mut self.slots[sel];
        match (&mut slot.element, value) {
            (Element::TextBox(tb), Some(c)) if !c.is_control() => {
                tb.set_editing(true);
                tb.insert(c);
                slot.dirty = true;
                Response::Redraw
            }
            _ => Response::Ignored,
        }
    }

    fn edit(&mut self, sel: usize, ev: GuiEvent) -> Response {
        if !ev.kind.is_down() {
            return Response::Ignored;
        }
        let slot = &mut self.slots[sel];
        let Element::TextBox(tb) = &mut slot.element else {
            return Response::Ignored;
        };

        let changed = match (ev.input, ev.value) {
            (NavInput::Accept | NavInput::Back, _) if ev.kind == EventKind::Press => {
                tb.set_editing(false);
                true
            }
            (NavInput::Backspace, _) => tb.backspace(),
            (_, Some(c)) if !c.is_control() => tb.insert(c),
            _ => false,
        };

        if changed {
            slot.dirty = true;
            Response::Redraw
        } else {
            Response::Ignored
        }
    }

    fn accept(&mut self, sel: usize) -> Response {
        let slot = &mut self.slots[sel];
        match &mut slot.element {
            Element::Button(button) => button.set_pressed(true),
            Element::TextBox(tb) => tb.set_editing(true),
            Element::Label(_) => return Response::Ignored,
        }
        slot.dirty = true;
        Response::Redraw
    }

    fn release(&mut self, sel: usize, ev: GuiEvent) -> Response {
        if ev.input != NavInput::Accept {
            return Response::Ignored;
        }
        let slot = &mut self.slots[sel];
        match &mut slot.element {
            Element::Button(button) if button.is_pressed() => {
                button.set_pressed(false);
                slot.dirty = true;
                Response::Activated(sel)
            }
            _ => Response::Ignored,
        }
    }

    /// Move focus; a pressed button is released without activating
    fn step(&mut self, sel: usize, step: Step) -> Response {
        let Some(next) = self.find(sel, step) else {
            return Response::Ignored;
        };

        if let Element::Button(button) = &mut self.slots[sel].element {
            button.set_pressed(false);
        }
        self.slots[sel].dirty = true;
        self.slots[next].dirty = true;
        self.selected = Some(next);
        Response::Redraw
    }

    /// Nearest selectable element from `from` in a direction
    fn find(&self, from: usize, step: Step) -> Option<usize> {
        let len = self.slots.len();
        let cols = self.cols as usize;
        let selectable = |i: usize| self.slots[i].element.is_selectable();

        match step {
            Step::Next => (1..len).map(|k| (from + k) % len).find(|&i| selectable(i)),
            Step::Prev => (1..len).map(|k| (from + len - k) % len).find(|&i| selectable(i)),
            Step::Down => (from + cols..len).step_by(cols).find(|&i| selectable(i)),
            Step::Up => (0..from / cols)
                .rev()
                .map(|row| row * cols + from % cols)
                .find(|&i| selectable(i)),
            Step::Right => {
                let row_end = ((from / cols + 1) * cols).min(len);
                (from + 1..row_end).find(|&i| selectable(i))
            }
            Step::Left => {
                let row_start = from / cols * cols;
                (row_start..from).rev().find(|&i| selectable(i))
            }
        }
    }
}

fn draw_element<D>(
    target: &mut D,
    theme: &Theme,
    slot: &Slot,
    selected: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = slot.bounds;
    if bounds.is_zero_sized() {
        return Ok(());
    }
    let mut target = target.clipped(&bounds);
    let border_col = if selected {
        theme.highlight_col
    } else {
        theme.border_col
    };
    let font_h = theme.font.character_size.height as i32;
    let text_y = bounds.center().y - font_h / 2;

    match &slot.element {
        Element::Label(label) => {
            fill_rect(
                &mut target,
                theme.bg_col,
                bounds.top_left.x,
                bounds.top_left.y,
                bounds.size.width as i32,
                bounds.size.height as i32,
            )?;
            draw_text(
                &mut target,
                theme.font,
                theme.fg_col,
                Point::new(bounds.top_left.x, text_y),
                label.text,
            )?;
        }
        Element::TextBox(tb) => {
            fill_rect(
                &mut target,
                theme.input_col,
                bounds.top_left.x,
                bounds.top_left.y,
                bounds.size.width as i32,
                bounds.size.height as i32,
            )?;
            let thickness = if tb.is_editing() {
                theme.border * 2
            } else {
                theme.border
            };
            stroke_rect(&mut target, border_col, bounds, thickness)?;

            let start = Point::new(bounds.top_left.x + thickness as i32 + theme.padding, text_y);
            let end = draw_text(&mut target, theme.font, theme.fg_col, start, tb.text())?;
            if tb.is_editing() {
                draw_text(&mut target, theme.font, theme.fg_col, Point::new(end.x, text_y), "_")?;
            }
        }
        Element::Button(button) => {
            let fill = if button.is_pressed() {
                theme.pressed_col
            } else {
                theme.button_col
            };
            fill_rect(
                &mut target,
                fill,
                bounds.top_left.x,
                bounds.top_left.y,
                bounds.size.width as i32,
                bounds.size.height as i32,
            )?;
            stroke_rect(&mut target, border_col, bounds, theme.border)?;
            let center = bounds.center();
            draw_text_centered(&mut target, theme.font, theme.fg_col, center, button.text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_rgb565;
    use crate::Framebuffer;
    use badge_hal::Modifiers;

    const DIMS: Size = Size::new(240, 240);

    fn demo_grid() -> Grid {
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

    fn press(input: NavInput) -> GuiEvent {
        GuiEvent::new(EventKind::Press, input)
    }

    fn release(input: NavInput) -> GuiEvent {
        GuiEvent::new(EventKind::Release, input)
    }

    fn send(grid: &mut Grid, ev: GuiEvent) -> Response {
        grid.event(DIMS, &Theme::DEFAULT, ev)
    }

    #[test]
    fn test_layout() {
        let mut grid = demo_grid();
        grid.calc_layout(DIMS, &Theme::DEFAULT);

        // 108x33 cells, shrunk by 2 px padding on each side
        assert_eq!(
            grid.bounds(0),
            Some(Rectangle::new(Point::new(12, 12), Size::new(104, 29)))
        );
        assert_eq!(
            grid.bounds(5),
            Some(Rectangle::new(Point::new(120, 78), Size::new(104, 29)))
        );
    }

    #[test]
    fn test_layout_clipped_to_screen() {
        let mut grid = Grid::new(
            Point::new(100, 0),
            Size::new(200, 20),
            2,
            1,
            [Element::button("a"), Element::button("b")],
        );
        grid.calc_layout(Size::new(160, 20), &Theme::DEFAULT);
        assert_eq!(
            grid.bounds(1),
            Some(Rectangle::new(Point::new(132, 2), Size::new(26, 16)))
        );
    }

    #[test]
    fn test_initial_focus_skips_labels() {
        let grid = demo_grid();
        assert_eq!(grid.selected(), Some(1));
        assert_eq!(grid.len(), 6);

        let labels = Grid::new(Point::zero(), DIMS, 1, 1, [Element::label("x")]);
        assert_eq!(labels.selected(), None);
    }

    #[test]
    fn test_extra_elements_dropped() {
        let grid = Grid::new(
            Point::zero(),
            DIMS,
            1,
            2,
            [Element::button("a"), Element::button("b"), Element::button("c")],
        );
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_navigation() {
        let mut grid = demo_grid();

        assert_eq!(send(&mut grid, press(NavInput::Down)), Response::Redraw);
        assert_eq!(grid.selected(), Some(3));
        assert_eq!(send(&mut grid, press(NavInput::Down)), Response::Redraw);
        assert_eq!(grid.selected(), Some(5));
        assert_eq!(send(&mut grid, press(NavInput::Down)), Response::Ignored);
        assert_eq!(grid.selected(), Some(5));

        // Labels in the left column cannot take focus
        assert_eq!(send(&mut grid, press(NavInput::Left)), Response::Ignored);

        assert_eq!(send(&mut grid, press(NavInput::Up)), Response::Redraw);
        assert_eq!(grid.selected(), Some(3));

        // Hold repeats navigation
        assert_eq!(
            send(&mut grid, GuiEvent::new(EventKind::Hold, NavInput::Up)),
            Response::Redraw
        );
        assert_eq!(grid.selected(), Some(1));
    }

    #[test]
    fn test_tab_wraps() {
        let mut grid = demo_grid();
        send(&mut grid, press(NavInput::Tab));
        send(&mut grid, press(NavInput::Tab));
        assert_eq!(grid.selected(), Some(5));
        send(&mut grid, press(NavInput::Tab));
        assert_eq!(grid.selected(), Some(1));

        let back_tab = GuiEvent {
            modkeys: Modifiers::LSHIFT,
            ..press(NavInput::Tab)
        };
        send(&mut grid, back_tab);
        assert_eq!(grid.selected(), Some(5));
    }

    #[test]
    fn test_textbox_editing() {
        let mut grid = demo_grid();

        // Not editing yet: backspace does nothing
        assert_eq!(send(&mut grid, press(NavInput::Backspace)), Response::Ignored);

        assert_eq!(send(&mut grid, press(NavInput::Accept)), Response::Redraw);
        assert_eq!(send(&mut grid, GuiEvent::text('h')), Response::Redraw);
        assert_eq!(send(&mut grid, GuiEvent::text('i')), Response::Redraw);
        assert_eq!(send(&mut grid, press(NavInput::Backspace)), Response::Redraw);

        // Navigation is swallowed while editing
        assert_eq!(send(&mut grid, press(NavInput::Down)), Response::Ignored);
        assert_eq!(grid.selected(), Some(1));

        assert_eq!(send(&mut grid, press(NavInput::Back)), Response::Redraw);
        match grid.element(1) {
            Some(Element::TextBox(tb)) => {
                assert_eq!(tb.text(), "h");
                assert!(!tb.is_editing());
            }
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_typing_starts_editing() {
        let mut grid = demo_grid();
        assert_eq!(send(&mut grid, GuiEvent::text('x')), Response::Redraw);
        match grid.element(1) {
            Some(Element::TextBox(tb)) => {
                assert_eq!(tb.text(), "x");
                assert!(tb.is_editing());
            }
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_textbox_full() {
        let mut grid = demo_grid();
        for _ in 0..crate::gui::TEXTBOX_CAPACITY {
            assert_eq!(send(&mut grid, GuiEvent::text('a')), Response::Redraw);
        }
        assert_eq!(send(&mut grid, GuiEvent::text('a')), Response::Ignored);
    }

    #[test]
    fn test_button_activates_on_release() {
        let mut grid = demo_grid();
        send(&mut grid, press(NavInput::Down));

        assert_eq!(send(&mut grid, press(NavInput::Accept)), Response::Redraw);
        assert!(matches!(grid.element(3), Some(Element::Button(b)) if b.is_pressed()));
        assert_eq!(
            send(&mut grid, release(NavInput::Accept)),
            Response::Activated(3)
        );
        assert!(matches!(grid.element(3), Some(Element::Button(b)) if !b.is_pressed()));

        // A stray release does nothing
        assert_eq!(send(&mut grid, release(NavInput::Accept)), Response::Ignored);
    }

    #[test]
    fn test_moving_away_cancels_press() {
        let mut grid = demo_grid();
        send(&mut grid, press(NavInput::Down));
        send(&mut grid, press(NavInput::Accept));
        send(&mut grid, press(NavInput::Down));
        assert!(matches!(grid.element(3), Some(Element::Button(b)) if !b.is_pressed()));
        send(&mut grid, press(NavInput::Up));
        assert_eq!(send(&mut grid, release(NavInput::Accept)), Response::Ignored);
    }

    #[test]
    fn test_response_is_change() {
        assert!(!Response::Ignored.is_change());
        assert!(Response::Redraw.is_change());
        assert!(Response::Activated(0).is_change());
    }

    #[test]
    fn test_draw_and_redraw() {
        let theme = Theme::DEFAULT;
        let mut buf = [0u8; 240 * 240 * 2];
        let mut fb = Framebuffer::new(&mut buf, 240, 240).unwrap();
        let mut grid = demo_grid();
        grid.calc_layout(DIMS, &theme);
        grid.draw(&mut fb, &theme).unwrap();

        // Focused textbox has a highlighted border, buttons a plain one
        let tb = grid.bounds(1).unwrap();
        assert_eq!(
            fb.pixel(tb.top_left.x, tb.top_left.y),
            Some(to_rgb565(theme.highlight_col))
        );
        let hello = grid.bounds(3).unwrap();
        assert_eq!(
            fb.pixel(hello.top_left.x, hello.top_left.y),
            Some(to_rgb565(theme.border_col))
        );
        assert_eq!(
            fb.pixel(hello.top_left.x + 1, hello.top_left.y + 1),
            Some(to_rgb565(theme.button_col))
        );

        // Nothing dirty: redraw leaves the buffer untouched
        fb.mark_clean();
        grid.redraw(&mut fb, &theme).unwrap();
        assert!(!fb.is_dirty());

        send(&mut grid, press(NavInput::Down));
        grid.redraw(&mut fb, &theme).unwrap();
        assert!(fb.is_dirty());
        assert_eq!(
            fb.pixel(hello.top_left.x, hello.top_left.y),
            Some(to_rgb565(theme.highlight_col))
        );
        assert_eq!(
            fb.pixel(tb.top_left.x, tb.top_left.y),
            Some(to_rgb565(theme.border_col))
        );
    }
}
