//! GPIO transition to input event
//!
//! The scanner only knows pin indices. This maps a GPIO number back onto
//! the registered device tree to find its endpoint, input index and, for
//! keyboard endpoints, its keymap meaning.

use badge_hal::{
    DevTree, EventKind, InputCategory, InputEndpoint, InputEvent, Modifiers, NavInput,
};

/// Build the event for a transition on `gpio`
///
/// Returns `None` if no GPIO endpoint in the tree owns the pin.
pub fn gpio_event(
    tree: &DevTree,
    dev_id: u32,
    gpio: u8,
    kind: EventKind,
    modkeys: Modifiers,
) -> Option<InputEvent> {
    tree.inputs.iter().enumerate().find_map(|(endpoint, input)| {
        if input.endpoint != InputEndpoint::Gpio {
            return None;
        }
        let index = input.pinmap?.index_of(gpio)?;

        let (nav_input, text_input) = match (input.category, input.keymap) {
            (InputCategory::Keyboard, Some(keymap)) => keymap.translate(gpio as u16, modkeys),
            _ => (NavInput::None, None),
        };

        Some(InputEvent {
            dev_id,
            endpoint: endpoint as u8,
            input: index as u32,
            nav_input,
            raw_input: gpio as u32,
            text_input,
            kind,
            modkeys,
        })
    })
}
