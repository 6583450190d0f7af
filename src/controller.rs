//! Button wiring
//!
//! Binds click handlers for the jump and reset buttons and hands back a
//! binding whose `unbind` removes both listeners again. Missing buttons are
//! a fatal startup error, checked once at bind time.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, MouseEvent};

use crate::error::SetupError;

/// Element ids the controller expects to find
const JUMP_BUTTON_ID: &str = "jump-btn";
const RESET_BUTTON_ID: &str = "reset-btn";

/// Live click bindings; dropping this without calling [`unbind`] keeps the
/// listeners registered for the life of the closures.
///
/// [`unbind`]: ControllerBinding::unbind
pub struct ControllerBinding {
    jump_button: Element,
    reset_button: Element,
    jump_closure: Closure<dyn FnMut(MouseEvent)>,
    reset_closure: Closure<dyn FnMut(MouseEvent)>,
}

impl ControllerBinding {
    /// Look up both buttons and register the click handlers
    pub fn bind(
        mut on_jump: impl FnMut() + 'static,
        mut on_reset: impl FnMut() + 'static,
    ) -> Result<Self, SetupError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SetupError::DocumentUnavailable)?;

        let jump_button = document
            .get_element_by_id(JUMP_BUTTON_ID)
            .ok_or(SetupError::ControlMissing(JUMP_BUTTON_ID))?;
        let reset_button = document
            .get_element_by_id(RESET_BUTTON_ID)
            .ok_or(SetupError::ControlMissing(RESET_BUTTON_ID))?;

        let jump_closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| on_jump());
        let reset_closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| on_reset());

        let _ = jump_button
            .add_event_listener_with_callback("click", jump_closure.as_ref().unchecked_ref());
        let _ = reset_button
            .add_event_listener_with_callback("click", reset_closure.as_ref().unchecked_ref());

        Ok(Self {
            jump_button,
            reset_button,
            jump_closure,
            reset_closure,
        })
    }

    /// Deregister both click handlers
    pub fn unbind(self) {
        let _ = self.jump_button.remove_event_listener_with_callback(
            "click",
            self.jump_closure.as_ref().unchecked_ref(),
        );
        let _ = self.reset_button.remove_event_listener_with_callback(
            "click",
            self.reset_closure.as_ref().unchecked_ref(),
        );
    }
}
