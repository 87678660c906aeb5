use crate::events::{action_for_key, apply_action};
use crate::input::{line_delta_px, PageScroll};
use anim_core::FrameDriver;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

/// Outcome of routing one window event into the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    Ignored,
    Exit,
}

/// Forward pointer, wheel, resize and key events. Frame and lifecycle events
/// are left to the caller.
pub fn handle_window_input(
    event: &WindowEvent,
    driver: &mut FrameDriver,
    page: &mut PageScroll,
) -> InputOutcome {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            driver.on_pointer_move(position.x as f32, position.y as f32);
            InputOutcome::Handled
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let dy = match delta {
                MouseScrollDelta::LineDelta(_, lines) => line_delta_px(*lines),
                MouseScrollDelta::PixelDelta(p) => p.y as f32,
            };
            let sections = driver.params().section_count;
            let offset = page.apply_wheel(dy, driver.viewport().height, sections);
            driver.on_scroll(offset);
            InputOutcome::Handled
        }
        WindowEvent::Resized(size) => {
            if driver.on_resize(size.width as f32, size.height as f32) {
                let offset = page.refit(driver.viewport().height, driver.params().section_count);
                driver.on_scroll(offset);
            }
            InputOutcome::Handled
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key,
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => {
            let Some(action) = key_name(logical_key).and_then(action_for_key) else {
                return InputOutcome::Ignored;
            };
            if apply_action(action, driver) {
                InputOutcome::Handled
            } else {
                InputOutcome::Exit
            }
        }
        _ => InputOutcome::Ignored,
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        _ => None,
    }
}
