//! Keyboard shortcut handling

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use tile_grid_core::EditorAction;

use crate::ui::PendingAction;
use crate::EditorState;

/// Handle keyboard shortcuts
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
) {
    // Keys typed into a text field are not shortcuts
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    if let Some(action) = shortcut_action(&keyboard) {
        editor_state.pending_action = Some(action);
    }
}

/// Map the keys pressed this frame to an action, if any
pub fn shortcut_action(keyboard: &ButtonInput<KeyCode>) -> Option<PendingAction> {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    let edit = |action| Some(PendingAction::Edit(action));

    if ctrl {
        // Ctrl+Shift+Z or Ctrl+Y - Redo
        if (keyboard.just_pressed(KeyCode::KeyZ) && shift) || keyboard.just_pressed(KeyCode::KeyY) {
            return edit(EditorAction::Redo);
        }
        if keyboard.just_pressed(KeyCode::KeyZ) {
            return edit(EditorAction::Undo);
        }
        if keyboard.just_pressed(KeyCode::KeyC) {
            return edit(EditorAction::Copy);
        }
        if keyboard.just_pressed(KeyCode::KeyX) {
            return edit(EditorAction::Cut);
        }
        if keyboard.just_pressed(KeyCode::KeyV) {
            return edit(EditorAction::Paste);
        }
        if keyboard.just_pressed(KeyCode::KeyA) {
            return edit(EditorAction::SelectAll);
        }
        if keyboard.just_pressed(KeyCode::KeyS) {
            return Some(if shift {
                PendingAction::SaveAs
            } else {
                PendingAction::Save
            });
        }
        if keyboard.just_pressed(KeyCode::KeyO) {
            return Some(PendingAction::Load);
        }
        if keyboard.just_pressed(KeyCode::KeyN) {
            return Some(PendingAction::New);
        }
        return None;
    }

    if keyboard.just_pressed(KeyCode::Delete) || keyboard.just_pressed(KeyCode::Backspace) {
        return edit(EditorAction::DeleteSelection);
    }
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        return edit(EditorAction::DrawActive);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        return edit(EditorAction::ClearSelection);
    }
    if keyboard.just_pressed(KeyCode::Tab) {
        return edit(EditorAction::ToggleAutoAdvance);
    }

    None
}
