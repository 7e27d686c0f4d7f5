//! Editing actions dispatched through [`crate::MapEditor::dispatch`]

use crate::sprite::SpriteRef;

/// Everything the user can ask the editor to do to the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Paint a sprite onto the selection
    Draw(SpriteRef),
    /// Make a palette entry the active sprite and paint it onto the selection
    ChooseSprite(usize),
    /// Paint the most recently chosen sprite again
    DrawActive,
    DeleteSelection,
    Copy,
    Cut,
    /// Paste at the tile under the pointer
    Paste,
    Undo,
    Redo,
    SelectAll,
    ClearSelection,
    ToggleAutoAdvance,
}

impl EditorAction {
    pub fn label(&self) -> &'static str {
        match self {
            EditorAction::Draw(_) => "Draw",
            EditorAction::ChooseSprite(_) => "Choose Sprite",
            EditorAction::DrawActive => "Draw Active Sprite",
            EditorAction::DeleteSelection => "Delete",
            EditorAction::Copy => "Copy",
            EditorAction::Cut => "Cut",
            EditorAction::Paste => "Paste",
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
            EditorAction::SelectAll => "Select All",
            EditorAction::ClearSelection => "Deselect",
            EditorAction::ToggleAutoAdvance => "Toggle Auto-Advance",
        }
    }

    /// True for actions that can change tile sprites
    pub fn edits_tiles(&self) -> bool {
        matches!(
            self,
            EditorAction::Draw(_)
                | EditorAction::ChooseSprite(_)
                | EditorAction::DrawActive
                | EditorAction::DeleteSelection
                | EditorAction::Cut
                | EditorAction::Paste
                | EditorAction::Undo
                | EditorAction::Redo
        )
    }
}
