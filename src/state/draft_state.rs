//! Text draft state for the capsule modal and the remarks editor.

/// In-progress user input not yet committed to the snapshot.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    /// Control-directive input buffer in the capsule modal
    control_text: String,
    /// Remarks editor buffer in the detail panel
    remarks_text: String,
    /// Whether the remarks editor is open
    editing_remarks: bool,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Control draft =====

    pub fn control_text(&self) -> &str {
        &self.control_text
    }

    pub fn control_text_mut(&mut self) -> &mut String {
        &mut self.control_text
    }

    /// Replaces the draft with a quick-command shortcut.
    pub fn apply_shortcut(&mut self, text: &str) {
        self.control_text = text.to_string();
    }

    pub fn clear_control(&mut self) {
        self.control_text.clear();
    }

    // ===== Remarks draft =====

    pub fn editing_remarks(&self) -> bool {
        self.editing_remarks
    }

    pub fn remarks_text_mut(&mut self) -> &mut String {
        &mut self.remarks_text
    }

    /// Opens the remarks editor primed with the current remarks.
    pub fn begin_remarks_edit(&mut self, current: &str) {
        self.remarks_text = current.to_string();
        self.editing_remarks = true;
    }

    pub fn cancel_remarks_edit(&mut self) {
        self.editing_remarks = false;
        self.remarks_text.clear();
    }

    /// Closes the editor and hands the edited text to the caller.
    pub fn take_remarks(&mut self) -> String {
        self.editing_remarks = false;
        std::mem::take(&mut self.remarks_text)
    }

    /// Drops all drafts (e.g. when the selection changes).
    pub fn reset(&mut self) {
        self.control_text.clear();
        self.remarks_text.clear();
        self.editing_remarks = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remarks_edit_cycle() {
        let mut draft = DraftState::new();
        draft.begin_remarks_edit("旧备注");
        assert!(draft.editing_remarks());
        draft.remarks_text_mut().push_str("，新增");
        assert_eq!(draft.take_remarks(), "旧备注，新增");
        assert!(!draft.editing_remarks());
    }

    #[test]
    fn test_shortcut_replaces_draft() {
        let mut draft = DraftState::new();
        draft.control_text_mut().push_str("手动输入");
        draft.apply_shortcut("收到请回复");
        assert_eq!(draft.control_text(), "收到请回复");
    }
}
