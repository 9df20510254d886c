//! Form state for editing a flower's name, button label and description.

use crate::board::ButtonBoard;
use crate::flower::FlowerRegistry;

/// Form fields of an open edit session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EditSession {
    flower_id: String,
    form: EditForm,
}

#[derive(Clone, Debug, Default)]
pub struct EditDialog {
    session: Option<EditSession>,
}

impl EditDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the form from the registry record and the button's current label.
    ///
    /// Does nothing when either the record or the button is missing.
    pub fn open(&mut self, registry: &FlowerRegistry, board: &ButtonBoard, flower_id: &str) -> bool {
        let (Some(record), Some(button)) = (registry.get(flower_id), board.get(flower_id)) else {
            log::debug!("Cannot edit {flower_id}: no record or button");
            return false;
        };
        self.session = Some(EditSession {
            flower_id: flower_id.to_string(),
            form: EditForm {
                name: record.name.clone(),
                display_name: button.label.clone(),
                description: record.description.clone(),
            },
        });
        true
    }

    /// Writes the form back and closes. Returns the edited flower id.
    pub fn save(&mut self, registry: &mut FlowerRegistry, board: &mut ButtonBoard) -> Option<String> {
        let EditSession { flower_id, form } = self.session.take()?;
        registry.update(&flower_id, &form.name, &form.description);
        board.set_label(&flower_id, &form.display_name);
        log::info!("Updated flower {flower_id}");
        Some(flower_id)
    }

    /// Discards the form.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn flower_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.flower_id.as_str())
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        self.session.as_mut().map(|s| &mut s.form)
    }
}
