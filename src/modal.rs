use crate::flower::FlowerRegistry;

/// The dialog that shows a flower's name and description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoModal {
    visible: bool,
    name: String,
    description: String,
}

impl InfoModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the record for `flower_id`. Unknown ids leave the modal as it was.
    pub fn show(&mut self, registry: &FlowerRegistry, flower_id: &str) -> bool {
        let Some(record) = registry.get(flower_id) else {
            log::debug!("No flower record for {flower_id}");
            return false;
        };
        self.name.clone_from(&record.name);
        self.description.clone_from(&record.description);
        self.visible = true;
        true
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Escape closes the modal only while it is showing.
    pub fn handle_escape(&mut self) -> bool {
        if self.visible {
            self.hide();
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
