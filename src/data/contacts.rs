use std::collections::HashMap;

use super::types::Contact;

/// Read-only contact lookup keyed by contact id.
#[derive(Debug, Default)]
pub(crate) struct ContactStore {
    by_name: HashMap<String, Contact>,
}

impl ContactStore {
    pub(crate) fn new(contacts: Vec<Contact>) -> Self {
        let by_name = contacts
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        ContactStore { by_name }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Contact> {
        self.by_name.get(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_name.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Contacts sorted by id, for roster output.
    pub(crate) fn sorted(&self) -> Vec<&Contact> {
        let mut all: Vec<&Contact> = self.by_name.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
