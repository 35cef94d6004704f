//! Holding area for assets removed from their folders.

use serde::{Deserialize, Serialize};

use structura_shared::AssetId;

use crate::error::{Result, StoreError};
use crate::models::ArchivedItem;

/// Archived items, most recently archived first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Archive {
    items: Vec<ArchivedItem>,
}

impl Archive {
    pub fn items(&self) -> &[ArchivedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push_front(&mut self, item: ArchivedItem) {
        self.items.insert(0, item);
    }

    pub(crate) fn take(&mut self, id: AssetId) -> Result<ArchivedItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(StoreError::ArchivedItemNotFound(id))?;
        Ok(self.items.remove(index))
    }
}
