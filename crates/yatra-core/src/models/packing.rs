//! Packing lists and their checkbox state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A compiled-in packing list for one traveller or group.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PackingList {
    pub key: &'static str,
    pub label: &'static str,
    pub sub: &'static str,
    pub items: &'static [&'static str],
}

/// Checked items keyed by list key and item index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PackingState(pub BTreeMap<String, BTreeMap<u32, bool>>);

impl PackingState {
    pub fn is_checked(&self, list_key: &str, item_index: u32) -> bool {
        self.0
            .get(list_key)
            .and_then(|items| items.get(&item_index))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, list_key: &str, item_index: u32, checked: bool) {
        self.0
            .entry(list_key.to_string())
            .or_default()
            .insert(item_index, checked);
    }

    /// Number of checked items in one list.
    pub fn checked_count(&self, list_key: &str) -> usize {
        self.0
            .get(list_key)
            .map(|items| items.values().filter(|checked| **checked).count())
            .unwrap_or(0)
    }
}
