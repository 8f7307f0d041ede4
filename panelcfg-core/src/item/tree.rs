//! Read-only traversal of item trees
//!
//! Traversal is depth-first pre-order: a node is visited before its
//! children, children in `content` order.

use std::collections::BTreeMap;

use super::config::ItemConfig;
use super::types::ItemType;

impl ItemConfig {
    /// Visits this node and all descendants in pre-order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<'a, F>(&'a self, depth: usize, visit: &mut F)
    where
        F: FnMut(&'a Self, usize),
    {
        visit(self, depth);
        for child in &self.content {
            child.walk_at(depth + 1, visit);
        }
    }

    /// Returns every node carrying `id`, ancestors before descendants.
    ///
    /// When a node and one of its ancestors share an id, both are returned;
    /// choosing between them is left to the caller.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.walk(&mut |item, _| {
            if item.id.contains(id) {
                found.push(item);
            }
        });
        found
    }

    /// Returns the number of nodes in this subtree, including this one.
    #[must_use]
    pub fn count_items(&self) -> usize {
        1 + self.content.iter().map(Self::count_items).sum::<usize>()
    }

    /// Returns the number of levels in this subtree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.content.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Counts the nodes of this subtree per variant.
    #[must_use]
    pub fn count_by_type(&self) -> BTreeMap<ItemType, usize> {
        let mut counts = BTreeMap::new();
        self.walk(&mut |item, _| {
            *counts.entry(item.item_type()).or_insert(0) += 1;
        });
        counts
    }
}

/// Finds every node carrying `id` across several top-level items.
#[must_use]
pub fn find_in_content<'a>(content: &'a [ItemConfig], id: &str) -> Vec<&'a ItemConfig> {
    content.iter().flat_map(|item| item.find_by_id(id)).collect()
}
