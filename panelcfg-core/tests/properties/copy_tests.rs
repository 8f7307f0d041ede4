//! Property-based tests for the deep copy engine
//!
//! A copy equals its original, keeps every variant tag, and shares no
//! storage with it.

use panelcfg_core::{
    Config, DeepCopy, ItemConfig, ItemKind, ItemType, ManagerConfigKind, PopoutManagerConfig,
    REACT_COMPONENT_ID,
};
use proptest::prelude::*;
use serde_json::json;

use super::strategies::{item_tree_strategy, name_strategy};

/// Overwrites every payload, title and id in the tree
fn scribble(item: &mut ItemConfig) {
    item.title.push('!');
    item.id.add("scribbled");
    match &mut item.kind {
        ItemKind::Component(component) => component.component_state = json!({"scribbled": true}),
        ItemKind::ReactComponent(component) => component.props = Some(json!([1, 2, 3])),
        _ => {}
    }
    for child in &mut item.content {
        scribble(child);
    }
}

// ============================================================================
// Property 1: Copy Equality
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A copy compares equal and keeps the variant histogram
    #[test]
    fn prop_copy_equals_original(tree in item_tree_strategy()) {
        let copy = tree.deep_copy();
        prop_assert_eq!(copy.count_by_type(), tree.count_by_type());
        prop_assert_eq!(copy.depth(), tree.depth());
        prop_assert_eq!(copy, tree);
    }

    /// Supplied content replaces the children of the copy
    #[test]
    fn prop_supplied_content_replaces(
        tree in item_tree_strategy(),
        replacement in proptest::collection::vec(item_tree_strategy(), 0..3),
    ) {
        let copy = tree.create_copy(Some(replacement.clone()));
        prop_assert_eq!(copy.item_type(), tree.item_type());
        prop_assert_eq!(copy.content, replacement);
        prop_assert_eq!(copy.title, tree.title);
    }

    /// React components always carry the reserved name after a copy
    #[test]
    fn prop_react_name_reserved(tree in item_tree_strategy()) {
        let copy = tree.deep_copy();
        let mut names_ok = true;
        copy.walk(&mut |item, _| {
            if let ItemKind::ReactComponent(component) = &item.kind {
                names_ok &= component.component_name == REACT_COMPONENT_ID;
            }
        });
        prop_assert!(names_ok);
    }
}

// ============================================================================
// Property 2: Copy Independence
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Mutating a copy at any depth leaves the original untouched
    #[test]
    fn prop_copy_is_independent(tree in item_tree_strategy()) {
        let snapshot = tree.clone();
        let mut copy = tree.deep_copy();
        scribble(&mut copy);
        prop_assert_eq!(&tree, &snapshot);
        prop_assert_ne!(&copy, &tree);
    }

    /// Edits to the original after copying never show up in the copy
    #[test]
    fn prop_original_edits_not_visible_in_copy(tree in item_tree_strategy()) {
        let mut original = tree;
        let copy = original.deep_copy();
        let snapshot = copy.clone();
        scribble(&mut original);
        prop_assert_eq!(&copy, &snapshot);
        prop_assert_ne!(&copy, &original);
    }

    /// Root items copy like any container and keep their tag
    #[test]
    fn prop_root_copy(content in proptest::collection::vec(item_tree_strategy(), 0..3)) {
        let root = ItemConfig::root(content);
        let snapshot = root.clone();
        let mut copy = root.deep_copy();
        prop_assert_eq!(copy.item_type(), ItemType::Root);
        prop_assert_eq!(&copy, &root);

        scribble(&mut copy);
        prop_assert_eq!(&root, &snapshot);
        prop_assert_ne!(&copy, &root);
    }

    /// Root and popout configurations copy into the same kind
    #[test]
    fn prop_manager_kind_preserved(
        tree in item_tree_strategy(),
        parent_id in name_strategy(),
        index in 0usize..8,
    ) {
        let mut popout = PopoutManagerConfig::new(parent_id, index);
        popout.manager.content = vec![tree.clone()];
        let mut config = Config::default();
        config.manager.content = vec![tree];
        config.manager.open_popouts.push(popout.clone());

        let root = ManagerConfigKind::Root(config);
        let popout = ManagerConfigKind::Popout(popout);

        let root_copy = root.create_copy();
        prop_assert!(!root_copy.is_popout());
        prop_assert_eq!(&root_copy, &root);

        let mut popout_copy = popout.create_copy();
        prop_assert!(popout_copy.is_popout());
        prop_assert_eq!(&popout_copy, &popout);

        scribble(&mut popout_copy.manager_mut().content[0]);
        prop_assert_ne!(&popout_copy, &popout);
    }
}
