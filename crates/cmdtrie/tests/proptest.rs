//! Property-based tests for the command trie using proptest.

use cmdtrie::{CommandTrie, TrieError, WildcardPrecedence};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Test helpers
// ============================================================================

// Plain segments never collide with the wildcard token.
fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}"
}

// Input tokens past a wildcard parent may themselves be a literal `*`.
fn suffix_segment() -> impl Strategy<Value = String> {
    prop_oneof![segment(), Just("*".to_string())]
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..6)
}

/// Registers every prefix of `path` so the full path can be inserted.
fn add_with_prefixes(trie: &mut CommandTrie, path: &[String]) {
    for end in 1..=path.len() {
        trie.add_command(|| {}, &path[..end]).unwrap();
    }
}

fn precedence() -> impl Strategy<Value = WildcardPrecedence> {
    prop_oneof![
        Just(WildcardPrecedence::ExactFirst),
        Just(WildcardPrecedence::WildcardFirst),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A registered path resolves to the handler registered for it.
    #[test]
    fn added_path_round_trips(path in path_strategy()) {
        let seen = Rc::new(RefCell::new(None));
        let mut trie = CommandTrie::new(|| {});
        add_with_prefixes(&mut trie, &path[..path.len() - 1]);

        let sink = seen.clone();
        let expected = path.clone();
        trie.add_command(move || *sink.borrow_mut() = Some(expected.clone()), &path).unwrap();

        trie.parse(&path).unwrap().handle().unwrap();
        prop_assert_eq!(seen.borrow().clone(), Some(path.clone()));
    }

    /// Inserting below an unregistered prefix fails and changes nothing.
    #[test]
    fn missing_ancestor_leaves_tree_unchanged(
        existing in path_strategy(),
        path in prop::collection::vec(segment(), 2..6),
    ) {
        let mut trie = CommandTrie::new(|| {});
        add_with_prefixes(&mut trie, &existing);
        prop_assume!(!trie.contains(&path[..path.len() - 1]));

        let before = trie.render();
        let result = trie.add_command(|| {}, &path);
        let is_missing_ancestor = matches!(result, Err(TrieError::MissingAncestor { .. }));
        prop_assert!(is_missing_ancestor);
        prop_assert_eq!(trie.render(), before);
    }

    /// A wildcard anywhere but last is always rejected without mutation.
    #[test]
    fn wildcard_must_be_terminal(
        mut path in prop::collection::vec(segment(), 2..6),
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(path.len() - 1);
        path[position] = "*".to_string();

        let mut trie = CommandTrie::new(|| {});
        let result = trie.add_command(|| {}, &path);
        prop_assert_eq!(
            result,
            Err(TrieError::WildcardMustBeTerminal { position, last: path.len() - 1 })
        );
        prop_assert!(trie.is_empty());
    }

    /// Any non-empty suffix below a wildcard parent resolves to the wildcard,
    /// unless an exact child claims its first segment.
    #[test]
    fn wildcard_absorbs_suffix(
        parent in segment(),
        suffix in prop::collection::vec(suffix_segment(), 1..6),
        mode in precedence(),
    ) {
        let hit = Rc::new(RefCell::new(false));
        let mut trie = CommandTrie::builder(|| {}).wildcard_precedence(mode).build();
        trie.add_command(|| {}, &[parent.clone()]).unwrap();
        let sink = hit.clone();
        trie.add_command(move || *sink.borrow_mut() = true, &[parent.clone(), "*".to_string()])
            .unwrap();

        let mut path = vec![parent];
        path.extend(suffix);
        trie.parse(&path).unwrap().handle().unwrap();
        prop_assert!(*hit.borrow());
    }

    /// Removing through a wildcard parent deletes the wildcard and keeps the parent.
    #[test]
    fn removal_below_wildcard_parent_drops_wildcard(
        parent in segment(),
        suffix in prop::collection::vec(suffix_segment(), 1..6),
        mode in precedence(),
    ) {
        let mut trie = CommandTrie::builder(|| {}).wildcard_precedence(mode).build();
        trie.add_command(|| {}, &[parent.clone()]).unwrap();
        trie.add_command(|| {}, &[parent.clone(), "*".to_string()]).unwrap();

        let mut path = vec![parent.clone()];
        path.extend(suffix);
        prop_assert!(trie.remove_command(&path).is_ok());
        prop_assert!(!trie.contains(&[parent.clone(), "*".to_string()]));
        prop_assert!(trie.contains(&[parent]));
    }

    /// Reaching a wildcard parent with nothing left resolves the parent itself.
    #[test]
    fn zero_remaining_resolves_parent(parent in segment(), mode in precedence()) {
        let hit = Rc::new(RefCell::new(false));
        let mut trie = CommandTrie::builder(|| {}).wildcard_precedence(mode).build();
        let sink = hit.clone();
        trie.add_command(move || *sink.borrow_mut() = true, &[parent.clone()]).unwrap();
        trie.add_command(|| {}, &[parent.clone(), "*".to_string()]).unwrap();

        trie.parse(&[parent]).unwrap().handle().unwrap();
        prop_assert!(*hit.borrow());
    }

    /// Removing a path succeeds once and then reports NotFound.
    #[test]
    fn removal_is_not_idempotent(path in path_strategy()) {
        let mut trie = CommandTrie::new(|| {});
        add_with_prefixes(&mut trie, &path);

        prop_assert!(trie.remove_command(&path).is_ok());
        let second = trie.remove_command(&path);
        let is_not_found = matches!(second, Err(TrieError::NotFound { .. }));
        prop_assert!(is_not_found);
    }

    /// The empty path never fails, whatever the tree holds.
    #[test]
    fn empty_path_always_resolves(paths in prop::collection::vec(path_strategy(), 0..8)) {
        let mut trie = CommandTrie::new(|| {});
        for path in &paths {
            add_with_prefixes(&mut trie, path);
        }
        let empty: [&str; 0] = [];
        prop_assert!(trie.parse(&empty).is_ok());
    }

    /// Every registered path shows up exactly once in `paths()`.
    #[test]
    fn paths_lists_each_command_once(paths in prop::collection::vec(path_strategy(), 1..8)) {
        let mut trie = CommandTrie::new(|| {});
        for path in &paths {
            add_with_prefixes(&mut trie, path);
        }

        let listed = trie.paths();
        prop_assert_eq!(listed.len(), trie.len());
        for path in &paths {
            prop_assert!(listed.contains(path));
        }
    }
}
