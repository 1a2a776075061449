//! Property tests: random edit sequences keep the forest invariants and
//! every move does exactly what the ancestor rule says it should.

use std::collections::HashSet;

use proptest::prelude::*;

use studio_core::error::ErrorKind;
use studio_core::types::ItemId;
use studio_entity::item::Item;
use studio_service::seed::demo_seed;
use studio_service::{ItemTreeManager, MoveOutcome, TreeSettings};

/// One random edit. Indices pick from the current items modulo their count.
#[derive(Debug, Clone)]
enum Op {
    CreateFolder(Option<usize>),
    Rename(usize, String),
    Move(usize, Option<usize>),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => proptest::option::of(any::<usize>()).prop_map(Op::CreateFolder),
        1 => (any::<usize>(), "[a-zA-Z ]{0,12}").prop_map(|(i, name)| Op::Rename(i, name)),
        4 => (any::<usize>(), proptest::option::of(any::<usize>()))
            .prop_map(|(i, target)| Op::Move(i, target)),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

/// The demo seed: two folders and three images, one nested.
fn seeded() -> ItemTreeManager {
    ItemTreeManager::from_seed(demo_seed(), TreeSettings::default()).unwrap()
}

fn pick(manager: &ItemTreeManager, index: usize) -> Option<ItemId> {
    let ids: Vec<ItemId> = manager.items().map(|item| item.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[index % ids.len()])
    }
}

fn pick_folder(manager: &ItemTreeManager, index: usize) -> Option<ItemId> {
    let ids: Vec<ItemId> = manager.folders().map(|item| item.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[index % ids.len()])
    }
}

/// Ancestor chain of `id`, inclusive, walked through `get` alone.
fn chain(manager: &ItemTreeManager, id: ItemId) -> Vec<ItemId> {
    let mut found = Vec::new();
    let mut cursor = Some(id);
    while let Some(current) = cursor {
        if found.len() > manager.len() {
            break;
        }
        found.push(current);
        cursor = manager.get(&current).and_then(|item| item.parent_id);
    }
    found
}

/// What a move should do, decided without asking the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Moved,
    Unchanged,
    Rejected(ErrorKind),
}

fn expected_move(manager: &ItemTreeManager, id: ItemId, target: Option<ItemId>) -> Expected {
    let Some(item) = manager.get(&id) else {
        return Expected::Rejected(ErrorKind::NotFound);
    };
    if item.parent_id == target {
        return Expected::Unchanged;
    }
    let Some(target) = target else {
        return Expected::Moved;
    };
    if target == id {
        return Expected::Rejected(ErrorKind::IllegalMove);
    }
    if !manager.get(&target).is_some_and(|t| t.is_folder()) {
        return Expected::Rejected(ErrorKind::Validation);
    }
    if chain(manager, target).contains(&id) {
        return Expected::Rejected(ErrorKind::IllegalMove);
    }
    Expected::Moved
}

fn snapshot(manager: &ItemTreeManager) -> Vec<Item> {
    manager.items().cloned().collect()
}

fn check_move(
    manager: &mut ItemTreeManager,
    id: ItemId,
    target: Option<ItemId>,
) -> Result<(), TestCaseError> {
    let expected = expected_move(manager, id, target);
    let moving_file = manager.get(&id).is_some_and(|item| item.is_file());
    let before = snapshot(manager);

    let result = manager.move_item(&id, target);
    match expected {
        Expected::Moved => {
            prop_assert!(
                matches!(result, Ok(MoveOutcome::Moved { .. })),
                "legal move of {} to {:?} returned {:?}",
                id,
                target,
                result
            );
            prop_assert_eq!(manager.get(&id).unwrap().parent_id, target);
        }
        Expected::Unchanged => {
            prop_assert!(matches!(result, Ok(MoveOutcome::Unchanged)));
            prop_assert_eq!(snapshot(manager), before);
        }
        Expected::Rejected(kind) => {
            let err = match result {
                Ok(outcome) => {
                    return Err(TestCaseError::fail(format!(
                        "illegal move of {id} to {target:?} returned {outcome:?}"
                    )));
                }
                Err(err) => err,
            };
            prop_assert_eq!(err.kind, kind);
            prop_assert_eq!(snapshot(manager), before);
        }
    }

    if moving_file && target != Some(id) {
        prop_assert!(!matches!(expected, Expected::Rejected(ErrorKind::IllegalMove)));
    }

    Ok(())
}

fn apply(manager: &mut ItemTreeManager, op: &Op) -> Result<(), TestCaseError> {
    match op {
        Op::CreateFolder(parent) => {
            let parent = parent.and_then(|i| pick_folder(manager, i));
            let folder = manager.create_folder(parent);
            prop_assert!(folder.is_ok_and(|f| f.parent_id == parent && f.is_folder()));
        }
        Op::Rename(i, name) => {
            if let Some(id) = pick(manager, *i) {
                let result = manager.rename(&id, name);
                if name.trim().is_empty() {
                    prop_assert_eq!(result.map(|_| ()).unwrap_err().kind, ErrorKind::Validation);
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(manager.get(&id).unwrap().name.as_str(), name.trim());
                }
            }
        }
        Op::Move(i, target) => {
            if let Some(id) = pick(manager, *i) {
                let target = target.and_then(|t| pick(manager, t));
                check_move(manager, id, target)?;
            }
        }
        Op::Delete(i) => {
            if let Some(id) = pick(manager, *i) {
                let subtree = manager.descendants(&id).unwrap().len() + 1;
                let before = manager.len();
                let removed = manager.delete(&id).unwrap();
                prop_assert_eq!(removed.len(), subtree);
                prop_assert_eq!(manager.len(), before - subtree);
            }
        }
    }
    Ok(())
}

fn assert_forest(manager: &ItemTreeManager) -> Result<(), TestCaseError> {
    let ids: HashSet<ItemId> = manager.items().map(|item| item.id).collect();
    prop_assert_eq!(ids.len(), manager.len());

    for item in manager.items() {
        prop_assert!(!item.name.trim().is_empty());

        if let Some(parent_id) = item.parent_id {
            let parent = manager.get(&parent_id);
            prop_assert!(parent.is_some_and(|p| p.is_folder()));
        }

        let ancestors = manager.ancestors(&item.id).unwrap();
        prop_assert!(!ancestors.contains(&item.id));
        prop_assert!(ancestors.len() < manager.len());
    }

    let mut listed = manager.list_children(None).len();
    for folder in manager.folders() {
        let children = manager.list_children(Some(folder.id));
        prop_assert!(children.iter().all(|c| c.parent_id == Some(folder.id)));
        listed += children.len();
    }
    prop_assert_eq!(listed, manager.len());

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any sequence of creates, renames, moves and deletes over a seed with
    /// files leaves a forest where every item is listed under one parent.
    #[test]
    fn prop_edits_preserve_forest(ops in proptest::collection::vec(op(), 1..60)) {
        let mut manager = seeded();
        for op in &ops {
            apply(&mut manager, op)?;
            assert_forest(&manager)?;
        }
    }

    /// Every file can be moved into every folder and back to the root.
    #[test]
    fn prop_files_never_fail_cycle_check(ops in proptest::collection::vec(op(), 0..30)) {
        let mut manager = seeded();
        for op in &ops {
            apply(&mut manager, op)?;
        }

        let files: Vec<ItemId> = manager
            .items()
            .filter(|item| item.is_file())
            .map(|item| item.id)
            .collect();
        let folders: Vec<ItemId> = manager.folders().map(|item| item.id).collect();

        for file in files {
            for folder in &folders {
                check_move(&mut manager, file, Some(*folder))?;
                prop_assert_eq!(manager.get(&file).unwrap().parent_id, Some(*folder));
            }
            check_move(&mut manager, file, None)?;
        }
    }

    /// Deleting any item removes exactly that item and its descendants.
    #[test]
    fn prop_delete_removes_subtree(ops in proptest::collection::vec(op(), 1..40), victim in any::<usize>()) {
        let mut manager = seeded();
        for op in &ops {
            apply(&mut manager, op)?;
        }

        if let Some(id) = pick(&manager, victim) {
            let mut expected = vec![id];
            expected.extend(manager.descendants(&id).unwrap());
            let before = manager.len();

            let removed = manager.delete(&id).unwrap();
            prop_assert_eq!(removed.len(), expected.len());
            prop_assert_eq!(manager.len(), before - removed.len());
            prop_assert!(expected.iter().all(|gone| !manager.contains(gone)));
            assert_forest(&manager)?;
        }
    }
}
