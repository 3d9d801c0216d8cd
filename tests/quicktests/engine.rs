use bst_engine::engine::{self, Link};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a root link and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], mut root: Link<K>, set: &mut BTreeSet<K>) -> Link<K>
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                root = engine::insert(root, k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                root = engine::remove(root, k);
                set.remove(k);
            }
        }
    }

    root
}

fn build(xs: &[i8]) -> Link<i8> {
    xs.iter().fold(None, |root, x| engine::insert(root, *x))
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut set = BTreeSet::new();
        let root = do_ops(&ops, None, &mut set);

        engine::is_valid_bst(&root)
            && engine::count(&root) == set.len()
            && engine::traverse(&root).eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let root = build(&xs);

        xs.iter().all(|x| engine::search(&root, x).map(|n| n.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let root = build(&xs);
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| engine::search(&root, x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut root = build(&xs);
        for delete in &deletes {
            root = engine::remove(root, delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same key multiple times - drop each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| engine::search(&root, x).is_none())
            && still_present.iter().all(|x| engine::search(&root, x).is_some())
    }
}

quickcheck::quickcheck! {
    fn count_matches_distinct_keys(xs: Vec<i8>) -> bool {
        let root = build(&xs);
        let distinct: BTreeSet<_> = xs.iter().collect();

        engine::count(&root) == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn remove_present_key_drops_count_by_one(xs: Vec<i8>) -> bool {
        let root = build(&xs);
        match xs.first() {
            None => true,
            Some(k) => {
                let before = engine::count(&root);
                let root = engine::remove(root, k);
                engine::count(&root) == before - 1 && engine::is_valid_bst(&root)
            }
        }
    }
}

quickcheck::quickcheck! {
    fn remove_absent_key_changes_nothing(xs: Vec<i8>, k: i8) -> bool {
        let root = build(&xs);
        if engine::search(&root, &k).is_some() {
            return true;
        }
        let before = root.clone();
        let root = engine::remove(root, &k);

        root == before
    }
}

quickcheck::quickcheck! {
    fn traversal_is_sorted(xs: Vec<i8>) -> bool {
        let root = build(&xs);
        let keys: Vec<_> = engine::traverse(&root).collect();

        keys.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn min_and_max_bound_every_key(xs: Vec<i8>) -> bool {
        let root = build(&xs);
        match (engine::find_minimum(&root), engine::find_maximum(&root)) {
            (None, None) => xs.is_empty(),
            (Some(min), Some(max)) => {
                xs.iter().all(|x| min.key() <= x && x <= max.key())
            }
            _ => false,
        }
    }
}
