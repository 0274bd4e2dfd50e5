use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;

use crate::algorithm::PredecessorMap;

/// Rebuilds the path from `source` to `dest` by walking the predecessor map backwards
///
/// Returns `[source]` when `dest == source` and an empty vector when `dest` has
/// no predecessor. A chain that loops or stops short of `source` also yields an
/// empty vector.
pub fn reconstruct_path<V>(predecessors: &PredecessorMap<V>, source: &V, dest: &V) -> Vec<V>
where
    V: Eq + Hash + Clone + Debug,
{
    if dest == source {
        return vec![source.clone()];
    }

    let mut current = match predecessors.get(dest) {
        Some(Some(pred)) => pred,
        _ => return Vec::new(),
    };

    let mut path = vec![dest.clone()];
    let mut visited: HashSet<&V> = HashSet::new();
    visited.insert(dest);

    loop {
        if !visited.insert(current) {
            warn!(
                "Cycle in predecessor chain at {:?} while rebuilding path to {:?}",
                current, dest
            );
            return Vec::new();
        }

        path.push(current.clone());
        if current == source {
            break;
        }

        current = match predecessors.get(current) {
            Some(Some(pred)) => pred,
            _ => {
                warn!(
                    "Predecessor chain for {:?} ends at {:?} before reaching {:?}",
                    dest, current, source
                );
                return Vec::new();
            }
        };
    }

    path.reverse();
    path
}
