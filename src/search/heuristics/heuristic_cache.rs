use crate::search::{Cost, TargetSet};
use crate::world::Position;
use std::collections::HashMap;

/// Memoised pairwise distances and spanning tree costs for one problem.
/// Nothing in here knows about walls, so a cache must never outlive the
/// problem (and map) that owns it.
#[derive(Debug, Default)]
pub struct HeuristicCache {
    distances: HashMap<(Position, Position), Cost>,
    spanning_trees: HashMap<TargetSet, Cost>,
    distance_hits: usize,
    spanning_tree_hits: usize,
}

impl HeuristicCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manhattan distance between `a` and `b`, cached per unordered pair.
    pub fn distance(&mut self, a: Position, b: Position) -> Cost {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&distance) = self.distances.get(&key) {
            self.distance_hits += 1;
            return distance;
        }
        let distance = a.manhattan_distance(b);
        self.distances.insert(key, distance);
        distance
    }

    /// Smallest distance from `position` to any of `targets`, `None` when
    /// there are no targets.
    pub fn nearest_distance(&mut self, position: Position, targets: &TargetSet) -> Option<Cost> {
        targets
            .iter()
            .map(|target| self.distance(position, target))
            .min()
    }

    /// Cost of a minimum spanning tree over `targets`, cached per set.
    pub fn spanning_tree_cost(&mut self, targets: &TargetSet) -> Cost {
        if let Some(&cost) = self.spanning_trees.get(targets) {
            self.spanning_tree_hits += 1;
            return cost;
        }
        let cost = self.prim(targets);
        self.spanning_trees.insert(targets.clone(), cost);
        cost
    }

    /// Grows the tree from the smallest target, each round attaching the
    /// outside target closest to the tree. Ties go to the target found
    /// first.
    fn prim(&mut self, targets: &TargetSet) -> Cost {
        let mut outside: Vec<Position> = targets.iter().collect();
        if outside.len() < 2 {
            return 0;
        }
        let mut tree = vec![outside.remove(0)];
        let mut total = 0;

        while !outside.is_empty() {
            let mut closest: Option<(usize, Cost)> = None;
            for (index, &candidate) in outside.iter().enumerate() {
                for &member in &tree {
                    let distance = self.distance(member, candidate);
                    if closest.map_or(true, |(_, best)| distance < best) {
                        closest = Some((index, distance));
                    }
                }
            }
            let Some((index, distance)) = closest else {
                break;
            };
            total += distance;
            tree.push(outside.remove(index));
        }
        total
    }

    pub fn cached_distances(&self) -> usize {
        self.distances.len()
    }

    pub fn cached_spanning_trees(&self) -> usize {
        self.spanning_trees.len()
    }

    pub fn hits(&self) -> usize {
        self.distance_hits + self.spanning_tree_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(cells: &[(i32, i32)]) -> TargetSet {
        cells.iter().map(|&cell| Position::from(cell)).collect()
    }

    #[test]
    fn distance_is_symmetric_and_cached_once() {
        let mut cache = HeuristicCache::new();
        let a = Position::new(0, 0);
        let b = Position::new(3, -2);
        assert_eq!(cache.distance(a, b), 5);
        assert_eq!(cache.distance(b, a), 5);
        assert_eq!(cache.cached_distances(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn spanning_tree_of_small_sets() {
        let mut cache = HeuristicCache::new();
        assert_eq!(cache.spanning_tree_cost(&TargetSet::empty()), 0);
        assert_eq!(cache.spanning_tree_cost(&targets(&[(2, 2)])), 0);
        assert_eq!(cache.spanning_tree_cost(&targets(&[(0, 0), (4, 4)])), 8);
        assert_eq!(
            cache.spanning_tree_cost(&targets(&[(0, 0), (4, 4), (0, 4)])),
            8
        );
    }

    #[test]
    fn spanning_tree_picks_short_edges() {
        // A chain along the x axis: the tree uses the three unit gaps, not
        // the long edges from the first target.
        let mut cache = HeuristicCache::new();
        let chain = targets(&[(0, 0), (1, 0), (2, 0), (6, 0)]);
        assert_eq!(cache.spanning_tree_cost(&chain), 1 + 1 + 4);
    }

    #[test]
    fn spanning_tree_cached_per_set() {
        let mut cache = HeuristicCache::new();
        let set = targets(&[(0, 0), (4, 4), (0, 4)]);
        let first = cache.spanning_tree_cost(&set);
        let hits = cache.hits();
        assert_eq!(cache.spanning_tree_cost(&set.clone()), first);
        assert_eq!(cache.hits(), hits + 1);
        assert_eq!(cache.cached_spanning_trees(), 1);
    }

    #[test]
    fn nearest_distance() {
        let mut cache = HeuristicCache::new();
        let set = targets(&[(0, 0), (4, 4)]);
        assert_eq!(cache.nearest_distance(Position::new(3, 3), &set), Some(2));
        assert_eq!(
            cache.nearest_distance(Position::new(3, 3), &TargetSet::empty()),
            None
        );
    }
}
