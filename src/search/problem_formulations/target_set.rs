use crate::world::Position;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The targets a multi-target state still has to reach. A target set is a
/// value: it is never changed after construction, [`TargetSet::without`]
/// returns a new set, so sibling states can never see each other's rescues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetSet(Rc<BTreeSet<Position>>);

impl TargetSet {
    pub fn new(targets: impl IntoIterator<Item = Position>) -> Self {
        Self(Rc::new(targets.into_iter().collect()))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The set with `position` removed. Shares storage with `self` when
    /// `position` is not a target.
    pub fn without(&self, position: Position) -> Self {
        if !self.contains(position) {
            return self.clone();
        }
        let mut targets = BTreeSet::clone(&self.0);
        targets.remove(&position);
        Self(Rc::new(targets))
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for TargetSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter)
    }
}
