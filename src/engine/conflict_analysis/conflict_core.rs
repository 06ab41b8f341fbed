use crate::basic_types::HashSet;
use crate::constraints::SignedConstraint;

/// The explanation of the current conflict, a set of literals which together cannot be
/// satisfied.
///
/// Inference engines which extend the explanation must call [`ConflictCore::keep`] on the
/// literals they rely on *before* calling [`ConflictCore::set`] or [`ConflictCore::insert`].
pub trait ConflictCore {
    /// The literals currently in the core, the head first.
    fn constraints(&self) -> &[SignedConstraint];

    /// Add `constraint` to the explanation.
    ///
    /// Postcondition: `constraint` is in the core.
    fn insert(&mut self, constraint: SignedConstraint);

    /// Replace the head of the explanation by `constraint`.
    ///
    /// Postcondition: `constraint` is the head; the previous head is gone unless it was pinned
    /// through [`ConflictCore::keep`].
    fn set(&mut self, constraint: SignedConstraint);

    /// Pin `constraint` so that it is retained by subsequent calls to [`ConflictCore::set`].
    ///
    /// Postcondition: `constraint` is in the core and pinned.
    fn keep(&mut self, constraint: &SignedConstraint);
}

/// An ordered conflict core without duplicates.
#[derive(Debug, Default, Clone)]
pub struct Conflict {
    literals: Vec<SignedConstraint>,
    pinned: HashSet<SignedConstraint>,
}

impl Conflict {
    pub fn new(literals: impl IntoIterator<Item = SignedConstraint>) -> Conflict {
        let mut conflict = Conflict::default();
        literals
            .into_iter()
            .for_each(|literal| conflict.insert(literal));
        conflict
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, constraint: &SignedConstraint) -> bool {
        self.literals.contains(constraint)
    }

    pub fn is_pinned(&self, constraint: &SignedConstraint) -> bool {
        self.pinned.contains(constraint)
    }

    pub fn head(&self) -> Option<&SignedConstraint> {
        self.literals.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignedConstraint> + '_ {
        self.literals.iter()
    }
}

impl ConflictCore for Conflict {
    fn constraints(&self) -> &[SignedConstraint] {
        &self.literals
    }

    fn insert(&mut self, constraint: SignedConstraint) {
        if !self.contains(&constraint) {
            self.literals.push(constraint);
        }
    }

    fn set(&mut self, constraint: SignedConstraint) {
        let is_head = self.head() == Some(&constraint);
        self.literals.retain(|literal| *literal != constraint);

        if is_head || self.literals.is_empty() {
            self.literals.insert(0, constraint);
            return;
        }

        // The previous head differs from `constraint`, so it is still in front.
        let previous_head = std::mem::replace(&mut self.literals[0], constraint);
        if self.pinned.contains(&previous_head) {
            self.literals.push(previous_head);
        }
    }

    fn keep(&mut self, constraint: &SignedConstraint) {
        self.insert(constraint.clone());
        let _ = self.pinned.insert(constraint.clone());
    }
}
