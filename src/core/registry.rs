use crate::core::body::Body;

/// Contiguous, insertion-ordered store of body records.
///
/// Bodies live inline in a single `Vec`; indices stand in for identity.
/// Individual removal is not supported since a reset replaces the whole set
/// at once.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Appends a body and returns its index.
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Discards the current bodies and adopts a fresh set.
    pub fn replace(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Disjoint mutable borrows of two distinct bodies.
    pub fn pair_mut(&mut self, index_a: usize, index_b: usize) -> Option<(&mut Body, &mut Body)> {
        if index_a == index_b || index_a >= self.bodies.len() || index_b >= self.bodies.len() {
            return None;
        }

        let (low, high, flipped) = if index_a < index_b {
            (index_a, index_b, false)
        } else {
            (index_b, index_a, true)
        };

        let (left, right) = self.bodies.split_at_mut(high);
        let first = &mut left[low];
        let second = &mut right[0];

        if flipped {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
