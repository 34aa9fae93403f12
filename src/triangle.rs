use std::ops::Index;

/// An ordered set of exactly three values `(A, B, C)`.
///
/// Vertex positions, barycentric weights and per-vertex depths all share this
/// ordering, so the weight at index `i` always belongs to the vertex at index `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Triple<T>([T; 3]);

impl<T: Copy> Triple<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self([a, b, c])
    }

    pub fn a(&self) -> T {
        self.0[0]
    }

    pub fn b(&self) -> T {
        self.0[1]
    }

    pub fn c(&self) -> T {
        self.0[2]
    }

    /// Applies `f` to each element, keeping the order.
    pub fn map<U: Copy>(self, f: impl FnMut(T) -> U) -> Triple<U> {
        Triple(self.0.map(f))
    }

    pub fn to_array(self) -> [T; 3] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> From<[T; 3]> for Triple<T> {
    fn from(values: [T; 3]) -> Self {
        Self(values)
    }
}

impl<T> Index<usize> for Triple<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// A triangle of the mesh, as three zero-based indices into the
// mesh's vertex array.
pub type Face = Triple<usize>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_order() {
        let t = Triple::new(1, 2, 3);
        assert_eq!((t.a(), t.b(), t.c()), (1, 2, 3));
        assert_eq!(t[1], 2);
    }

    #[test]
    fn map_preserves_order() {
        let t = Triple::new(1, 2, 3).map(|v| v * 10);
        assert_eq!(t.to_array(), [10, 20, 30]);
    }
}
