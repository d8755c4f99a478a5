/// Sentinel slot id for an absent child or an empty tree.
pub const NIL: usize = usize::MAX;

pub struct Node<const D: usize> {
    pub point: [f64; D],
    pub left: usize,
    pub right: usize,
}

impl<const D: usize> Node<D> {
    #[must_use]
    pub fn new(point: [f64; D]) -> Node<D> {
        Node {
            point,
            left: NIL,
            right: NIL,
        }
    }
}
