use crate::node::Node;

/// Rearranges `nodes[lo..hi]` so the node at `target` holds the point that a
/// full sort by coordinate `axis` would place there, with everything before
/// it comparing `<=` and everything after comparing `>=` on that axis.
///
/// Quickselect with a median-of-three pivot: expected linear time, no full
/// sort. Relative order within each side is unspecified, and ties on the
/// axis may land on either side.
pub fn select_median<const D: usize>(
    nodes: &mut [Node<D>],
    mut lo: usize,
    mut hi: usize,
    target: usize,
    axis: usize,
) {
    debug_assert!(lo <= target && target < hi && hi <= nodes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let a = nodes[lo].point[axis];
        let b = nodes[mid].point[axis];
        let c = nodes[hi - 1].point[axis];
        let pivot = if (a <= b && b <= c) || (c <= b && b <= a) {
            mid
        } else if (b <= a && a <= c) || (c <= a && a <= b) {
            lo
        } else {
            hi - 1
        };
        nodes.swap(pivot, hi - 1);
        let pivot_value = nodes[hi - 1].point[axis];

        let mut store = lo;
        for i in lo..hi - 1 {
            if nodes[i].point[axis] < pivot_value {
                nodes.swap(i, store);
                store += 1;
            }
        }
        nodes.swap(store, hi - 1);

        if store == target {
            return;
        } else if target < store {
            hi = store;
        } else {
            lo = store + 1;
        }
    }
}
