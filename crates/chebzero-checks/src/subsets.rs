//! Boundary faces of a box, as sets of coordinates to pin.
//!
//! The extrema of a quadratic on a box lie at a corner, at the interior
//! critical point, or at a critical point of the quadratic restricted to
//! some face. A face is described by the coordinates held at a bound
//! (`fixed`) and the ones left to vary (`free`). Corners (everything fixed)
//! and the interior (nothing fixed) are handled by the caller, so
//! [`fixed_subsets`] yields only the proper, nonempty subsets.
//!
//! The enumeration only depends on the dimension and is requested for every
//! coefficient tensor checked, so results are memoized per dimension.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Inline storage for coordinate indices; systems rarely exceed 4 variables.
pub type IndexSet = SmallVec<[usize; 4]>;

/// One family of box faces: which coordinates sit on a bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceSubset {
    /// Coordinates pinned to a lower or upper bound, ascending.
    pub fixed: IndexSet,
    /// The complementary coordinates, ascending.
    pub free: IndexSet,
}

static FIXED_SUBSETS: LazyLock<RwLock<FxHashMap<usize, Arc<[FaceSubset]>>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Returns the face subsets for `dim`, computing them on first use.
///
/// Subsets come ordered by decreasing size (`dim - 1` fixed coordinates
/// first, single fixed coordinates last) and lexicographically within one
/// size. The empty and the full subset are never included.
#[must_use]
pub fn fixed_subsets(dim: usize) -> Arc<[FaceSubset]> {
    if let Some(hit) = FIXED_SUBSETS.read().get(&dim) {
        return Arc::clone(hit);
    }

    let computed: Arc<[FaceSubset]> = enumerate_fixed_subsets(dim).into();
    let mut cache = FIXED_SUBSETS.write();
    Arc::clone(cache.entry(dim).or_insert(computed))
}

/// Uncached enumeration backing [`fixed_subsets`].
fn enumerate_fixed_subsets(dim: usize) -> Vec<FaceSubset> {
    let mut out = Vec::new();
    for size in (1..dim).rev() {
        for fixed in combinations(dim, size) {
            let free = (0..dim).filter(|i| !fixed.contains(i)).collect();
            out.push(FaceSubset { fixed, free });
        }
    }
    out
}

/// All `k`-element subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<IndexSet> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }

    let mut current: IndexSet = (0..k).collect();
    loop {
        out.push(current.clone());

        // Rightmost position that can still advance
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            break;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
    out
}
