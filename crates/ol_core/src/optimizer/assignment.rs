//! Optimal assignment over a real-valued cost matrix.
//!
//! Implements the Kuhn-Munkres (Hungarian) algorithm in its O(n^3)
//! augmenting-path form with row/column potentials. The solver is exact:
//! a greedy nearest-cost heuristic is not an acceptable substitute here,
//! because the recommendation contract is "the best lineup", not "a good
//! lineup".
//!
//! ## Determinism
//!
//! Tie-breaking is canonical row-major: rows enter in index order and
//! column scans run in ascending index order with strict `<` comparisons,
//! so equal-cost alternatives always resolve to the lowest index. Identical
//! inputs reproduce identical assignments, which seeds reproducible
//! fixtures and user-facing reports.

/// Row-major real-valued cost matrix. Lower is better; negative cells mark
/// favorable pairings. Infeasible pairings carry a large finite sentinel,
/// never NaN or infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// First non-finite cell, if any. The solver's comparisons are
    /// corrupted unpredictably by NaN, so callers must check this before
    /// solving and fail loudly.
    pub fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let v = self.get(r, c);
                if !v.is_finite() {
                    return Some((r, c, v));
                }
            }
        }
        None
    }

    /// Pad a rectangular matrix to square by appending phantom rows or
    /// columns filled with `sentinel`.
    pub fn padded_to_square(&self, sentinel: f64) -> CostMatrix {
        if self.is_square() {
            return self.clone();
        }
        let n = self.rows.max(self.cols);
        CostMatrix::from_fn(n, n, |r, c| {
            if r < self.rows && c < self.cols {
                self.get(r, c)
            } else {
                sentinel
            }
        })
    }
}

/// Assignments at or above this fraction of the sentinel are treated as
/// padding artifacts and discarded from usable results.
pub fn discard_threshold(sentinel: f64) -> f64 {
    sentinel * 0.5
}

/// Solve the minimum-total-cost assignment for a square matrix.
///
/// Returns `result[row] = col`, a permutation of `0..n`.
pub fn solve(matrix: &CostMatrix) -> Vec<usize> {
    debug_assert!(matrix.is_square(), "assignment solver requires a square matrix");
    let n = matrix.rows();
    if n == 0 {
        return Vec::new();
    }

    // 1-based potentials and column ownership, matching the textbook
    // formulation: p[j] is the row currently matched to column j, column 0
    // is the virtual root of each augmenting search.
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; n + 1];
    let mut p = vec![0_usize; n + 1];
    let mut way = vec![0_usize; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0_usize;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0_usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = matrix.get(i0 - 1, j - 1) - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Unwind the augmenting path.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut result = vec![0_usize; n];
    for j in 1..=n {
        if p[j] > 0 {
            result[p[j] - 1] = j - 1;
        }
    }
    result
}
