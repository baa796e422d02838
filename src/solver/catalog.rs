use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{FilledExpr, SINGLE_TERMS, Shape};
use crate::rational::{IntBackend, Rational};
use crate::utils::splits;

/// The per-base index: every achievable non-negative integer mapped to the
/// best expression found for it, plus a descending list of the strictly
/// positive achievable integers for "largest divisor <= n" lookups.
///
/// Keys are decimal strings because achievable values can exceed any
/// native integer range under the arbitrary-precision backend.
///
/// A catalog is immutable once built; changing the base or the backend
/// means building a new one from scratch.
pub struct Catalog {
    entries: HashMap<String, FilledExpr>,
    descending: Vec<f64>,
}

impl Catalog {
    /// Exhaustively search every segmentation of `base` crossed with every
    /// expression shape of matching leaf count, indexing each non-negative
    /// integer result under the lowest-scoring expression that produces it.
    ///
    /// The search space (segmentations x shapes) grows exponentially with
    /// the base length, so bases beyond 6-8 digits take noticeable time.
    /// Candidates whose evaluation fails (division by zero, fixed-width
    /// overflow) are skipped silently.
    pub fn build<T: IntBackend>(base: &str) -> Catalog {
        Self::build_limited::<T>(base, base.len())
    }

    /// Run the build for partition counts `1..=max_pieces` only. Exposed to
    /// the tests, which assert that each additional round only ever adds
    /// achievable values.
    pub(crate) fn build_limited<T: IntBackend>(base: &str, max_pieces: usize) -> Catalog {
        info!("Building catalog for base '{}'", base);

        let mut best: HashMap<String, (FilledExpr, usize)> = HashMap::new();
        let mut shapes: Vec<Shape> = SINGLE_TERMS.to_vec();

        for cuts in 0..max_pieces {
            let partitions: Vec<Vec<&str>> = splits(base, cuts).collect();
            debug!(
                "Round {}: {} segmentations x {} shapes",
                cuts + 1,
                partitions.len(),
                shapes.len()
            );

            // Each segmentation is independent, so candidates are evaluated
            // in parallel; the merge stays sequential in enumeration order
            // so that score ties keep the first candidate found.
            let rounds: Vec<Vec<(String, FilledExpr, usize)>> = partitions
                .par_iter()
                .map(|pieces| evaluate_partition::<T>(pieces, &shapes))
                .collect();

            for (key, expr, score) in rounds.into_iter().flatten() {
                match best.get(&key) {
                    Some((_, existing)) if *existing <= score => {}
                    _ => {
                        best.insert(key, (expr, score));
                    }
                }
            }

            // Grow every shape by one leaf for the next partition count.
            shapes = shapes.iter().flat_map(|s| s.expand(true)).collect();
        }

        // Zero must always be representable; fall back to base - base.
        if !best.contains_key("0")
            && let Ok(zero) = FilledExpr::new(
                Arc::new(Shape::leaf_row(vec![true, false])),
                vec![base.to_string(), base.to_string()],
            )
        {
            best.insert("0".to_string(), (zero, 0));
        }

        let entries: HashMap<String, FilledExpr> =
            best.into_iter().map(|(k, (expr, _))| (k, expr)).collect();

        let mut descending: Vec<f64> = entries
            .keys()
            .filter_map(|k| k.parse::<f64>().ok())
            .filter(|&v| v > 0.0)
            .collect();
        descending.sort_by(|a, b| b.total_cmp(a));

        info!("Catalog holds {} achievable integers", entries.len());
        Catalog {
            entries,
            descending,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilledExpr> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The largest strictly positive achievable integer `<= n`, if any.
    pub fn largest_divisor(&self, n: f64) -> Option<f64> {
        self.descending.iter().copied().find(|&v| v <= n)
    }

    /// The smallest strictly positive achievable integer.
    pub fn smallest_positive(&self) -> Option<f64> {
        self.descending.last().copied()
    }

    /// Snapshot of every achievable value and its expression.
    pub fn entries(&self) -> &HashMap<String, FilledExpr> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Evaluate every shape against one segmentation, keeping the candidates
/// that produce a non-negative integer. Returned in shape-enumeration
/// order; score is `rendered_length * 2`, plus one unless the shape is a
/// single term.
fn evaluate_partition<T: IntBackend>(
    pieces: &[&str],
    shapes: &[Shape],
) -> Vec<(String, FilledExpr, usize)> {
    let Ok(values) = pieces
        .iter()
        .map(|p| Rational::<T>::parse(p))
        .collect::<Result<Vec<_>, _>>()
    else {
        // A piece does not fit the fixed-width backend; nothing to index.
        return Vec::new();
    };

    let mut found = Vec::new();
    for shape in shapes {
        let Ok(result) = shape.calc(&values, 0, true) else {
            continue;
        };
        if !result.is_integer() || result.is_negative() {
            continue;
        }
        let Ok(expr) = FilledExpr::new(
            Arc::new(shape.clone()),
            pieces.iter().map(|p| (*p).to_string()).collect(),
        ) else {
            continue;
        };
        let score = expr.to_string().len() * 2 + usize::from(!shape.is_single_term());
        found.push((result.numer().to_string(), expr, score));
    }
    found
}
