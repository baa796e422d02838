use std::sync::{Arc, LazyLock};

/// Operator skeleton of an expression.
///
/// A shape is a row of slots interpreted at either a sum/difference level
/// or a product/quotient level; the level is not stored but supplied by the
/// caller, and it flips on every nesting step. `flags[i]` selects the
/// operator at slot `i` (`true` = add or multiply, `false` = subtract or
/// divide, depending on level). `children[i]` is `None` for a leaf slot
/// awaiting one value, or a nested row interpreted at the opposite level.
///
/// Shapes are immutable; children are shared via `Arc` so that growing and
/// combining shapes never copies whole subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    flags: Vec<bool>,
    children: Vec<Option<Arc<Shape>>>,
    size: usize,
}

/// The two size-1 sum-level shapes: a bare leaf used positively or
/// negatively. These seed the catalog search.
pub static SINGLE_TERMS: LazyLock<[Shape; 2]> = LazyLock::new(|| {
    [
        Shape::leaf_row(vec![true]),
        Shape::leaf_row(vec![false]),
    ]
});

/// All size-2 sum-level rows (`a+b`, `a-b`, `-a+b`, `-a-b`); the template
/// family a leaf grows into inside a product-level row.
pub static TERM_PAIRS: LazyLock<[Shape; 4]> = LazyLock::new(|| {
    [
        Shape::leaf_row(vec![true, true]),
        Shape::leaf_row(vec![true, false]),
        Shape::leaf_row(vec![false, true]),
        Shape::leaf_row(vec![false, false]),
    ]
});

/// The size-2 product-level rows (`a*b`, `a/b`); the template family a leaf
/// grows into inside a sum-level row.
pub static FACTOR_PAIRS: LazyLock<[Shape; 2]> = LazyLock::new(|| {
    [
        Shape::leaf_row(vec![true, true]),
        Shape::leaf_row(vec![true, false]),
    ]
});

impl Shape {
    /// A row whose slots are all leaves.
    pub fn leaf_row(flags: Vec<bool>) -> Self {
        let children = vec![None; flags.len()];
        Self::with_children(flags, children)
    }

    /// A row with explicit children. `flags` and `children` must have equal
    /// length >= 1.
    pub fn with_children(flags: Vec<bool>, children: Vec<Option<Arc<Shape>>>) -> Self {
        debug_assert_eq!(flags.len(), children.len());
        debug_assert!(!flags.is_empty());
        let size = children
            .iter()
            .map(|c| c.as_ref().map_or(1, |c| c.size))
            .sum();
        Self {
            flags,
            children,
            size,
        }
    }

    /// Total number of leaf slots, counted recursively.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the row holds exactly one term at its own level.
    pub fn is_single_term(&self) -> bool {
        self.flags.len() == 1
    }

    pub(crate) fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub(crate) fn children(&self) -> &[Option<Arc<Shape>>] {
        &self.children
    }

    fn flags_inv(&self) -> Vec<bool> {
        self.flags.iter().map(|f| !f).collect()
    }

    /// Concatenate two rows: at a sum level this is `self + other`.
    pub fn add(&self, other: &Shape) -> Shape {
        Shape::with_children(
            [self.flags.clone(), other.flags.clone()].concat(),
            [self.children.clone(), other.children.clone()].concat(),
        )
    }

    /// Concatenate with the other row's operators inverted: `self - other`.
    pub fn sub(&self, other: &Shape) -> Shape {
        Shape::with_children(
            [self.flags.clone(), other.flags_inv()].concat(),
            [self.children.clone(), other.children.clone()].concat(),
        )
    }

    /// `self * other` as a single-term sum-level row wrapping a product row.
    pub fn mul(&self, other: &Shape) -> Shape {
        self.combine_factors(other, true)
    }

    /// `self / other` as a single-term sum-level row wrapping a product row.
    pub fn div(&self, other: &Shape) -> Shape {
        self.combine_factors(other, false)
    }

    /// Invert every operator in the row: at a sum level this negates the
    /// value, at a product level it reciprocates.
    pub fn neg(&self) -> Shape {
        Shape::with_children(self.flags_inv(), self.children.clone())
    }

    /// Build the product (or quotient) of two shapes.
    ///
    /// A single-term operand is spliced into the new product row instead of
    /// being nested, so `a * (b/c)` becomes one three-slot row rather than
    /// a row containing a one-slot row. The outer term's sign absorbs the
    /// signs of spliced single-term operands.
    fn combine_factors(&self, other: &Shape, multiply: bool) -> Shape {
        let left_single = self.is_single_term();
        let right_single = other.is_single_term();

        let left_sign = if left_single { self.flags[0] } else { true };
        let right_sign = if right_single { other.flags[0] } else { true };

        let mut flags: Vec<bool> = Vec::new();
        let mut children: Vec<Option<Arc<Shape>>> = Vec::new();

        if left_single {
            match &self.children[0] {
                Some(product) => {
                    flags.extend_from_slice(&product.flags);
                    children.extend(product.children.iter().cloned());
                }
                None => {
                    flags.push(true);
                    children.push(None);
                }
            }
        } else {
            flags.push(true);
            children.push(Some(Arc::new(self.clone())));
        }

        if right_single {
            match &other.children[0] {
                Some(product) => {
                    if multiply {
                        flags.extend_from_slice(&product.flags);
                    } else {
                        flags.extend(product.flags_inv());
                    }
                    children.extend(product.children.iter().cloned());
                }
                None => {
                    flags.push(multiply);
                    children.push(None);
                }
            }
        } else {
            flags.push(multiply);
            children.push(Some(Arc::new(other.clone())));
        }

        let product = Shape::with_children(flags, children);
        Shape::with_children(
            vec![left_sign == right_sign],
            vec![Some(Arc::new(product))],
        )
    }
}
