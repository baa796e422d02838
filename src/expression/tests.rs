use std::sync::Arc;

use crate::expression::{ExpressionError, FACTOR_PAIRS, FilledExpr, SINGLE_TERMS, Shape, TERM_PAIRS};
use crate::rational::{Rational, RationalError};

fn filled(shape: Shape, values: &[&str]) -> FilledExpr {
    let values = values.iter().map(|v| (*v).to_string()).collect();
    match FilledExpr::new(Arc::new(shape), values) {
        Ok(expr) => expr,
        Err(e) => panic!("shape/value size mismatch in test setup: {}", e),
    }
}

#[test]
fn test_template_sizes() {
    assert!(SINGLE_TERMS.iter().all(|s| s.size() == 1));
    assert!(TERM_PAIRS.iter().all(|s| s.size() == 2));
    assert!(FACTOR_PAIRS.iter().all(|s| s.size() == 2));
    assert!(SINGLE_TERMS.iter().all(Shape::is_single_term));
    assert!(TERM_PAIRS.iter().all(|s| !s.is_single_term()));
}

#[test]
fn test_calc_sum_row() {
    // 1 - 2 + 3
    let expr = filled(Shape::leaf_row(vec![true, false, true]), &["1", "2", "3"]);
    let result = expr.calc::<i64>();
    assert_eq!(result, Ok(Rational::from_integer(2)));
    assert_eq!(expr.to_string(), "1-2+3");
}

#[test]
fn test_calc_nested_product_row() {
    // -(1*2) + 3
    let product = Shape::leaf_row(vec![true, true]);
    let shape = Shape::with_children(vec![false, true], vec![Some(Arc::new(product)), None]);
    let expr = filled(shape, &["1", "2", "3"]);
    assert_eq!(expr.calc::<i64>(), Ok(Rational::from_integer(1)));
    assert_eq!(expr.to_string(), "-1*2+3");
}

#[test]
fn test_calc_division_by_zero_is_an_error() {
    let one = filled(SINGLE_TERMS[0].clone(), &["1"]);
    let zero = filled(SINGLE_TERMS[0].clone(), &["0"]);
    let quotient = one.div(&zero);
    assert_eq!(
        quotient.calc::<i64>(),
        Err(ExpressionError::Arithmetic(RationalError::DivisionByZero))
    );
}

#[test]
fn test_expand_order_and_count_for_single_leaf() {
    let shapes: Vec<Shape> = SINGLE_TERMS[0].expand(true).collect();
    // Two appended leaves first, then the one leaf slot grown into each
    // product-level pair.
    assert_eq!(shapes.len(), 4);
    assert_eq!(shapes[0], Shape::leaf_row(vec![true, true]));
    assert_eq!(shapes[1], Shape::leaf_row(vec![true, false]));
    assert_eq!(
        shapes[2],
        Shape::with_children(vec![true], vec![Some(Arc::new(FACTOR_PAIRS[0].clone()))])
    );
    assert_eq!(
        shapes[3],
        Shape::with_children(vec![true], vec![Some(Arc::new(FACTOR_PAIRS[1].clone()))])
    );
    assert!(shapes.iter().all(|s| s.size() == 2));
}

#[test]
fn test_expand_grows_every_slot() {
    // A two-leaf sum row: 2 appended + 2 growths per leaf slot.
    let shapes: Vec<Shape> = TERM_PAIRS[0].expand(true).collect();
    assert_eq!(shapes.len(), 6);
    assert!(shapes.iter().all(|s| s.size() == 3));
}

#[test]
fn test_expand_recurses_into_children_at_flipped_level() {
    // Sum row holding a product pair; the product pair's leaves must grow
    // into sum-level pairs (four templates each).
    let shape = Shape::with_children(vec![true], vec![Some(Arc::new(FACTOR_PAIRS[0].clone()))]);
    let shapes: Vec<Shape> = shape.expand(true).collect();
    // 2 appended + child growth: the child itself expands to 2 appended +
    // 4 templates for each of its 2 leaves.
    assert_eq!(shapes.len(), 2 + 2 + 4 + 4);
}

#[test]
fn test_add_and_sub_concatenate_rows() {
    let a = filled(Shape::leaf_row(vec![true]), &["1"]);
    let b = filled(Shape::leaf_row(vec![true]), &["2"]);
    assert_eq!(a.add(&b).to_string(), "1+2");
    assert_eq!(a.sub(&b).to_string(), "1-2");
    assert_eq!(a.sub(&b).calc::<i64>(), Ok(Rational::from_integer(-1)));
}

#[test]
fn test_mul_splices_single_terms() {
    let a = filled(Shape::leaf_row(vec![true]), &["1"]);
    let b = filled(Shape::leaf_row(vec![true]), &["2"]);
    let c = filled(Shape::leaf_row(vec![true]), &["3"]);

    let product = a.mul(&b);
    assert!(product.shape().is_single_term());
    assert_eq!(product.to_string(), "1*2");

    // A single-term product operand is spliced, not nested.
    let chained = product.mul(&c);
    assert_eq!(chained.to_string(), "1*2*3");
    assert_eq!(chained.calc::<i64>(), Ok(Rational::from_integer(6)));
}

#[test]
fn test_mul_parenthesizes_sum_operands() {
    let a = filled(Shape::leaf_row(vec![true]), &["1"]);
    let b = filled(Shape::leaf_row(vec![true]), &["2"]);
    let c = filled(Shape::leaf_row(vec![true]), &["3"]);

    let sum = a.add(&b);
    let product = sum.mul(&c);
    assert_eq!(product.to_string(), "(1+2)*3");
    assert_eq!(product.calc::<i64>(), Ok(Rational::from_integer(9)));
}

#[test]
fn test_div_renders_and_evaluates() {
    let a = filled(Shape::leaf_row(vec![true]), &["1"]);
    let b = filled(Shape::leaf_row(vec![true]), &["2"]);
    let quotient = a.div(&b);
    assert_eq!(quotient.to_string(), "1/2");
    assert_eq!(quotient.calc::<i64>(), Rational::new(1, 2).map_err(Into::into));

    let sum = a.add(&b);
    let c = filled(Shape::leaf_row(vec![true]), &["3"]);
    assert_eq!(sum.div(&c).to_string(), "(1+2)/3");
    assert_eq!(sum.div(&c).calc::<i64>(), Ok(Rational::from_integer(1)));
}

#[test]
fn test_neg_inverts_operators() {
    let a = filled(Shape::leaf_row(vec![true]), &["1"]);
    let b = filled(Shape::leaf_row(vec![true]), &["2"]);

    assert_eq!(a.neg().to_string(), "-1");
    assert_eq!(a.neg().calc::<i64>(), Ok(Rational::from_integer(-1)));

    let product = a.mul(&b);
    assert_eq!(product.neg().to_string(), "-1*2");
    assert_eq!(product.neg().calc::<i64>(), Ok(Rational::from_integer(-2)));

    let sum = a.add(&b);
    assert_eq!(sum.neg().to_string(), "-1-2");
    assert_eq!(sum.neg().calc::<i64>(), Ok(Rational::from_integer(-3)));
}

#[test]
fn test_filled_expr_rejects_size_mismatch() {
    let result = FilledExpr::new(
        Arc::new(Shape::leaf_row(vec![true, true])),
        vec!["1".to_string()],
    );
    assert!(matches!(result, Err(ExpressionError::SizeMismatch)));
}

#[test]
fn test_combined_values_follow_traversal_order() {
    let a = filled(Shape::leaf_row(vec![true]), &["12"]);
    let b = filled(Shape::leaf_row(vec![true]), &["3"]);
    let combined = a.sub(&b);
    assert_eq!(combined.values(), ["12".to_string(), "3".to_string()]);
    assert_eq!(combined.to_string(), "12-3");
}
