//! Materialization of expressions.
//!
//! These routines are the only place where a lazy expression is evaluated:
//! each element is read exactly once, index by index, and stored into an
//! element-owning container. Matrix traversal follows the expression's
//! orientation unless `AssignOptions` forces a sweep.
//!
//! Assigning an expression into one of its own borrowed operands does not
//! compile: the destination is borrowed mutably while the proxy holds `&`.

use crate::config::options::AssignOptions;
use crate::core::traits::{MatExpr, Orientation, VecExpr};
use crate::error::EwiseError;
use faer::{Col, Mat};
use num_traits::Zero;

/// Visit every `(row, col)` of an `nrows x ncols` shape in `order`.
pub fn sweep(nrows: usize, ncols: usize, order: Orientation, mut visit: impl FnMut(usize, usize)) {
    match order {
        Orientation::RowMajor => {
            for i in 0..nrows {
                for j in 0..ncols {
                    visit(i, j);
                }
            }
        }
        Orientation::ColumnMajor => {
            for j in 0..ncols {
                for i in 0..nrows {
                    visit(i, j);
                }
            }
        }
    }
}

/// Evaluate a vector expression into a new `Vec`.
pub fn to_vec<E: VecExpr>(expr: E) -> Vec<E::Elem> {
    let n = expr.size();
    log::debug!("materializing vector expression of length {n}");
    (0..n).map(|i| expr.elem(i)).collect()
}

/// Evaluate a vector expression into a new faer column.
pub fn to_col<E: VecExpr>(expr: E) -> Col<E::Elem> {
    let n = expr.size();
    log::debug!("materializing vector expression of length {n} into a column");
    Col::from_fn(n, |i| expr.elem(i))
}

/// Evaluate a matrix expression into a new `Mat`, sweeping in the
/// expression's own orientation.
pub fn to_mat<E>(expr: E) -> Mat<E::Elem>
where
    E: MatExpr,
    E::Elem: Zero,
{
    to_mat_with(expr, &AssignOptions::default())
}

/// Evaluate a matrix expression into a new `Mat` using `opts` for the sweep.
pub fn to_mat_with<E>(expr: E, opts: &AssignOptions) -> Mat<E::Elem>
where
    E: MatExpr,
    E::Elem: Zero,
{
    let (nrows, ncols) = expr.shape();
    let order = opts.sweep_for(expr.orientation());
    log::debug!(
        "materializing {nrows}x{ncols} matrix expression ({order:?} sweep, sparse operand: {})",
        expr.is_sparse()
    );
    fill_mat(&expr, nrows, ncols, order)
}

// Single allocation of the result; faer's `from_fn` fills column by column.
fn fill_mat<E>(expr: &E, nrows: usize, ncols: usize, order: Orientation) -> Mat<E::Elem>
where
    E: MatExpr,
    E::Elem: Zero,
{
    match order {
        Orientation::ColumnMajor => Mat::from_fn(nrows, ncols, |i, j| expr.elem(i, j)),
        Orientation::RowMajor => {
            let mut out = Mat::from_fn(nrows, ncols, |_, _| <E::Elem as Zero>::zero());
            sweep(nrows, ncols, order, |i, j| out[(i, j)] = expr.elem(i, j));
            out
        }
    }
}

/// Evaluate `expr` into `dst`.
///
/// With `RESIZE`, `dst` takes the expression's length; otherwise the lengths
/// must already agree.
pub fn assign_vec<E: VecExpr>(
    dst: &mut Vec<E::Elem>,
    expr: E,
    opts: &AssignOptions,
) -> Result<(), EwiseError> {
    let n = expr.size();
    if dst.len() != n {
        if !opts.resizes() {
            return Err(EwiseError::LengthMismatch { expected: n, found: dst.len() });
        }
        log::debug!("resizing destination vector from {} to {n}", dst.len());
        dst.clear();
        dst.extend((0..n).map(|i| expr.elem(i)));
        return Ok(());
    }
    log::debug!("assigning vector expression of length {n} in place");
    for (i, slot) in dst.iter_mut().enumerate() {
        *slot = expr.elem(i);
    }
    Ok(())
}

/// Evaluate `expr` into `dst`, sweeping per `opts`.
///
/// With `RESIZE`, a destination of a different shape is replaced; otherwise
/// the shapes must already agree.
pub fn assign_mat<E>(
    dst: &mut Mat<E::Elem>,
    expr: E,
    opts: &AssignOptions,
) -> Result<(), EwiseError>
where
    E: MatExpr,
    E::Elem: Zero,
{
    let shape = expr.shape();
    let found = (dst.nrows(), dst.ncols());
    let order = opts.sweep_for(expr.orientation());
    if found != shape {
        if !opts.resizes() {
            return Err(EwiseError::ShapeMismatch { expected: shape, found });
        }
        log::debug!("resizing destination matrix from {found:?} to {shape:?} ({order:?} sweep)");
        *dst = fill_mat(&expr, shape.0, shape.1, order);
        return Ok(());
    }
    log::debug!("assigning {}x{} matrix expression in place ({order:?} sweep)", shape.0, shape.1);
    sweep(shape.0, shape.1, order, |i, j| dst[(i, j)] = expr.elem(i, j));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::AssignMode;
    use crate::expression::apply;
    use std::cell::RefCell;

    #[test]
    fn sweep_orders() {
        let mut seen = Vec::new();
        sweep(2, 2, Orientation::RowMajor, |i, j| seen.push((i, j)));
        assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        seen.clear();
        sweep(2, 2, Orientation::ColumnMajor, |i, j| seen.push((i, j)));
        assert_eq!(seen, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn assignment_follows_requested_sweep() {
        let a = Mat::from_fn(2, 3, |i, j| (10 * i + j) as f64);
        let visits = RefCell::new(Vec::new());
        let e = apply(&a, |x: f64| {
            visits.borrow_mut().push(x);
            x
        });
        let out = to_mat_with(&e, &AssignOptions::new(AssignMode::ROW_SWEEP));
        assert_eq!(*visits.borrow(), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(out[(1, 2)], 12.0);
    }

    #[test]
    fn strict_assignment_rejects_mismatch() {
        let v = vec![1.0, 2.0, 3.0];
        let mut dst = vec![0.0; 2];
        let err = assign_vec(&mut dst, &v, &AssignOptions::strict()).unwrap_err();
        assert_eq!(err, EwiseError::LengthMismatch { expected: 3, found: 2 });
        assign_vec(&mut dst, &v, &AssignOptions::default()).unwrap();
        assert_eq!(dst, v);

        let a = Mat::from_fn(2, 2, |i, j| (i + j) as f64);
        let mut m = Mat::from_fn(1, 2, |_, _| 0.0);
        let err = assign_mat(&mut m, &a, &AssignOptions::strict()).unwrap_err();
        assert_eq!(err, EwiseError::ShapeMismatch { expected: (2, 2), found: (1, 2) });
    }

    #[test]
    fn in_place_matrix_assignment() {
        let a = Mat::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        let mut m = Mat::from_fn(2, 2, |_, _| -1.0);
        assign_mat(&mut m, apply(&a, |x: f64| x + 1.0), &AssignOptions::strict()).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn column_sweep_is_forced_on_a_row_major_operand() {
        let a = Mat::from_fn(3, 2, |i, j| (10 * j + i) as f64);
        // 2x3 view laid out row-major
        let t = a.transpose();
        let visits = RefCell::new(Vec::new());
        let e = apply(t, |x: f64| {
            visits.borrow_mut().push(x);
            x
        });
        let out = to_mat_with(&e, &AssignOptions::new(AssignMode::COLUMN_SWEEP));
        assert_eq!(*visits.borrow(), vec![0.0, 10.0, 1.0, 11.0, 2.0, 12.0]);
        assert_eq!(out[(1, 2)], 12.0);

        visits.borrow_mut().clear();
        let mut m = Mat::from_fn(2, 3, |_, _| 0.0);
        assign_mat(&mut m, &e, &AssignOptions::new(AssignMode::COLUMN_SWEEP)).unwrap();
        assert_eq!(*visits.borrow(), vec![0.0, 10.0, 1.0, 11.0, 2.0, 12.0]);
        assert_eq!(m[(0, 1)], 1.0);
    }

    #[test]
    fn resizing_assignment_reads_each_element_once() {
        let a = Mat::from_fn(3, 2, |i, j| (10 * j + i) as f64);
        let visits = RefCell::new(Vec::new());
        let e = apply(a.transpose(), |x: f64| {
            visits.borrow_mut().push(x);
            -x
        });
        let mut m = Mat::from_fn(0, 0, |_, _| 0.0);
        assign_mat(&mut m, &e, &AssignOptions::default()).unwrap();
        assert_eq!(*visits.borrow(), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m[(1, 0)], -10.0);
    }
}
