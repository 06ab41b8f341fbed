//! Structural matchers which recognise inequalities in which the pivot variable occurs as a
//! factor of degree one.
//!
//! Every matcher is total: `None` (or `false`) means the shape does not apply. The matchers
//! which extract witnesses have a companion `verify_*` function which reconstructs the
//! inequality from the witnesses; the rules assert it on every use.
use crate::constraints::Inequality;
use crate::constraints::SignedConstraint;
use crate::polynomial::Polynomial;
use crate::polysat_assert_moderate;
use crate::variables::PVar;

/// The shapes of inequalities, relative to a pivot `v`, on which the saturation rules act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `_ <= v`
    BelowPivot,
    /// `v <= y`
    AbovePivot { y: Polynomial },
    /// `y <= a*v`
    YBelowScaledPivot { a: Polynomial, y: Polynomial },
    /// `v*x <= z*x` where `x` is a scaled variable
    PivotXBelowZX { x: Polynomial, z: Polynomial },
    /// `y*x <= v*x` where `x` is a scaled variable
    YXBelowPivotX { x: Polynomial, y: Polynomial },
    /// `v*y <= v*z`
    PivotYBelowPivotZ { y: Polynomial, z: Polynomial },
}

impl Shape {
    /// All shapes the inequality has with respect to `pivot`.
    pub(crate) fn classify(pivot: PVar, inequality: &Inequality) -> Vec<Shape> {
        let mut shapes = vec![];

        if is_below_pivot(pivot, inequality) {
            shapes.push(Shape::BelowPivot);
        }
        if let Some(y) = match_pivot_below(pivot, inequality) {
            shapes.push(Shape::AbovePivot { y });
        }
        if let Some((a, y)) = match_y_below_scaled_pivot(pivot, inequality) {
            shapes.push(Shape::YBelowScaledPivot { a, y });
        }
        if let Some((x, z)) = match_pivot_x_below_z_x(pivot, inequality) {
            shapes.push(Shape::PivotXBelowZX { x, z });
        }
        if let Some((x, y)) = match_y_x_below_pivot_x(pivot, inequality) {
            shapes.push(Shape::YXBelowPivotX { x, y });
        }
        if let Some((y, z)) = match_pivot_y_below_pivot_z(pivot, inequality) {
            shapes.push(Shape::PivotYBelowPivotZ { y, z });
        }

        shapes
    }

    /// Reconstruct the inequality from the witnesses of the shape.
    pub(crate) fn verify(&self, pivot: PVar, inequality: &Inequality) -> bool {
        match self {
            Shape::BelowPivot => is_below_pivot(pivot, inequality),
            Shape::AbovePivot { y } => {
                is_above_pivot(pivot, inequality) && inequality.rhs == *y
            }
            Shape::YBelowScaledPivot { a, y } => {
                verify_y_below_scaled_pivot(pivot, inequality, a, y)
            }
            Shape::PivotXBelowZX { x, z } => verify_pivot_x_below_z_x(pivot, inequality, x, z),
            Shape::YXBelowPivotX { x, y } => verify_y_x_below_pivot_x(pivot, inequality, x, y),
            Shape::PivotYBelowPivotZ { y, z } => {
                verify_pivot_y_below_pivot_z(pivot, inequality, y, z)
            }
        }
    }
}

/// An inequality of the conflict core together with its shapes with respect to the pivot.
#[derive(Debug, Clone)]
pub(crate) struct ClassifiedInequality {
    pub(crate) inequality: Inequality,
    pub(crate) shapes: Vec<Shape>,
}

impl ClassifiedInequality {
    pub(crate) fn new(pivot: PVar, inequality: Inequality) -> ClassifiedInequality {
        let shapes = Shape::classify(pivot, &inequality);
        polysat_assert_moderate!(
            shapes.iter().all(|shape| shape.verify(pivot, &inequality)),
            "a shape of {inequality} does not verify"
        );
        ClassifiedInequality { inequality, shapes }
    }

    /// `_ <= v`
    pub(crate) fn is_below_pivot(&self) -> bool {
        self.shapes.contains(&Shape::BelowPivot)
    }

    /// `v <= y`, returns `y`.
    pub(crate) fn pivot_upper_bound(&self) -> Option<&Polynomial> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::AbovePivot { y } => Some(y),
            _ => None,
        })
    }

    /// `y <= a*v`, returns `(a, y)`.
    pub(crate) fn y_below_scaled_pivot(&self) -> Option<(&Polynomial, &Polynomial)> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::YBelowScaledPivot { a, y } => Some((a, y)),
            _ => None,
        })
    }

    /// `v*x <= z*x`, returns `(x, z)`.
    pub(crate) fn pivot_x_below_z_x(&self) -> Option<(&Polynomial, &Polynomial)> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::PivotXBelowZX { x, z } => Some((x, z)),
            _ => None,
        })
    }

    /// `y*x <= v*x`, returns `(x, y)`.
    pub(crate) fn y_x_below_pivot_x(&self) -> Option<(&Polynomial, &Polynomial)> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::YXBelowPivotX { x, y } => Some((x, y)),
            _ => None,
        })
    }

    /// `v*y <= v*z`, returns `(y, z)`.
    pub(crate) fn pivot_y_below_pivot_z(&self) -> Option<(&Polynomial, &Polynomial)> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::PivotYBelowPivotZ { y, z } => Some((y, z)),
            _ => None,
        })
    }

    pub(crate) fn as_signed_constraint(&self) -> &SignedConstraint {
        self.inequality.as_signed_constraint()
    }
}

fn pivot_polynomial(pivot: PVar, inequality: &Inequality) -> Polynomial {
    Polynomial::var(pivot, inequality.lhs.width())
}

/// Match `_ <= v`.
pub(crate) fn is_below_pivot(pivot: PVar, inequality: &Inequality) -> bool {
    inequality.rhs.as_var() == Some(pivot)
}

/// Match `v <= _`.
pub(crate) fn is_above_pivot(pivot: PVar, inequality: &Inequality) -> bool {
    inequality.lhs.as_var() == Some(pivot)
}

/// Match `v <= y`, returns `y`.
pub(crate) fn match_pivot_below(pivot: PVar, inequality: &Inequality) -> Option<Polynomial> {
    is_above_pivot(pivot, inequality).then(|| inequality.rhs.clone())
}

/// Match `v*y` where `v` has degree one, returns `y`.
pub(crate) fn match_pivot_factor(pivot: PVar, polynomial: &Polynomial) -> Option<Polynomial> {
    if polynomial.degree(pivot) != 1 {
        return None;
    }

    polynomial.factor(pivot, 1)
}

/// Match `x*y` where `x` is a scaled variable `c*w`; returns `y`.
///
/// The scalar is divided out first, after which `w` is factored out.
pub(crate) fn match_scaled_factor(x: &Polynomial, polynomial: &Polynomial) -> Option<Polynomial> {
    let (coeff, var) = x.unary()?;
    polynomial.try_div(coeff)?.factor(var, 1)
}

/// Match `y <= a*v`, returns `(a, y)`.
pub(crate) fn match_y_below_scaled_pivot(
    pivot: PVar,
    inequality: &Inequality,
) -> Option<(Polynomial, Polynomial)> {
    let a = match_pivot_factor(pivot, &inequality.rhs)?;
    Some((a, inequality.lhs.clone()))
}

pub(crate) fn verify_y_below_scaled_pivot(
    pivot: PVar,
    inequality: &Inequality,
    a: &Polynomial,
    y: &Polynomial,
) -> bool {
    inequality.lhs == *y && inequality.rhs == a * &pivot_polynomial(pivot, inequality)
}

/// Match `v*x <= z*x` where `x` is a scaled variable, returns `(x, z)`.
pub(crate) fn match_pivot_x_below_z_x(
    pivot: PVar,
    inequality: &Inequality,
) -> Option<(Polynomial, Polynomial)> {
    let x = match_pivot_factor(pivot, &inequality.lhs)?;
    let z = match_scaled_factor(&x, &inequality.rhs)?;
    Some((x, z))
}

pub(crate) fn verify_pivot_x_below_z_x(
    pivot: PVar,
    inequality: &Inequality,
    x: &Polynomial,
    z: &Polynomial,
) -> bool {
    inequality.lhs == &pivot_polynomial(pivot, inequality) * x && inequality.rhs == z * x
}

/// Match `y*x <= v*x` where `x` is a scaled variable, returns `(x, y)`.
pub(crate) fn match_y_x_below_pivot_x(
    pivot: PVar,
    inequality: &Inequality,
) -> Option<(Polynomial, Polynomial)> {
    let x = match_pivot_factor(pivot, &inequality.rhs)?;
    let y = match_scaled_factor(&x, &inequality.lhs)?;
    Some((x, y))
}

pub(crate) fn verify_y_x_below_pivot_x(
    pivot: PVar,
    inequality: &Inequality,
    x: &Polynomial,
    y: &Polynomial,
) -> bool {
    inequality.lhs == y * x && inequality.rhs == &pivot_polynomial(pivot, inequality) * x
}

/// Match `v*y <= v*z`, returns `(y, z)`.
pub(crate) fn match_pivot_y_below_pivot_z(
    pivot: PVar,
    inequality: &Inequality,
) -> Option<(Polynomial, Polynomial)> {
    let y = match_pivot_factor(pivot, &inequality.lhs)?;
    let z = match_pivot_factor(pivot, &inequality.rhs)?;
    Some((y, z))
}

pub(crate) fn verify_pivot_y_below_pivot_z(
    pivot: PVar,
    inequality: &Inequality,
    y: &Polynomial,
    z: &Polynomial,
) -> bool {
    let v = pivot_polynomial(pivot, inequality);
    inequality.lhs == &v * y && inequality.rhs == &v * z
}
