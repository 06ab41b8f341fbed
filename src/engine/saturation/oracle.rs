use crate::engine::SolverState;
use crate::polynomial::Polynomial;

/// Returns whether `x * y` does not wrap around under the current assignment, i.e. both operands
/// evaluate and their product over the integers is smaller than `2^width`.
///
/// The monotonicity of multiplication which the saturation rules rely on only holds for products
/// which do not overflow.
pub(crate) fn is_non_overflow(state: &dyn SolverState, x: &Polynomial, y: &Polynomial) -> bool {
    let (Some(x_val), Some(y_val)) = (state.try_eval(x), state.try_eval(y)) else {
        return false;
    };

    x.width().fits_product(x_val, y_val)
}
