use crate::ops::add::add_impl;
use crate::Decimal;

use alloc::{vec, vec::Vec};
use num_traits::Zero;

/// Schoolbook long multiplication. Both magnitudes are flattened into
/// point-free digit buffers; each digit of the shorter buffer produces a
/// positionally shifted partial product against the longer one, and the
/// partial products accumulate through the addition operator. The decimal
/// point is re-inserted `lhs.scale() + rhs.scale()` digits from the right
/// of the accumulated digits, and the sign is negative iff exactly one
/// operand was negative.
pub(crate) fn mul_impl(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let negative = lhs.is_sign_negative() != rhs.is_sign_negative();
    let scale = lhs.scale() + rhs.scale();

    let lhs_digits = flattened(lhs);
    let rhs_digits = flattened(rhs);
    // The shorter magnitude drives the outer loop
    let (multiplier, multiplicand) = if lhs_digits.len() <= rhs_digits.len() {
        (lhs_digits, rhs_digits)
    } else {
        (rhs_digits, lhs_digits)
    };

    let mut product = Decimal::zero();
    for (shift, &digit) in multiplier.iter().rev().enumerate() {
        // Zero rows contribute nothing
        if digit == 0 {
            continue;
        }
        let row = partial_product(&multiplicand, digit, shift);
        product = add_impl(&product, &Decimal::from_parts(false, row, Vec::new()));
    }

    let mut digits = product.integer_digits().to_vec();
    if scale == 0 {
        return Decimal::from_parts(negative, digits, Vec::new());
    }

    // Re-insert the decimal point `scale` digits from the right, padding on
    // the left when the product has fewer digits than the scale.
    if digits.len() < scale {
        let mut padded = vec![0u8; scale - digits.len()];
        padded.extend_from_slice(&digits);
        digits = padded;
    }
    let fraction = digits.split_off(digits.len() - scale);
    Decimal::from_parts(negative, digits, fraction)
}

// Magnitude digits with the decimal point removed.
fn flattened(value: &Decimal) -> Vec<u8> {
    let mut digits = Vec::with_capacity(value.integer_digits().len() + value.fraction_digits().len());
    digits.extend_from_slice(value.integer_digits());
    digits.extend_from_slice(value.fraction_digits());
    digits
}

/// One row of the schoolbook tableau: `multiplicand * digit`, shifted left
/// by `shift` positions with trailing zeros. Built least significant digit
/// first, then reversed into place.
fn partial_product(multiplicand: &[u8], digit: u8, shift: usize) -> Vec<u8> {
    let mut reversed = Vec::with_capacity(multiplicand.len() + shift + 1);
    reversed.resize(shift, 0);
    let mut carry = 0;
    for &d in multiplicand.iter().rev() {
        let product = d * digit + carry;
        reversed.push(product % 10);
        carry = product / 10;
    }
    if carry > 0 {
        reversed.push(carry);
    }
    reversed.reverse();
    reversed
}
