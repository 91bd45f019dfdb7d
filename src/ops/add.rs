use crate::ops::cmp::cmp_magnitude;
use crate::ops::common::{magnitude_add, magnitude_sub};
use crate::Decimal;

use core::cmp::Ordering;
use num_traits::Zero;

pub(crate) fn add_impl(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let lhs_negative = lhs.is_sign_negative();
    let rhs_negative = rhs.is_sign_negative();

    // Equal signs grow the magnitude and keep the common sign.
    if lhs_negative == rhs_negative {
        let (integer, fraction) = magnitude_add(lhs, rhs);
        return Decimal::from_parts(lhs_negative, integer, fraction);
    }

    // Opposite signs cancel: the larger magnitude is the minuend and
    // donates its sign. Exact cancellation is non-negative zero.
    match cmp_magnitude(lhs, rhs) {
        Ordering::Greater => {
            let (integer, fraction) = magnitude_sub(lhs, rhs);
            Decimal::from_parts(lhs_negative, integer, fraction)
        }
        Ordering::Less => {
            let (integer, fraction) = magnitude_sub(rhs, lhs);
            Decimal::from_parts(rhs_negative, integer, fraction)
        }
        Ordering::Equal => Decimal::zero(),
    }
}

pub(crate) fn sub_impl(lhs: &Decimal, rhs: &Decimal) -> Decimal {
    let lhs_negative = lhs.is_sign_negative();
    let rhs_negative = rhs.is_sign_negative();

    // Opposite signs grow the magnitude: a - (-b) and -a - b both keep the
    // left operand's sign.
    if lhs_negative != rhs_negative {
        let (integer, fraction) = magnitude_add(lhs, rhs);
        return Decimal::from_parts(lhs_negative, integer, fraction);
    }

    // Equal signs cancel; the result sign follows which magnitude wins.
    match cmp_magnitude(lhs, rhs) {
        Ordering::Greater => {
            let (integer, fraction) = magnitude_sub(lhs, rhs);
            Decimal::from_parts(lhs_negative, integer, fraction)
        }
        Ordering::Less => {
            let (integer, fraction) = magnitude_sub(rhs, lhs);
            Decimal::from_parts(!lhs_negative, integer, fraction)
        }
        Ordering::Equal => Decimal::zero(),
    }
}
