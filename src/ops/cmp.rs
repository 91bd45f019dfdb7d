use crate::Decimal;

use core::cmp::Ordering;

pub(crate) fn cmp_impl(lhs: &Decimal, rhs: &Decimal) -> Ordering {
    // If the sign is different, then it's an easy answer
    if lhs.is_sign_negative() != rhs.is_sign_negative() {
        return if lhs.is_sign_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Same sign: compare magnitudes. A larger magnitude means a smaller
    // value once both operands are negative, e.g. -0.5 < -0.01.
    let magnitude = cmp_magnitude(lhs, rhs);
    if lhs.is_sign_negative() {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Compares absolute values. Canonical integer parts carry no leading
/// zeros, so a longer integer part is strictly larger and equal lengths
/// compare digit by digit; ties fall through to the fraction digits, where
/// positions past either operand's end read as zero.
pub(in crate::ops) fn cmp_magnitude(lhs: &Decimal, rhs: &Decimal) -> Ordering {
    let li = lhs.integer_digits();
    let ri = rhs.integer_digits();
    match li.len().cmp(&ri.len()).then_with(|| li.cmp(ri)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    let lf = lhs.fraction_digits();
    let rf = rhs.fraction_digits();
    for i in 0..lf.len().max(rf.len()) {
        let ld = lf.get(i).copied().unwrap_or(0);
        let rd = rf.get(i).copied().unwrap_or(0);
        match ld.cmp(&rd) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}
