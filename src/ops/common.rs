use crate::Decimal;

use alloc::{vec, vec::Vec};

/// Two operand magnitudes padded to a shared shape: each buffer holds
/// `int_len` integer digits followed by the same number of fraction digits,
/// so the schoolbook passes can walk both right to left in lockstep. The
/// padding is alignment local to the operation; the operands are untouched.
struct Aligned {
    lhs: Vec<u8>,
    rhs: Vec<u8>,
    int_len: usize,
}

fn align(lhs: &Decimal, rhs: &Decimal) -> Aligned {
    let int_len = lhs.integer_digits().len().max(rhs.integer_digits().len());
    let frac_len = lhs.fraction_digits().len().max(rhs.fraction_digits().len());
    Aligned {
        lhs: padded(lhs, int_len, frac_len),
        rhs: padded(rhs, int_len, frac_len),
        int_len,
    }
}

fn padded(value: &Decimal, int_len: usize, frac_len: usize) -> Vec<u8> {
    let mut digits = Vec::with_capacity(int_len + frac_len);
    digits.resize(int_len - value.integer_digits().len(), 0);
    digits.extend_from_slice(value.integer_digits());
    digits.extend_from_slice(value.fraction_digits());
    digits.resize(int_len + frac_len, 0);
    digits
}

/// Schoolbook addition of two magnitudes, ignoring signs. A single carry
/// register propagates right to left across the fraction/integer boundary;
/// a carry surviving the most significant digit prepends a `1`. Returns the
/// raw (integer, fraction) digit buffers for the caller to sign and
/// normalize.
pub(in crate::ops) fn magnitude_add(lhs: &Decimal, rhs: &Decimal) -> (Vec<u8>, Vec<u8>) {
    let Aligned { lhs, rhs, int_len } = align(lhs, rhs);
    let mut digits = vec![0u8; lhs.len()];
    let mut carry = 0;
    for i in (0..lhs.len()).rev() {
        let sum = lhs[i] + rhs[i] + carry;
        digits[i] = sum % 10;
        carry = sum / 10;
    }

    let mut integer = Vec::with_capacity(int_len + 1);
    if carry > 0 {
        integer.push(carry);
    }
    integer.extend_from_slice(&digits[..int_len]);
    (integer, digits[int_len..].to_vec())
}

/// Schoolbook subtraction of two magnitudes, ignoring signs. The caller
/// must pass the operand with the larger (or equal) magnitude as the
/// minuend; the borrow then never escapes the most significant digit.
pub(in crate::ops) fn magnitude_sub(minuend: &Decimal, subtrahend: &Decimal) -> (Vec<u8>, Vec<u8>) {
    let Aligned { lhs, rhs, int_len } = align(minuend, subtrahend);
    let mut digits = vec![0u8; lhs.len()];
    let mut borrow = 0i8;
    for i in (0..lhs.len()).rev() {
        let mut diff = lhs[i] as i8 - rhs[i] as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits[i] = diff as u8;
    }

    (digits[..int_len].to_vec(), digits[int_len..].to_vec())
}
