mod add;
mod cmp;
mod common;
mod mul;

pub(crate) use add::{add_impl, sub_impl};
pub(crate) use cmp::cmp_impl;
pub(crate) use mul::mul_impl;
