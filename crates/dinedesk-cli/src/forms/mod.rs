//! Interactive forms backing the write commands.

pub(crate) mod coupon;
