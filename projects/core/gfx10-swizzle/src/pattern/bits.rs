//! Packed coordinate-bit constants used by the pattern tables.
//!
//! Layout of the packed 64-bit value: x mask in bits 0..16, y in 16..32,
//! z/slice in 32..48, sample in 48..64. XOR-ing constants together builds a
//! multi-component pattern bit.

#![allow(dead_code)]

macro_rules! coord_bits {
    ($shift:expr, $($name:ident = $bit:expr),+ $(,)?) => {
        $(pub(crate) const $name: u64 = 1u64 << ($shift + $bit);)+
    };
}

coord_bits!(0, X0 = 0, X1 = 1, X2 = 2, X3 = 3, X4 = 4, X5 = 5, X6 = 6, X7 = 7, X8 = 8, X9 = 9, X10 = 10, X11 = 11);
coord_bits!(16, Y0 = 0, Y1 = 1, Y2 = 2, Y3 = 3, Y4 = 4, Y5 = 5, Y6 = 6, Y7 = 7, Y8 = 8, Y9 = 9, Y10 = 10);
coord_bits!(32, Z0 = 0, Z1 = 1, Z2 = 2, Z3 = 3, Z4 = 4, Z5 = 5, Z6 = 6, Z7 = 7, Z8 = 8);
coord_bits!(48, S0 = 0, S1 = 1, S2 = 2, S3 = 3);
