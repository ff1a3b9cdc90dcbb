//! This module contains the pure, stateless kernel for zig-zag encoding and
//! decoding.
//!
//! Zig-zag is a lossless, bitwise bijection between signed and unsigned
//! integers that maps small-magnitude values (of either sign) to small unsigned
//! values, so the packing stage can emit short codes for them. The generic core
//! is linked across widths by the `HasUnsigned`/`HasSigned` traits.

use num_traits::{PrimInt, Signed, Unsigned};

use crate::traits::{HasSigned, HasUnsigned};

/// Encodes a single signed value: `(n << 1) ^ (n >> (BITS - 1))`.
///
/// The right shift is arithmetic, so the second operand is all-ones for
/// negative inputs and zero otherwise.
pub fn encode_val<T>(n: T) -> T::Unsigned
where
    T: PrimInt + Signed + HasUnsigned,
    T::Unsigned: PrimInt,
{
    let bits = std::mem::size_of::<T>() * 8;
    let shifted = (n << 1) ^ (n >> (bits - 1));
    // Same-width bit pattern reinterpretation; the value already is the
    // unsigned encoding.
    unsafe { std::mem::transmute_copy::<T, T::Unsigned>(&shifted) }
}

/// Decodes a single unsigned value back to signed: `(n >> 1) ^ -(n & 1)`.
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + HasSigned,
    U::Signed: PrimInt + Signed,
{
    let one = U::one();
    let shifted = n >> 1;
    let lsb = n & one;
    let signed_shifted = unsafe { std::mem::transmute_copy::<U, U::Signed>(&shifted) };
    let signed_lsb = unsafe { std::mem::transmute_copy::<U, U::Signed>(&lsb) };

    signed_shifted ^ (-signed_lsb)
}

/// Reinterprets a signed sample as its unsigned bit pattern without changing
/// any bits. Used on the non-pre-transformed path, where widening must be a
/// zero-extension of the raw representation rather than a sign extension.
pub fn cast_unsigned<T>(n: T) -> T::Unsigned
where
    T: HasUnsigned,
{
    unsafe { std::mem::transmute_copy::<T, T::Unsigned>(&n) }
}

/// The inverse of [`cast_unsigned`].
pub fn cast_signed<U>(n: U) -> U::Signed
where
    U: HasSigned,
{
    unsafe { std::mem::transmute_copy::<U, U::Signed>(&n) }
}
