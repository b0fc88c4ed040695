//! Fast approximate reciprocal square root for 32-bit floats.
//!
//! The approximation reinterprets the bits of the input as an integer,
//! which is roughly a scaled and offset log2 of the value.  Subtracting
//! half of that from a magic constant gives a bit pattern that is roughly
//! `log2(1 / sqrt(n))`, and a single Newton-Raphson step then cleans up
//! the estimate.
//!
//! After refinement the relative error is below 0.2% for all positive
//! normal floats.  That's plenty for things like normalizing shading
//! vectors, but the result is _not_ exact.
//!
//! Warning: zero, negative, subnormal, infinite, and NaN inputs are _not_
//! supported.  They don't panic or signal anything, but the values they
//! produce are meaningless.  Callers are responsible for staying in the
//! positive normal range.

/// The integer magic constant used for the initial estimate.
pub const MAGIC: i32 = 0x5F37_59DF;

/// Approximates `1.0 / n.sqrt()`.
///
/// `n` must be positive, finite, and normal.  Any other input gives an
/// unspecified (but non-panicking) result.
#[inline]
pub fn inv_sqrt(n: f32) -> f32 {
    refine(n, estimate(n))
}

/// The raw bit-trick estimate of `1.0 / n.sqrt()`, without refinement.
///
/// Relative error is within about 3.5% for positive normal inputs.
#[inline]
pub fn estimate(n: f32) -> f32 {
    let i = f32_to_bits(n);
    bits_to_f32(MAGIC.wrapping_sub(i >> 1))
}

/// Applies one Newton-Raphson step to the estimate `y` of `1.0 / n.sqrt()`.
///
/// This is Newton's method on `f(y) = 1/y^2 - n`, rearranged so that no
/// division is needed.
#[inline]
pub fn refine(n: f32, y: f32) -> f32 {
    let half_n = n * 0.5;
    y * (1.5 - (half_n * y * y))
}

/// Approximately normalizes a vector of three floats.
///
/// The squared length of the vector must be positive and normal, so zero
/// length vectors are not handled.  The resulting length is within 0.2% of
/// 1.0.
#[inline]
pub fn normalize(vec: (f32, f32, f32)) -> (f32, f32, f32) {
    let len2 = (vec.0 * vec.0) + (vec.1 * vec.1) + (vec.2 * vec.2);
    let inv_len = inv_sqrt(len2);
    (vec.0 * inv_len, vec.1 * inv_len, vec.2 * inv_len)
}

/// Reinterprets the bits of a float as a signed integer.
#[inline(always)]
pub fn f32_to_bits(v: f32) -> i32 {
    v.to_bits() as i32
}

/// Reinterprets the bits of a signed integer as a float.
#[inline(always)]
pub fn bits_to_f32(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}
