// src/register/gates.rs

//! Bit-indexed gate kernels over a dense `2^n` amplitude vector.
//!
//! Every kernel reads from `src` and writes every entry of `dst`; the two
//! slices must have the same length and must not alias. The caller swaps the
//! buffers afterwards. The Hadamard kernel reads both members of each
//! `(i, i ^ mask)` pair, so writing into `src` in place would let later
//! indices see already-updated values.

use crate::core::FRAC_1_SQRT_2;
use num_complex::Complex;

/// Mask selecting qubit `index` inside a basis index.
#[inline]
pub(crate) fn qubit_mask(index: usize) -> usize {
    1 << index
}

/// Hadamard on the qubit selected by `mask`.
///
/// For basis index `i` with partner `pair = i ^ mask`:
/// * bit clear: `dst[i] = (src[i] + src[pair]) / √2`
/// * bit set:   `dst[i] = (src[pair] - src[i]) / √2`
pub(crate) fn hadamard(src: &[Complex<f64>], dst: &mut [Complex<f64>], mask: usize) {
    debug_assert_eq!(src.len(), dst.len());
    let factor = Complex::new(FRAC_1_SQRT_2, 0.0);

    for (i, out) in dst.iter_mut().enumerate() {
        let pair = i ^ mask;
        *out = if i & mask == 0 {
            // |0> -> (|0> + |1>)/√2
            (src[i] + src[pair]) * factor
        } else {
            // |1> -> (|0> - |1>)/√2
            (src[pair] - src[i]) * factor
        };
    }
}

/// Pauli-X on the qubit selected by `mask`: `dst[i] = src[i ^ mask]`.
pub(crate) fn pauli_x(src: &[Complex<f64>], dst: &mut [Complex<f64>], mask: usize) {
    debug_assert_eq!(src.len(), dst.len());
    for (i, out) in dst.iter_mut().enumerate() {
        *out = src[i ^ mask];
    }
}

/// Controlled-X. Amplitudes whose control bit is set move to the index with
/// the target bit flipped; all others stay put.
///
/// Flipping the target never changes the control bit (the masks differ), so
/// the gather form `dst[i] = src[i ^ target_mask]` is the same permutation as
/// scattering `src[i]` to `i ^ target_mask`.
pub(crate) fn controlled_x(
    src: &[Complex<f64>],
    dst: &mut [Complex<f64>],
    control_mask: usize,
    target_mask: usize,
) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_ne!(control_mask, target_mask);
    for (i, out) in dst.iter_mut().enumerate() {
        *out = if i & control_mask != 0 { src[i ^ target_mask] } else { src[i] };
    }
}
