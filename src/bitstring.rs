use crate::error::{SfResult, SynthForgeError};
use std::fmt;
use std::str::FromStr;

/// Fixed-length binary genome. Rendered as a string of `0`/`1`, which is also
/// its cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        self.bits[idx]
    }

    #[inline]
    pub fn set(&mut self, idx: usize, value: bool) {
        self.bits[idx] = value;
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Bit `idx` as `0.0` / `1.0`, for velocity arithmetic.
    #[inline]
    pub fn value(&self, idx: usize) -> f64 {
        if self.bits[idx] {
            1.0
        } else {
            0.0
        }
    }

    /// Copy with bit `idx` inverted.
    pub fn flipped(&self, idx: usize) -> Self {
        let mut next = self.clone();
        next.bits[idx] = !next.bits[idx];
        next
    }

    /// In-place exclusive-or with `mask`. Extra mask bits are ignored.
    pub fn xor_assign(&mut self, mask: &[bool]) {
        for (bit, &m) in self.bits.iter_mut().zip(mask) {
            *bit ^= m;
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Consecutive 4-bit chunks, most significant bit first. A trailing
    /// remainder shorter than 4 bits is dropped.
    pub fn nibbles(&self) -> impl Iterator<Item = [bool; 4]> + '_ {
        self.bits
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstring {
    type Err = SynthForgeError;

    fn from_str(s: &str) -> SfResult<Self> {
        let bits = s
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SynthForgeError::Validation(format!(
                    "invalid character '{}' in bitstring",
                    other
                ))),
            })
            .collect::<SfResult<Vec<bool>>>()?;
        Ok(Self { bits })
    }
}
