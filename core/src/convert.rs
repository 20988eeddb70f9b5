//! Bitfield extraction and narrow-type conversions: windows of bits pulled
//! out of the magnitude, narrowing to fixed machine integers and `f64`,
//! the power-of-two constructor, and random generation.

use crate::int::{Int, Sign};
use bigint_internals::{Digit, Error, Result, Word, DIGIT_BITS};

impl Int {
    /// Extracts the `count`-bit window of the magnitude starting at bit
    /// `offset`, packed into a [`Word`]. `count` must be in `1..=
    /// Word::BITS`; the window may span up to three limbs.
    pub fn bitfield_extract(&self, offset: u64, count: u32) -> Result<Word> {
        if count == 0 || count > Word::BITS {
            return Err(Error::InvalidArgument {
                name: "count",
                value: count as i128,
            });
        }
        // Built up bit by bit rather than by gathering whole limbs and
        // shifting: a window can span up to three limbs and land at any
        // sub-limb offset, and gathering limb-at-a-time into a `Word`
        // accumulator can overshoot `Word`'s width before the final
        // right-shift into place. `count <= Word::BITS` keeps this loop
        // bounded and this is not a hot path.
        let mut acc: Word = 0;
        for b in 0..count {
            let bit_pos = offset + b as u64;
            let limb_idx = (bit_pos / DIGIT_BITS as u64) as usize;
            let bit_idx = (bit_pos % DIGIT_BITS as u64) as u32;
            let bit = if limb_idx < self.used {
                (self.digit[limb_idx] >> bit_idx) & 1
            } else {
                0
            };
            acc |= (bit as Word) << b;
        }
        Ok(acc)
    }

    /// Narrows `self` to `T`. For signed `T`, the top bit of the target
    /// width is masked off the extracted magnitude before the sign of
    /// `self` is applied - this reproduces the narrowing behavior the
    /// kernel this was modeled on exhibits rather than silently wrapping
    /// like a native cast would.
    pub fn get_u64(&self) -> u64 {
        self.bitfield_extract(0, 64).unwrap_or(0) as u64
    }

    pub fn get_i64(&self) -> i64 {
        let mag = self.bitfield_extract(0, 63).unwrap_or(0) as i64;
        if self.is_negative() {
            -mag
        } else {
            mag
        }
    }

    pub fn get_u32(&self) -> u32 {
        self.bitfield_extract(0, 32).unwrap_or(0) as u32
    }

    pub fn get_i32(&self) -> i32 {
        let mag = self.bitfield_extract(0, 31).unwrap_or(0) as i32;
        if self.is_negative() {
            -mag
        } else {
            mag
        }
    }

    /// Coarse conversion to `f64`: folds at most 17 high limbs (enough to
    /// exceed `f64`'s 53-bit mantissa even at the narrower digit width)
    /// into a running `d = d * 2^DIGIT_BITS + digit[i]`, then scales by
    /// the bit count of the limbs that were skipped.
    pub fn get_float(&self) -> f64 {
        if self.used == 0 {
            return 0.0;
        }
        const MAX_LIMBS: usize = 17;
        let take = self.used.min(MAX_LIMBS);
        let mut d: f64 = 0.0;
        for i in (self.used - take..self.used).rev() {
            d = d * (1u64 << DIGIT_BITS) as f64 + self.digit[i] as f64;
        }
        let skipped_bits = (self.used - take) as f64 * DIGIT_BITS as f64;
        d *= 2f64.powf(skipped_bits);
        if self.is_negative() {
            -d
        } else {
            d
        }
    }

    /// Sets `self` to the signed value `v`, one digit at a time from the
    /// bottom (`v & MASK`, then `v >>= DIGIT_BITS`).
    pub fn set_i64(&mut self, v: i64) -> Result<()> {
        let sign = if v < 0 { Sign::Negative } else { Sign::NonNegative };
        let mag = (v as i128).unsigned_abs();
        self.set_from_u128(mag, sign)
    }

    pub fn set_u64(&mut self, v: u64) -> Result<()> {
        self.set_from_u128(v as u128, Sign::NonNegative)
    }

    fn set_from_u128(&mut self, mut v: u128, sign: Sign) -> Result<()> {
        self.set_zero()?;
        if v == 0 {
            return Ok(());
        }
        let mut limbs = Vec::new();
        while v != 0 {
            limbs.push((v & bigint_internals::MASK as u128) as Digit);
            v >>= DIGIT_BITS;
        }
        self.grow(limbs.len())?;
        self.digit[..limbs.len()].copy_from_slice(&limbs);
        self.used = limbs.len();
        self.zero_unused(None);
        self.sign = sign;
        self.clamp();
        Ok(())
    }

    /// Sets `self = 2^k` directly, by placing a single bit rather than
    /// shifting a one into place.
    pub fn power_of_two(&mut self, k: u64) -> Result<()> {
        if k > bigint_internals::MAX_BIT_COUNT {
            return Err(Error::InvalidArgument {
                name: "k",
                value: k as i128,
            });
        }
        self.set_zero()?;
        let limb = (k / DIGIT_BITS as u64) as usize;
        let bit = (k % DIGIT_BITS as u64) as u32;
        self.grow(limb + 1)?;
        self.digit[limb] = 1 << bit;
        self.used = limb + 1;
        self.sign = Sign::NonNegative;
        Ok(())
    }

    pub fn from_power_of_two(k: u64) -> Result<Int> {
        let mut out = Int::new();
        out.power_of_two(k)?;
        Ok(out)
    }
}

#[cfg(feature = "rand_support")]
impl Int {
    /// Fills `self` with `bits` bits of uniformly random magnitude drawn
    /// from `rng`, masking the top limb down to the exact bit count
    /// requested.
    pub fn rand(&mut self, bits: u64, rng: &mut impl rand_core::RngCore) -> Result<()> {
        if bits > bigint_internals::MAX_BIT_COUNT {
            return Err(Error::InvalidArgument {
                name: "bits",
                value: bits as i128,
            });
        }
        self.set_zero()?;
        if bits == 0 {
            return Ok(());
        }
        let n_limbs = bigint_internals::digits_for_bits(bits);
        self.grow(n_limbs)?;
        for i in 0..n_limbs {
            let raw = rng.next_u64();
            self.digit[i] = (raw as Digit) & bigint_internals::MASK;
        }
        self.used = n_limbs;
        let top_bits = bits - (n_limbs as u64 - 1) * DIGIT_BITS as u64;
        if top_bits < DIGIT_BITS as u64 {
            self.digit[n_limbs - 1] &= (1 << top_bits) - 1;
        }
        self.sign = Sign::NonNegative;
        self.clamp();
        log::trace!("rand: drew {bits} bits into {n_limbs} limbs");
        Ok(())
    }
}
