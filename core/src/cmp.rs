//! Predicates and comparison: zero/sign/parity/power-of-two checks, and
//! magnitude/signed ordering. All O(`used`).

use crate::int::{Int, Sign};
use core::cmp::Ordering;

impl Int {
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self.sign, Sign::NonNegative)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(self.sign, Sign::Negative)
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.used == 0 || self.digit[0] & 1 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// True iff zero, or the magnitude is exactly a power of two (one bit
    /// set in the top limb, every limb below it zero).
    pub fn is_power_of_two(&self) -> bool {
        if self.used == 0 {
            return true;
        }
        for &d in &self.digit[..self.used - 1] {
            if d != 0 {
                return false;
            }
        }
        let top = self.digit[self.used - 1];
        top & (top.wrapping_sub(1)) == 0
    }

    /// Compares `|self|` to `|other|`: by limb count first, then from the
    /// most significant limb down.
    pub fn compare_magnitude(&self, other: &Int) -> Ordering {
        if self.used != other.used {
            return self.used.cmp(&other.used);
        }
        for i in (0..self.used).rev() {
            match self.digit[i].cmp(&other.digit[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Signed comparison: by sign first, then magnitude (reversed for two
    /// negatives).
    pub fn compare(&self, other: &Int) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::NonNegative) => self.compare_magnitude(other),
            (Sign::Negative, Sign::Negative) => self.compare_magnitude(other).reverse(),
        }
    }

    /// Compares `self` to the unsigned single-limb value `d`.
    pub fn compare_digit(&self, d: crate::Digit) -> Ordering {
        if self.is_negative() && !self.is_zero() {
            return Ordering::Less;
        }
        match self.used {
            0 => 0u64.cmp(&(d as u64)),
            1 => self.digit[0].cmp(&d),
            _ => Ordering::Greater,
        }
    }

    /// Total number of significant bits (`0` for zero).
    pub fn count_bits(&self) -> u64 {
        if self.used == 0 {
            return 0;
        }
        let top = self.digit[self.used - 1];
        let top_bits = crate::Digit::BITS as u64 - top.leading_zeros() as u64;
        (self.used as u64 - 1) * crate::DIGIT_BITS as u64 + top_bits
    }

    /// Number of trailing zero bits in the magnitude (`0` for zero).
    pub fn count_trailing_zeros(&self) -> u64 {
        for (i, &d) in self.digit[..self.used].iter().enumerate() {
            if d != 0 {
                return i as u64 * crate::DIGIT_BITS as u64 + d.trailing_zeros() as u64;
            }
        }
        0
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
