//! The [`Int`] type and its storage layer: the growable limb buffer,
//! canonicalization, and the handful of primitives (`grow`, `clamp`,
//! `copy`, `swap`) every higher layer in this crate builds on.
//!
//! The canonical form an `Int` must satisfy at every public entry and exit
//! point:
//! 1. if `used == 0` then `sign` is [`Sign::NonNegative`] (zero has exactly
//!    one representation),
//! 2. if `used > 0` then `digit[used - 1] != 0`,
//! 3. every limb at index `>= used` is zero,
//! 4. every limb at index `< used` is `<= MASK`,
//! 5. the backing buffer has at least `MIN_DIGIT_COUNT` limbs once the
//!    `Int` has been touched by any mutating operation.

use bigint_internals::{Digit, Error, Result, DEFAULT_DIGIT_COUNT, MIN_DIGIT_COUNT};

/// Sign of an [`Int`]. Zero is always [`Sign::NonNegative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    #[inline]
    pub fn negate(self) -> Sign {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// The sign of `a * b` for non-zero `a` and `b`.
    #[inline]
    pub fn of_product(a: Sign, b: Sign) -> Sign {
        if a == b {
            Sign::NonNegative
        } else {
            Sign::Negative
        }
    }
}

/// Modal flags carried alongside an [`Int`]'s magnitude.
///
/// Only [`Flags::IMMUTABLE`] is load-bearing for the operations this crate
/// implements. `INF`, `NEG_INF`, and `NAN` are carried so the sentinel
/// constants in [`Int`] can represent them and [`Flags::any_special`] can
/// test for them, but no arithmetic routine here inspects or rejects them on
/// its operands - propagating these through every arithmetic identity is
/// future work, not something this kernel does today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const IMMUTABLE: Flags = Flags(1 << 0);
    pub const INF: Flags = Flags(1 << 1);
    pub const NEG_INF: Flags = Flags(1 << 2);
    pub const NAN: Flags = Flags(1 << 3);

    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    #[inline]
    pub const fn any_special(self) -> bool {
        self.0 & (Flags::INF.0 | Flags::NEG_INF.0 | Flags::NAN.0) != 0
    }
}

/// A signed arbitrary-precision integer in sign-magnitude form.
///
/// Limbs are stored least-significant first. Routines in this crate trust
/// that any `Int` passed to them already satisfies the canonical form
/// invariants documented on this module; validating untrusted input is the
/// job of a layer above this one.
#[derive(Debug, Clone)]
pub struct Int {
    pub(crate) sign: Sign,
    pub(crate) used: usize,
    pub(crate) digit: Vec<Digit>,
    pub(crate) flags: Flags,
}

impl Default for Int {
    fn default() -> Self {
        Int::new()
    }
}

impl Int {
    /// An uninitialized zero. The backing buffer is not allocated until the
    /// first mutating call grows it.
    pub fn new() -> Self {
        Int {
            sign: Sign::NonNegative,
            used: 0,
            digit: Vec::new(),
            flags: Flags::NONE,
        }
    }

    fn immutable(sign: Sign, used: usize, digit: Vec<Digit>) -> Self {
        Int {
            sign,
            used,
            digit,
            flags: Flags::IMMUTABLE,
        }
    }

    /// The canonical immutable zero constant.
    pub fn sentinel_zero() -> Self {
        Int::immutable(Sign::NonNegative, 0, vec![0; MIN_DIGIT_COUNT])
    }

    /// The canonical immutable one constant.
    pub fn sentinel_one() -> Self {
        let mut digit = vec![0; MIN_DIGIT_COUNT];
        digit[0] = 1;
        Int::immutable(Sign::NonNegative, 1, digit)
    }

    /// The canonical immutable minus-one constant.
    pub fn sentinel_minus_one() -> Self {
        let mut digit = vec![0; MIN_DIGIT_COUNT];
        digit[0] = 1;
        Int::immutable(Sign::Negative, 1, digit)
    }

    /// The canonical immutable positive-infinity sentinel. Carries no
    /// meaningful magnitude; a caller that needs to detect one can test
    /// [`Int::flags`] against [`Flags::any_special`].
    pub fn sentinel_inf() -> Self {
        let mut out = Int::immutable(Sign::NonNegative, 0, vec![0; MIN_DIGIT_COUNT]);
        out.flags = out.flags.union(Flags::INF);
        out
    }

    /// The canonical immutable negative-infinity sentinel.
    pub fn sentinel_minus_inf() -> Self {
        let mut out = Int::immutable(Sign::Negative, 0, vec![0; MIN_DIGIT_COUNT]);
        out.flags = out.flags.union(Flags::NEG_INF);
        out
    }

    /// The canonical immutable not-a-number sentinel.
    pub fn sentinel_nan() -> Self {
        let mut out = Int::immutable(Sign::NonNegative, 0, vec![0; MIN_DIGIT_COUNT]);
        out.flags = out.flags.union(Flags::NAN);
        out
    }

    #[inline]
    pub fn is_immutable(&self) -> bool {
        self.flags.contains(Flags::IMMUTABLE)
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    fn check_mutable(&self) -> Result<()> {
        if self.is_immutable() {
            Err(Error::AssignmentToImmutable)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.digit.len()
    }

    /// Significant limbs, least-significant first. Always `used()` long.
    #[inline]
    pub fn limbs(&self) -> &[Digit] {
        &self.digit[..self.used]
    }

    /// Mutable access to the full backing buffer, including unused tail
    /// limbs. Only for use by routines in this crate that restore the
    /// canonical form (via `clamp`/`zero_unused`) before returning.
    #[inline]
    pub(crate) fn digits_mut(&mut self) -> &mut [Digit] {
        &mut self.digit
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[Digit] {
        &self.digit
    }

    /// Ensures the backing buffer holds at least `needed` limbs (and at
    /// least `MIN_DIGIT_COUNT`, and at least `self.used`). Never shrinks.
    /// New limbs are zero. Fails with [`Error::OutOfMemory`] if the
    /// allocator cannot satisfy the request.
    pub fn grow(&mut self, needed: usize) -> Result<()> {
        self.check_mutable()?;
        let target = needed.max(MIN_DIGIT_COUNT).max(self.used);
        if self.digit.is_empty() {
            let initial = target.max(DEFAULT_DIGIT_COUNT);
            log::trace!("grow: allocating fresh buffer of {initial} limbs");
            self.digit
                .try_reserve_exact(initial)
                .map_err(|_| Error::OutOfMemory { requested: initial })?;
            self.digit.resize(initial, 0);
        } else if self.digit.len() < target {
            let additional = target - self.digit.len();
            log::trace!(
                "grow: extending buffer from {} to {target} limbs",
                self.digit.len()
            );
            self.digit
                .try_reserve(additional)
                .map_err(|_| Error::OutOfMemory { requested: target })?;
            self.digit.resize(target, 0);
        }
        Ok(())
    }

    /// Shrinks the backing buffer down to `max(MIN_DIGIT_COUNT, used)`.
    pub fn shrink(&mut self) -> Result<()> {
        self.check_mutable()?;
        let target = self.used.max(MIN_DIGIT_COUNT);
        if self.digit.len() > target {
            log::trace!(
                "shrink: reclaiming buffer from {} to {target} limbs",
                self.digit.len()
            );
            self.digit.truncate(target);
            self.digit.shrink_to_fit();
        }
        Ok(())
    }

    /// Removes trailing zero limbs from `used` downward, then normalizes
    /// the sign of a true zero to [`Sign::NonNegative`].
    pub fn clamp(&mut self) {
        while self.used > 0 && self.digit[self.used - 1] == 0 {
            self.used -= 1;
        }
        if self.used == 0 {
            self.sign = Sign::NonNegative;
        }
    }

    /// Zeros limbs in `[used, old_used)`, or `[used, capacity)` if
    /// `old_used` is `None`. Called after `used` shrinks so stale limbs
    /// don't linger past the new boundary.
    pub(crate) fn zero_unused(&mut self, old_used: Option<usize>) {
        let end = old_used.unwrap_or(self.digit.len()).min(self.digit.len());
        if self.used < end {
            for d in &mut self.digit[self.used..end] {
                *d = 0;
            }
        }
    }

    /// Copies `src` into `self`. A no-op if `src` and `self` are the same
    /// allocation. Grows `self` as needed; never shrinks its capacity.
    pub fn copy_from(&mut self, src: &Int) -> Result<()> {
        if std::ptr::eq(self, src) {
            return Ok(());
        }
        self.check_mutable()?;
        let old_used = self.used;
        self.grow(src.used)?;
        self.digit[..src.used].copy_from_slice(&src.digit[..src.used]);
        self.used = src.used;
        self.zero_unused(Some(old_used.max(src.used)));
        self.sign = src.sign;
        self.flags = Flags(self.flags.0 & Flags::IMMUTABLE.0) | src.flags_non_immutable();
        Ok(())
    }

    fn flags_non_immutable(&self) -> Flags {
        Flags(self.flags.0 & !Flags::IMMUTABLE.0)
    }

    /// Exchanges the entire contents (sign, used count, and buffer
    /// ownership) of two `Int`s. Neither may be immutable.
    pub fn swap(&mut self, other: &mut Int) -> Result<()> {
        self.check_mutable()?;
        other.check_mutable()?;
        std::mem::swap(&mut self.sign, &mut other.sign);
        std::mem::swap(&mut self.used, &mut other.used);
        std::mem::swap(&mut self.digit, &mut other.digit);
        Ok(())
    }

    /// Sets `self` to zero, preserving capacity.
    pub fn set_zero(&mut self) -> Result<()> {
        self.check_mutable()?;
        self.zero_unused(None);
        self.used = 0;
        self.sign = Sign::NonNegative;
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    /// Builds an `Int` directly from its parts. `digit` must already
    /// satisfy the canonical-form invariants modulo the trailing-zero
    /// rule (callers typically pass a buffer that may have extra trailing
    /// zero limbs above `used`, which is fine).
    pub(crate) fn from_raw_parts(sign: Sign, used: usize, digit: Vec<Digit>) -> Int {
        Int {
            sign,
            used,
            digit,
            flags: Flags::NONE,
        }
    }

    /// A mutable clone: identical value, but with the `Immutable` flag
    /// cleared even if `self` is a sentinel constant. Used internally
    /// whenever a routine needs scratch storage seeded from an operand.
    pub fn clone_mutable(&self) -> Int {
        let mut out = self.clone();
        out.flags = Flags(out.flags.0 & !Flags::IMMUTABLE.0);
        out
    }
}

impl core::ops::BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}
