//! Internal limb-width configuration and widening arithmetic shared by the
//! `bigint` system of crates.
//!
//! This crate fixes, at compile time via feature flags, the digit width the
//! rest of the system computes in: either 28-bit digits widening through a
//! 64-bit accumulator, or 60-bit digits widening through a 128-bit
//! accumulator. Exactly one of `digit_28_bit` / `digit_60_bit` should be
//! active; `digit_28_bit` is the default, matching the libtommath-style
//! layout that keeps every widening multiply inside a native machine word on
//! 64-bit targets.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod widening;

#[cfg(all(feature = "digit_28_bit", feature = "digit_60_bit"))]
compile_error!("only one of `digit_28_bit` or `digit_60_bit` may be active");

#[cfg(feature = "digit_60_bit")]
mod digit_cfg {
    /// A single limb of the magnitude array.
    pub type Digit = u64;
    /// Widening accumulator, at least twice `DIGIT_BITS` wide.
    pub type Word = u128;
    /// Signed counterpart of [`Digit`], used for intermediate sign-aware math.
    pub type IDigit = i128;
    pub const DIGIT_BITS: u32 = 60;
}

#[cfg(not(feature = "digit_60_bit"))]
mod digit_cfg {
    /// A single limb of the magnitude array.
    pub type Digit = u32;
    /// Widening accumulator, at least twice `DIGIT_BITS` wide.
    pub type Word = u64;
    /// Signed counterpart of [`Digit`], used for intermediate sign-aware math.
    pub type IDigit = i64;
    pub const DIGIT_BITS: u32 = 28;
}

pub use digit_cfg::{Digit, IDigit, Word, DIGIT_BITS};

/// `2^DIGIT_BITS - 1`: every stored limb must fit under this mask.
pub const MASK: Digit = ((1 as Word) << DIGIT_BITS) as Digit - 1;

/// Bit width of [`Word`].
pub const WORD_BITS: u32 = (core::mem::size_of::<Word>() * 8) as u32;

/// Ceiling on the number of columns a Comba-style multiply can address
/// before a column accumulator could overflow `Word`. Derived from the
/// spare bits `Word` has over two limbs' worth of product.
pub const WARRAY: usize = 1usize << (WORD_BITS - 2 * DIGIT_BITS);

/// Ceiling on how many single-limb products may be summed into one Comba
/// column accumulator before it could overflow.
pub const MAX_COMBA: usize = WARRAY;

/// Minimum limb count at which general multiply switches from schoolbook/
/// Comba to Karatsuba.
pub const MUL_KARATSUBA_CUTOFF: usize = 80;

/// Minimum limb count at which squaring dispatch switches to Karatsuba.
pub const SQR_KARATSUBA_CUTOFF: usize = 120;

/// Minimum limb count at which general multiply switches to Toom-Cook-3.
pub const MUL_TOOM_CUTOFF: usize = 350;

/// Minimum limb count at which squaring dispatch switches to Toom-Cook-3.
pub const SQR_TOOM_CUTOFF: usize = 400;

/// `n` at or above which `factorial` switches from iterative multiply to
/// binary-split recursive products.
pub const FACTORIAL_BINARY_SPLIT_CUTOFF: u64 = 1_000;

/// Smallest capacity (in limbs) any initialized `Int` is grown to.
pub const MIN_DIGIT_COUNT: usize = 4;

/// Capacity a freshly-initialized `Int` grows to on first use.
pub const DEFAULT_DIGIT_COUNT: usize = 8;

/// Hard ceiling on a requested bit count (e.g. for `rand`, `power_of_two`,
/// shift amounts) past which allocation size computations are refused
/// rather than risked against overflow.
pub const MAX_BIT_COUNT: u64 = 1 << 28;

/// Iteration bound for the Newton's-method loop inside `root_n`.
pub const MAX_ITERATIONS_ROOT_N: u32 = 128;

/// Errors surfaced by the arithmetic kernel. Every fallible core routine
/// returns `Result<_, Error>` rather than panicking or aborting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("allocation failure growing to {requested} limbs")]
    OutOfMemory { requested: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid argument: {name} = {value}")]
    InvalidArgument { name: &'static str, value: i128 },

    #[error("math domain error: {0}")]
    MathDomainError(&'static str),

    #[error("assignment to an immutable integer")]
    AssignmentToImmutable,

    #[error("root iteration did not converge within {bound} iterations")]
    MaxIterationsReached { bound: u32 },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Smallest limb count able to hold `bits` bits.
pub const fn digits_for_bits(bits: u64) -> usize {
    ((bits + DIGIT_BITS as u64 - 1) / DIGIT_BITS as u64) as usize
}
