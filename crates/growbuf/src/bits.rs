//! Least and most significant set-bit lookups for unsigned integers.

/// Bit-scan queries over a fixed-width unsigned integer.
///
/// ```rust
/// use growbuf::BitScan;
///
/// assert_eq!(0b0110_1000u8.lsb(), Some(3));
/// assert_eq!(0b0110_1000u8.msb(), Some(6));
/// assert_eq!(0u32.lsb(), None);
/// ```
pub trait BitScan: Copy {
    /// Index of the lowest set bit, or `None` for zero.
    fn lsb(self) -> Option<u32>;
    /// Index of the highest set bit, or `None` for zero.
    fn msb(self) -> Option<u32>;
}

macro_rules! impl_bit_scan {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl BitScan for $ty {
                #[inline]
                fn lsb(self) -> Option<u32> {
                    (self != 0).then(|| self.trailing_zeros())
                }

                #[inline]
                fn msb(self) -> Option<u32> {
                    (self != 0).then(|| <$ty>::BITS - 1 - self.leading_zeros())
                }
            }
        )*
    };
}

impl_bit_scan!(u8, u16, u32, u64);
