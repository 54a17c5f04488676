/// A text element that can serve as a radix digit.
///
/// The ordinal order must agree with [`Ord`], and no symbol occurring in a text
/// may have ordinal `0`: that value is reserved for the sentinel reported past
/// the end of a suffix. The sorters do not check this.
pub trait Symbol: Copy + Ord {
    fn ordinal(self) -> u32;
}

macro_rules! impl_symbol {
    ($t:ty) => {
        impl Symbol for $t {
            #[inline]
            fn ordinal(self) -> u32 {
                self as u32
            }
        }
    };
}

impl_symbol!(u8);

impl_symbol!(u16);

impl_symbol!(u32);

impl_symbol!(char);
