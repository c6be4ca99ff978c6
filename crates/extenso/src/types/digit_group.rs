use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::from_fn;

/// A base-1000 chunk of an amount, always in `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DigitGroup(u16);

impl DigitGroup {
    pub const MAX: u16 = 999;

    /// Create a group, returning `None` for values above 999.
    pub fn new(value: u16) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Splits `n` into groups, least significant first.
    ///
    /// Zero yields no groups at all.
    ///
    /// ```
    /// use extenso::DigitGroup;
    ///
    /// let groups: Vec<u16> = DigitGroup::split(1_119_929_521).map(DigitGroup::value).collect();
    /// assert_eq!(groups, vec![521, 929, 119, 1]);
    /// ```
    pub fn split(mut n: u128) -> impl Iterator<Item = DigitGroup> {
        from_fn(move || {
            if n == 0 {
                return None;
            }
            let group = DigitGroup((n % 1000) as u16);
            n = n.div_euclid(1000);
            Some(group)
        })
    }
}

impl From<u8> for DigitGroup {
    fn from(value: u8) -> Self {
        Self(u16::from(value))
    }
}

impl Display for DigitGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
