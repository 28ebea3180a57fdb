use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// 192-bit unsigned integer stored as 3 little-endian u64 limbs. Holds the
/// accumulated blue work of a chain of headers, which outgrows u64 but never
/// needs the full 256 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Uint192([u64; 3]);

impl From<u64> for Uint192 {
    fn from(v: u64) -> Self {
        Self([v, 0, 0])
    }
}

impl Uint192 {
    pub const ZERO: Uint192 = Uint192([0; 3]);

    /// Little-endian bytes, all 24 of them.
    pub fn to_le_bytes(&self) -> [u8; 24] {
        let mut out = [0u8; 24];
        out[0..8].copy_from_slice(&self.0[0].to_le_bytes());
        out[8..16].copy_from_slice(&self.0[1].to_le_bytes());
        out[16..24].copy_from_slice(&self.0[2].to_le_bytes());
        out
    }

    /// Big-endian bytes. Header serialization trims the leading zeros off
    /// this form before writing.
    pub fn to_be_bytes(&self) -> [u8; 24] {
        let mut out = [0u8; 24];
        out[0..8].copy_from_slice(&self.0[2].to_be_bytes());
        out[8..16].copy_from_slice(&self.0[1].to_be_bytes());
        out[16..24].copy_from_slice(&self.0[0].to_be_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; 24]) -> Self {
        let mut limbs = [0u64; 3];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::from_le_bytes(bytes[i * 8..(i + 1) * 8].try_into().unwrap());
        }
        Self(limbs)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 3]
    }
}

impl AddAssign for Uint192 {
    fn add_assign(&mut self, rhs: Self) {
        let (r0, carry0) = self.0[0].overflowing_add(rhs.0[0]);
        let (r1, carry1a) = self.0[1].overflowing_add(rhs.0[1]);
        let (r1, carry1b) = r1.overflowing_add(carry0 as u64);
        let (r2, _) = self.0[2].overflowing_add(rhs.0[2]);
        let (r2, _) = r2.overflowing_add((carry1a || carry1b) as u64);
        self.0 = [r0, r1, r2];
    }
}

impl Add for Uint192 {
    type Output = Uint192;
    fn add(self, rhs: Self) -> Self::Output {
        let mut r = self;
        r += rhs;
        r
    }
}

impl fmt::Display for Uint192 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Uint192;

    #[test]
    fn add_assign_no_overflow() {
        let mut a = Uint192::from(1u64);
        a += Uint192::from(2u64);
        assert_eq!(a.to_le_bytes()[0..8], 3u64.to_le_bytes());
    }

    #[test]
    fn add_carries_across_limbs() {
        let mut a = Uint192::from(u64::MAX);
        a += Uint192::from(1u64);
        let le = a.to_le_bytes();
        assert_eq!(&le[0..8], &0u64.to_le_bytes());
        assert_eq!(&le[8..16], &1u64.to_le_bytes());
    }

    #[test]
    fn byte_views_agree() {
        let a = Uint192::from(0x1234567890abcdefu64);
        let mut be = a.to_be_bytes();
        be.reverse();
        assert_eq!(be, a.to_le_bytes());
        assert_eq!(Uint192::from_le_bytes(a.to_le_bytes()), a);
    }

    #[test]
    fn display_is_big_endian_hex() {
        let a = Uint192::from(0xabcdu64);
        assert_eq!(a.to_string(), format!("{:048x}", 0xabcdu64));
    }
}
