use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// 256-bit unsigned integer for nonces, balances and asset amounts.
///
/// Stored as 4 x u64 in little-endian limb order.
/// Arithmetic is checked; overflow yields `None` rather than wrapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256([u64; 4]); // [low, mid_low, mid_high, high] little-endian limbs

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl U256 {
    pub const ZERO: Self = Self([0, 0, 0, 0]);
    pub const ONE: Self = Self([1, 0, 0, 0]);
    pub const MAX: Self = Self([u64::MAX, u64::MAX, u64::MAX, u64::MAX]);

    /// Create from a u64 value
    pub const fn from_u64(val: u64) -> Self {
        Self([val, 0, 0, 0])
    }

    /// Create from a u128 value
    pub const fn from_u128(val: u128) -> Self {
        Self([val as u64, (val >> 64) as u64, 0, 0])
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    /// Bit length (position of highest set bit + 1)
    pub fn bit_len(&self) -> u32 {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return (i as u32 + 1) * 64 - self.0[i].leading_zeros();
            }
        }
        0
    }

    /// Number of bytes in the minimal big-endian representation.
    pub fn byte_len(&self) -> usize {
        (self.bit_len() as usize + 7) / 8
    }

    /// Checked addition
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let mut result = [0u64; 4];
        let mut carry = false;

        for (i, limb) in result.iter_mut().enumerate() {
            let (sum, o1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, o2) = sum.overflowing_add(carry as u64);
            *limb = sum;
            carry = o1 || o2;
        }

        (!carry).then_some(Self(result))
    }

    /// Checked subtraction
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            return None;
        }

        let mut result = [0u64; 4];
        let mut borrow = false;

        for (i, limb) in result.iter_mut().enumerate() {
            let (diff, u1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, u2) = diff.overflowing_sub(borrow as u64);
            *limb = diff;
            borrow = u1 || u2;
        }

        Some(Self(result))
    }

    /// Checked multiplication by a single limb
    pub fn checked_mul_u64(&self, rhs: u64) -> Option<Self> {
        let mut result = [0u64; 4];
        let mut carry = 0u128;

        for (i, limb) in result.iter_mut().enumerate() {
            let product = self.0[i] as u128 * rhs as u128 + carry;
            *limb = product as u64;
            carry = product >> 64;
        }

        (carry == 0).then_some(Self(result))
    }

    /// Divide by a single non-zero limb, returning quotient and remainder.
    pub fn div_rem_u64(&self, rhs: u64) -> Option<(Self, u64)> {
        if rhs == 0 {
            return None;
        }

        let mut quotient = [0u64; 4];
        let mut rem = 0u128;

        for i in (0..4).rev() {
            let cur = (rem << 64) | self.0[i] as u128;
            quotient[i] = (cur / rhs as u128) as u64;
            rem = cur % rhs as u128;
        }

        Some((Self(quotient), rem as u64))
    }

    /// Convert to big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for i in 0..4 {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&self.0[3 - i].to_be_bytes());
        }
        bytes
    }

    /// Convert from big-endian bytes
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for i in 0..4 {
            let mut limb_bytes = [0u8; 8];
            limb_bytes.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
            limbs[3 - i] = u64::from_be_bytes(limb_bytes);
        }
        Self(limbs)
    }

    /// Minimal big-endian bytes: no leading zeros, empty for zero.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        bytes[32 - self.byte_len()..].to_vec()
    }

    /// Parse a big-endian slice of at most 32 bytes.
    pub fn from_be_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() > 32 {
            return Err(TypesError::U256Overflow);
        }
        let mut padded = [0u8; 32];
        padded[32 - slice.len()..].copy_from_slice(slice);
        Ok(Self::from_be_bytes(padded))
    }

    /// Parse from decimal string
    pub fn from_decimal_str(s: &str) -> Result<Self, TypesError> {
        if s.is_empty() {
            return Err(TypesError::InvalidU256String(s.to_string()));
        }

        let mut result = Self::ZERO;
        for c in s.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| TypesError::InvalidU256String(s.to_string()))?;
            result = result
                .checked_mul_u64(10)
                .and_then(|r| r.checked_add(&Self::from_u64(digit as u64)))
                .ok_or(TypesError::U256Overflow)?;
        }

        Ok(result)
    }

    /// Parse from hex digits without prefix. Odd digit counts are allowed.
    pub fn from_hex_str(s: &str) -> Result<Self, TypesError> {
        if s.is_empty() {
            return Err(TypesError::InvalidU256String(s.to_string()));
        }
        let digits = s.trim_start_matches('0');
        if digits.len() > 64 {
            return Err(TypesError::U256Overflow);
        }
        let padded = if digits.len() % 2 == 1 {
            format!("0{}", digits)
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&padded)?;
        Self::from_be_slice(&bytes)
    }
}

impl From<u64> for U256 {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl From<u128> for U256 {
    fn from(val: u128) -> Self {
        Self::from_u128(val)
    }
}

impl From<u32> for U256 {
    fn from(val: u32) -> Self {
        Self::from_u64(val as u64)
    }
}

impl TryFrom<U256> for u64 {
    type Error = TypesError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[1] != 0 || value.0[2] != 0 || value.0[3] != 0 {
            Err(TypesError::U256Overflow)
        } else {
            Ok(value.0[0])
        }
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut n = *self;
        let mut digits = Vec::new();
        while !n.is_zero() {
            let (q, r) = n.div_rem_u64(10).ok_or(fmt::Error)?;
            digits.push(b'0' + r as u8);
            n = q;
        }
        digits.reverse();

        f.write_str(std::str::from_utf8(&digits).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self)
    }
}

/// Minimal lowercase hex; `{:#x}` adds the `0x` prefix.
impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        if self.is_zero() {
            return f.write_str("0");
        }
        let encoded = hex::encode(self.to_be_bytes_trimmed());
        f.write_str(encoded.strip_prefix('0').unwrap_or(&encoded))
    }
}

impl FromStr for U256 {
    type Err = TypesError;

    /// Accepts `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex_part) => Self::from_hex_str(hex_part),
            None => Self::from_decimal_str(s),
        }
    }
}
