/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A number type that implements Javascript / JSON semantics.
///
/// Wire protocols distinguish only "number", so integral and floating values
/// share one representation here and generated code narrows on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Unsigned 64-bit integer value
    PosInt(u64),
    /// Signed 64-bit integer value
    NegInt(i64),
    /// 64-bit floating-point value
    Float(f64),
}

impl Number {
    /// Converts to an `f64`, possibly losing precision for large integers.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Converts to an `i64` if the value fits without truncation.
    pub fn to_i64(self) -> Option<i64> {
        match self {
            Number::PosInt(v) => i64::try_from(v).ok(),
            Number::NegInt(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// Converts to an `i32` if the value fits without truncation.
    pub fn to_i32(self) -> Option<i32> {
        self.to_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::NegInt(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::NegInt(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn integral_conversions() {
        assert_eq!(Number::PosInt(42).to_i32(), Some(42));
        assert_eq!(Number::NegInt(-7).to_i32(), Some(-7));
        assert_eq!(Number::PosInt(u64::MAX).to_i64(), None);
        assert_eq!(Number::NegInt(i64::from(i32::MAX) + 1).to_i32(), None);
        assert_eq!(Number::Float(1.0).to_i64(), None);
    }

    #[test]
    fn lossy_float() {
        assert_eq!(Number::PosInt(5).to_f64_lossy(), 5.0);
        assert_eq!(Number::NegInt(-5).to_f64_lossy(), -5.0);
        assert_eq!(Number::Float(0.25).to_f64_lossy(), 0.25);
    }
}
