/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Opaque wrapper for an enum wire value this version of the model does not
/// recognize.
///
/// Services add enum values over time; an older client must carry the raw
/// string through untouched rather than fail. Generated enums hold one of
/// these in their `Unknown` variant, and their `as_str` accessor returns the
/// original wire value so equality and re-serialization stay
/// forward-compatible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownVariantValue(String);

impl UnknownVariantValue {
    /// Wraps a raw wire value. Only generated `From<&str>` conversions should
    /// need to call this.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw wire value, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::UnknownVariantValue;

    #[test]
    fn raw_value_is_preserved() {
        let value = UnknownVariantValue::new("NEW_SERVER_SIDE_VALUE");
        assert_eq!(value.as_str(), "NEW_SERVER_SIDE_VALUE");
        assert_eq!(value, UnknownVariantValue::new("NEW_SERVER_SIDE_VALUE"));
    }
}
