/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// A mutable staging object that assembles an immutable shape.
///
/// Builders start with every field unset, accumulate values through fluent
/// setters, and produce the finished shape with [`build`](ShapeBuilder::build).
/// `build` is pure: the same builder state always produces an equal shape, and
/// building never fails.
pub trait ShapeBuilder: Default {
    /// The shape this builder produces.
    type Output;

    /// Consumes the builder and produces the immutable shape.
    fn build(self) -> Self::Output;
}

/// Builds a shape through a configurator callback.
///
/// This is the single generic helper behind every `*_with` convenience setter
/// in generated code: default-construct the sub-shape's builder, let the
/// caller configure it, and finalize.
///
/// # Example
///
/// ```ignore
/// let storage: PersistentStorage = configured(|b| b.size_in_gib(16));
/// ```
pub fn configured<B: ShapeBuilder>(config: impl FnOnce(B) -> B) -> B::Output {
    config(B::default()).build()
}
