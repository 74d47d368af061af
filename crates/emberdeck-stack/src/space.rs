#![forbid(unsafe_code)]

//! Conversion between stack-local and global coordinates.
//!
//! Each stack has its own local frame; in-flight cards live in the shared
//! global frame. The board only ever converts through [`CoordinateSpace`], so
//! hosts with their own scene graph can plug it in directly.

use emberdeck_core::geometry::{Affine2, Point};

use crate::stack::StackId;

/// Maps points between a stack's local frame and the global frame.
pub trait CoordinateSpace {
    fn to_global(&self, stack: StackId, local: Point) -> Point;
    fn to_local(&self, stack: StackId, global: Point) -> Point;
}

/// One [`Affine2`] per stack; stacks without a transform use the identity.
#[derive(Debug, Clone, Default)]
pub struct StackTransforms {
    transforms: Vec<Affine2>,
}

impl StackTransforms {
    /// Every stack starts at the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Local-to-global transform for `stack`.
    pub fn get(&self, stack: StackId) -> Affine2 {
        self.transforms
            .get(stack.index())
            .copied()
            .unwrap_or(Affine2::IDENTITY)
    }

    /// Replace a stack's local-to-global transform.
    pub fn set(&mut self, stack: StackId, transform: Affine2) {
        let index = stack.index();
        if index >= self.transforms.len() {
            self.transforms.resize(index + 1, Affine2::IDENTITY);
        }
        self.transforms[index] = transform;
    }

    /// Place a stack's origin at `origin` with no scaling.
    pub fn set_origin(&mut self, stack: StackId, origin: Point) {
        self.set(stack, Affine2::translation(origin.x, origin.y));
    }
}

impl CoordinateSpace for StackTransforms {
    fn to_global(&self, stack: StackId, local: Point) -> Point {
        self.get(stack).apply(local)
    }

    /// A singular transform has no inverse; the point passes through unchanged.
    fn to_local(&self, stack: StackId, global: Point) -> Point {
        match self.get(stack).inverse() {
            Some(inverse) => inverse.apply(global),
            None => {
                emberdeck_core::warn!(
                    stack = stack.index(),
                    "singular stack transform, treating as identity"
                );
                global
            }
        }
    }
}
