// SPDX-License-Identifier: MIT

//! Expression nodes
//!
//! This module provides:
//! - `Exp` - the node contract every combinator and leaf implements
//! - `And`, `Or`, `Not` - the structural combinators
//! - `Leaf` - adapts a closure into a caller-defined leaf
//!
//! Nodes are immutable once built and keep no evaluation state, so one tree
//! can be evaluated any number of times, from any number of threads.

mod conjunction;
mod disjunction;
mod negation;

pub use conjunction::{and, And};
pub use disjunction::{or, Or};
pub use negation::{not, Not};

use crate::params::Params;
use std::sync::Arc;

/// A node of an expression tree.
///
/// Implementations must be a pure function of their own structure and the
/// values returned by `params`: combinators skip children once the result is
/// known, so a leaf cannot count on being evaluated.
pub trait Exp: Send + Sync {
    fn eval(&self, params: &dyn Params) -> bool;
}

impl<E: Exp + ?Sized> Exp for &E {
    fn eval(&self, params: &dyn Params) -> bool {
        (**self).eval(params)
    }
}

impl<E: Exp + ?Sized> Exp for Box<E> {
    fn eval(&self, params: &dyn Params) -> bool {
        (**self).eval(params)
    }
}

impl<E: Exp + ?Sized> Exp for Arc<E> {
    fn eval(&self, params: &dyn Params) -> bool {
        (**self).eval(params)
    }
}

/// Constant node
impl Exp for bool {
    fn eval(&self, _params: &dyn Params) -> bool {
        *self
    }
}

/// A leaf node backed by a closure over the parameter source
#[derive(Clone, Copy)]
pub struct Leaf<F>(F);

impl<F> Exp for Leaf<F>
where
    F: Fn(&dyn Params) -> bool + Send + Sync,
{
    fn eval(&self, params: &dyn Params) -> bool {
        (self.0)(params)
    }
}

/// Wrap a closure as a leaf node.
pub fn leaf<F>(f: F) -> Leaf<F>
where
    F: Fn(&dyn Params) -> bool + Send + Sync,
{
    Leaf(f)
}

/// Conjunction of any number of nodes, evaluated left to right.
///
/// Each argument is boxed, so nodes of different types can be mixed.
/// `and![]` is always true.
#[macro_export]
macro_rules! and {
    ($($node:expr),* $(,)?) => {
        $crate::And::new(::std::vec![
            $(::std::boxed::Box::new($node) as ::std::boxed::Box<dyn $crate::Exp>),*
        ])
    };
}

/// Disjunction of any number of nodes, evaluated left to right.
///
/// `or![]` is always false.
#[macro_export]
macro_rules! or {
    ($($node:expr),* $(,)?) => {
        $crate::Or::new(::std::vec![
            $(::std::boxed::Box::new($node) as ::std::boxed::Box<dyn $crate::Exp>),*
        ])
    };
}
