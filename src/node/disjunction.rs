// SPDX-License-Identifier: MIT

use super::Exp;
use crate::params::Params;

/// True when any child is true. With no children it is false.
pub struct Or {
    children: Vec<Box<dyn Exp>>,
}

impl Or {
    /// Children are evaluated in the order given here
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Exp>>,
    {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

impl Exp for Or {
    /// Stops at the first true child; later children are not evaluated.
    fn eval(&self, params: &dyn Params) -> bool {
        self.children.iter().any(|child| child.eval(params))
    }
}

/// Disjunction of `children`; see also the `or!` macro.
pub fn or<I>(children: I) -> Or
where
    I: IntoIterator<Item = Box<dyn Exp>>,
{
    Or::new(children)
}
