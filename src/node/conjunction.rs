// SPDX-License-Identifier: MIT

use super::Exp;
use crate::params::Params;

/// True when every child is true. With no children it is true.
pub struct And {
    children: Vec<Box<dyn Exp>>,
}

impl And {
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

impl Exp for And {
    /// Stops at the first false child; later children are not evaluated.
    fn eval(&self, params: &dyn Params) -> bool {
        self.children.iter().all(|child| child.eval(params))
    }
}

/// Conjunction of `children`; see also the `and!` macro.
pub fn and<I>(children: I) -> And
where
    I: IntoIterator<Item = Box<dyn Exp>>,
{
    And::new(children)
}
