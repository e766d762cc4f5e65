// SPDX-License-Identifier: MIT

use super::Exp;
use crate::params::Params;

/// Negation of a single child
pub struct Not {
    child: Box<dyn Exp>,
}

impl Not {
    pub fn new(child: impl Exp + 'static) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl Exp for Not {
    fn eval(&self, params: &dyn Params) -> bool {
        !self.child.eval(params)
    }
}

/// Negate `child`
pub fn not(child: impl Exp + 'static) -> Not {
    Not::new(child)
}
