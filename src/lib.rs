// SPDX-License-Identifier: MIT

//! Boolean expression trees evaluated against a key-value parameter source.
//!
//! Trees are built from the [`And`], [`Or`] and [`Not`] combinators over
//! caller-defined leaves implementing [`Exp`], then evaluated against any
//! [`Params`] implementation:
//!
//! ```
//! use exptree_rs::{and, leaf, not, params, Exp, Params};
//!
//! let admin = leaf(|p: &dyn Params| p.get("role") == "admin");
//! let suspended = leaf(|p: &dyn Params| p.get("suspended") == "true");
//! let rule = and![admin, not(suspended)];
//!
//! assert!(rule.eval(&params! { "role" => "admin" }));
//! assert!(!rule.eval(&params! { "role" => "admin", "suspended" => "true" }));
//! ```

pub mod error;
pub mod node;
pub mod params;

pub use error::ParamsError;
pub use node::{and, leaf, not, or, And, Exp, Leaf, Not, Or};
pub use params::{Map, Params};
