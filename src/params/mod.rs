// SPDX-License-Identifier: MIT

//! Parameter sources consulted by expression nodes
//!
//! A parameter source is a total lookup from key to value: unknown keys map
//! to the empty string, so a missing key and an empty value look the same.
//! Implementations must be side-effect free; the same key is expected to
//! yield the same value for the duration of an evaluation.

mod map;

pub use map::Map;

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

/// String-keyed lookup used by expression nodes
///
/// Stored values are returned borrowed; sources that compute a value per
/// lookup return it owned.
pub trait Params {
    /// Returns the value stored under `key`, or `""` when there is none.
    fn get(&self, key: &str) -> Cow<'_, str>;
}

impl<P: Params + ?Sized> Params for &P {
    fn get(&self, key: &str) -> Cow<'_, str> {
        (**self).get(key)
    }
}

impl<P: Params + ?Sized> Params for Box<P> {
    fn get(&self, key: &str) -> Cow<'_, str> {
        (**self).get(key)
    }
}

impl<P: Params + ?Sized> Params for Arc<P> {
    fn get(&self, key: &str) -> Cow<'_, str> {
        (**self).get(key)
    }
}

impl<S: BuildHasher> Params for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Cow<'_, str> {
        HashMap::get(self, key).map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

impl Params for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Cow<'_, str> {
        BTreeMap::get(self, key).map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

/// Build a [`Map`] from `key => value` pairs.
///
/// ```
/// use exptree_rs::{params, Params};
///
/// let p = params! { "role" => "admin", "region" => "eu" };
/// assert_eq!(p.get("role"), "admin");
/// assert_eq!(p.get("missing"), "");
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Map::from([$(($key, $value)),+])
    };
}
