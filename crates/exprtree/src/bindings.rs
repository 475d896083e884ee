//! Variable bindings for numeric evaluation

use indexmap::IndexMap;

/// Values for the variables of an expression.
///
/// Bindings keep insertion order, so iterating them is deterministic.
/// Defining a name again replaces its value in place.
///
/// # Example
///
/// ```
/// use exprtree::Bindings;
///
/// let mut bindings = Bindings::new();
/// bindings.define("x", 2.0);
/// bindings.define("y", -1.0);
///
/// assert_eq!(bindings.get("x"), Some(2.0));
/// assert_eq!(bindings.get("z"), None);
///
/// bindings.define("x", 5.0);
/// assert_eq!(bindings.get("x"), Some(5.0));
/// assert_eq!(bindings.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bindings {
    values: IndexMap<String, f64>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Remove a binding.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.shift_remove(name)
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Check if a name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Bindings {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.define(name, value);
        }
    }
}
