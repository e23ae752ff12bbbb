use std::collections::HashMap;

/// Values for the variables of an expression, keyed by name.
///
/// A table may be partial; evaluation then fails on the first variable it
/// cannot resolve.
///
/// ## Example
/// ```
/// use trigcalc::interpreter::evaluator::bindings::VariableBindings;
///
/// let bindings: VariableBindings = [("x", 3.0), ("y", 5.0)].into_iter().collect();
///
/// assert_eq!(bindings.get("x"), Some(3.0));
/// assert_eq!(bindings.get("z"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableBindings {
    values: HashMap<String, f64>,
}

impl VariableBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous value if there was
    /// one.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Binds every name in `names` that is still unbound to `value`.
    pub fn fill_missing(&mut self, names: &[String], value: f64) {
        for name in names {
            self.values.entry(name.clone()).or_insert(value);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for VariableBindings {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut bindings = Self::new();
        bindings.extend(iter);
        bindings
    }
}

impl<S: Into<String>> Extend<(S, f64)> for VariableBindings {
    fn extend<T: IntoIterator<Item = (S, f64)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
