//! Named variables for bare-identifier tags.

use rustc_hash::FxHashMap;

/// Table mapping a tag name to a pre-resolved escape sequence.
///
/// `<name>text</name>` writes the value of `name` on open and replays the
/// enclosing state on close. [`Variables::default`] carries the two built-in
/// entries, `green` and `cyan`; [`Variables::empty`] has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variables {
    map: FxHashMap<String, String>,
}

impl Variables {
    pub fn empty() -> Self {
        Variables {
            map: FxHashMap::default(),
        }
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(name.into(), value.into())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Variables {
    fn default() -> Self {
        let mut vars = Variables::empty();
        vars.insert("green", "\x1b[38;2;0;150;75m");
        vars.insert("cyan", "\x1b[38;2;0;150;150m");
        vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::empty();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

#[cfg(test)]
mod tests;
