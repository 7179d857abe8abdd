//! WML-style configuration trees.
//!
//! A configuration is a tree of nodes. Each node has string attributes and
//! an ordered list of tagged children:
//!
//! ```text
//! [mask]
//!     name=grass-n
//!     image=hex-n.png
//!     shift=0,-36
//! [/mask]
//! ```
//!
//! Lookups follow WML conventions: a missing attribute reads as the empty
//! string, and a repeated attribute keeps its last value.

use crate::util::ExploderResult;
use indexmap::IndexMap;

mod parse;

pub use parse::preprocess;

/// One node of a configuration tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    attributes: IndexMap<String, String>,
    children: Vec<(String, Config)>,
}

impl Config {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocesses and parses configuration text into a root node.
    pub fn parse(text: &str) -> ExploderResult<Self> {
        parse::parse_document(&preprocess(text))
    }

    /// Returns the value of `key`, or `""` when it is not set.
    pub fn get(&self, key: &str) -> &str {
        self.attr(key).unwrap_or("")
    }

    /// Returns the value of `key` if it is set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Iterates attributes in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Appends an empty child with the given tag and returns it.
    pub fn add_child(&mut self, tag: impl Into<String>) -> &mut Config {
        self.children.push((tag.into(), Config::new()));
        let (_, child) = self
            .children
            .last_mut()
            .expect("children is not empty after push");
        child
    }

    /// Iterates the children tagged `tag` in document order.
    pub fn children<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Config> + 'a {
        self.children
            .iter()
            .filter(move |(child_tag, _)| child_tag == tag)
            .map(|(_, child)| child)
    }

    /// Returns the number of children tagged `tag`.
    pub fn child_count(&self, tag: &str) -> usize {
        self.children(tag).count()
    }

    pub(crate) fn push_child(&mut self, tag: String, child: Config) {
        self.children.push((tag, child));
    }
}
