//! A plan is the sequence of action names leading from the initial state to a
//! goal state. This module provides the [`Plan`] struct, which represents a
//! plan.

use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<String>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<String>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl<S: Into<String>> FromIterator<S> for Plan {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Plan {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
