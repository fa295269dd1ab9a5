//! A plan is the sequence of moves a search hands back to the world model.
//! This module provides the [`Plan`] struct, which represents a plan.

use crate::error::PlanParseError;
use crate::parsers::parse_plan;
use crate::search::Direction;
use itertools::Itertools;
use std::fmt::{self, Display};
use std::fs;
use std::ops::Deref;
use std::path::Path;

/// An ordered list of moves. The empty plan means either that the start
/// already satisfies the goal or that no plan was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Direction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanParseError> {
        let contents = fs::read_to_string(path).map_err(|source| PlanParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    /// Parses one direction name per token, e.g. the output of
    /// [`Plan::to_string`]. Any other token is an error.
    pub fn from_text(text: &str) -> Result<Self, PlanParseError> {
        match parse_plan(text) {
            Ok((remainder, plan)) if remainder.fragment().is_empty() => Ok(plan),
            Ok((remainder, _)) => Err(PlanParseError::Unexpected {
                line: remainder.location_line(),
                column: remainder.get_utf8_column(),
                found: remainder
                    .fragment()
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_owned(),
            }),
            Err(_) => Err(PlanParseError::Unexpected {
                line: 1,
                column: 1,
                found: text.split_whitespace().next().unwrap_or_default().to_owned(),
            }),
        }
    }

    pub fn steps(&self) -> &[Direction] {
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

impl IntoIterator for Plan {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl From<Vec<Direction>> for Plan {
    fn from(steps: Vec<Direction>) -> Self {
        Self::new(steps)
    }
}
