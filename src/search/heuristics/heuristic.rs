use crate::error::ConfigError;
use crate::search::heuristics::{
    EuclideanHeuristic, ManhattanHeuristic, SurvivorHeuristic, TargetCounting, ZeroHeuristic,
};
use crate::search::{GridProblem, SearchProblem};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<P: SearchProblem>: Debug {
    /// Estimate the cost of reaching a goal from `state`. The problem is
    /// borrowed mutably so that heuristics can use its caches.
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue;
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", alias = "null", help = "The zero heuristic.")]
    #[strum(to_string = "zero", serialize = "null")]
    #[serde(alias = "null")]
    Zero,
    #[clap(help = "Manhattan distance to the goal cell.")]
    Manhattan,
    #[clap(help = "Straight line distance to the goal cell.")]
    Euclidean,
    #[clap(help = "The number of survivors still waiting.")]
    TargetCounting,
    #[clap(
        help = "Distance to the nearest survivor plus a minimum spanning tree \
        over the remaining ones."
    )]
    Survivor,
}

impl HeuristicName {
    pub fn create<P: GridProblem + 'static>(&self) -> Box<dyn Heuristic<P>> {
        match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new()),
            HeuristicName::Euclidean => Box::new(EuclideanHeuristic::new()),
            HeuristicName::TargetCounting => Box::new(TargetCounting::new()),
            HeuristicName::Survivor => Box::new(SurvivorHeuristic::new()),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name)
            .map_err(|_| ConfigError::unknown_name("heuristic", name, Self::VARIANTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SingleTargetProblem;
    use crate::test_utils::*;
    use crate::world::{Located, Position};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn names_and_aliases() {
        assert_eq!(HeuristicName::from_name("null").unwrap(), HeuristicName::Zero);
        assert_eq!(HeuristicName::from_name("zero").unwrap(), HeuristicName::Zero);
        assert_eq!(
            HeuristicName::from_name("target-counting").unwrap(),
            HeuristicName::TargetCounting
        );
        assert_eq!(HeuristicName::Zero.to_string(), "zero");
        assert!(matches!(
            HeuristicName::from_name("ff"),
            Err(ConfigError::UnknownName { kind: "heuristic", .. })
        ));
    }

    #[test]
    fn registry_builds_every_heuristic() {
        let mut problem = SingleTargetProblem::new(&initial_state(OPEN_GRID_TEXT));
        let start = problem.start_state();
        assert_eq!(start.position(), Position::new(0, 0));
        let values: Vec<f64> = [
            HeuristicName::Zero,
            HeuristicName::Manhattan,
            HeuristicName::Euclidean,
            HeuristicName::TargetCounting,
            HeuristicName::Survivor,
        ]
        .iter()
        .map(|name| {
            name.create::<SingleTargetProblem>()
                .evaluate(&start, &mut problem)
                .into_inner()
        })
        .collect();
        assert_eq!(values[0], 0.);
        assert_eq!(values[1], 8.);
        assert_approx_eq!(values[2], 32f64.sqrt());
        assert_eq!(values[3], 1.);
        assert_eq!(values[4], 8.);
    }
}
