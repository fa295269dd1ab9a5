use clap::Parser;
use rescue_planner::{
    search::{
        Direction, MultiTargetProblem, MultiTargetState, Plan, ProblemName, SearchProblem,
        SingleTargetProblem, INFEASIBLE_COST,
    },
    world::{Located, RescueLayout, RescueState},
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

#[derive(Parser)]
#[command(version)]
/// Replay a plan file against a layout.
struct Cli {
    #[arg(help = "The layout file")]
    layout: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        value_enum,
        help = "The search problem the plan solves",
        short = 'p',
        long = "problem",
        id = "PROBLEM",
        default_value_t = ProblemName::SimpleSurvivor
    )]
    problem: ProblemName,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match validate(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn validate(cli: &Cli) -> Result<bool, Box<dyn Error>> {
    let layout = RescueLayout::from_path(&cli.layout)?;
    let state = RescueState::new(Rc::new(layout));
    let plan = Plan::from_path(&cli.plan)?;

    let valid = match cli.problem {
        ProblemName::SimpleSurvivor => {
            let mut problem = SingleTargetProblem::new(&state);
            report(&mut problem, &plan, |position, action| position.step(action))
        }
        ProblemName::MultiSurvivor => {
            let mut problem = MultiTargetProblem::new(&state);
            report(&mut problem, &plan, |state: &MultiTargetState, action| {
                MultiTargetState::new(state.position().step(action), state.targets().clone())
            })
        }
    };
    Ok(valid)
}

/// Prints the cost of `plan` and whether it ends in a goal state.
fn report<P: SearchProblem>(
    problem: &mut P,
    plan: &Plan,
    step: impl Fn(&P::State, Direction) -> P::State,
) -> bool {
    let cost = problem.cost_of_actions(plan);
    if cost == INFEASIBLE_COST {
        println!("Plan is infeasible: it walks into a wall");
        return false;
    }

    let end = plan
        .iter()
        .fold(problem.start_state(), |state, &action| step(&state, action));
    let reaches_goal = problem.is_goal_state(&end);
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", cost);
    if reaches_goal {
        println!("Plan is valid");
    } else {
        println!("Plan does not reach the goal, final state is: {:?}", end);
    }
    reaches_goal
}
