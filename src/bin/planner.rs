use clap::Parser;
use rescue_planner::{
    agents::SearchAgent,
    config::{DisplayMode, MissionConfig, MissionSettings, Verbosity},
    search::{HeuristicName, ProblemName, SearchEngineName},
    world::{MissionDisplay, NullDisplay, RescueMission, TextDisplay},
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Plan and run a rescue mission.
struct Cli {
    #[arg(help = "The layout file, or the name of a layout under the layouts directory")]
    layout: Option<String>,
    #[arg(
        help = "A TOML mission file, command line flags override its settings",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "The directory searched for layouts given by name",
        long = "layouts",
        id = "LAYOUTS"
    )]
    layouts_dir: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search problem to solve [default: simple-survivor]",
        short = 'p',
        long = "problem",
        id = "PROBLEM"
    )]
    problem: Option<ProblemName>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: dfs]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic, only used by astar [default: zero]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(
        value_enum,
        help = "How to show the mission [default: text]",
        short = 'd',
        long = "display",
        id = "DISPLAY"
    )]
    display: Option<DisplayMode>,
    #[arg(help = "Only log the outcome, same as --display quiet", short = 'q', long = "quiet")]
    quiet: bool,
    #[arg(
        help = "Delay between frames of the text display, e.g. 100ms",
        long = "frame-time",
        id = "FRAME_TIME"
    )]
    frame_time: Option<String>,
    #[arg(
        help = "Discard the plan if searching takes longer than this, e.g. 30s",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<String>,
    #[arg(
        help = "Write the mission record to this JSON file",
        short = 'o',
        long = "record",
        id = "RECORD"
    )]
    record: Option<PathBuf>,
    #[arg(help = "Stop the mission after this many moves", long = "move-limit")]
    move_limit: Option<usize>,
}

impl Cli {
    fn overrides(&self) -> MissionConfig {
        let display = if self.quiet {
            Some(DisplayMode::Quiet)
        } else {
            self.display
        };
        MissionConfig {
            layout: self.layout.clone(),
            layouts_dir: self.layouts_dir.clone(),
            problem: self.problem,
            engine: self.engine,
            heuristic: self.heuristic,
            verbosity: self.verbosity,
            colour: self.colour.then_some(true),
            display,
            frame_time: self.frame_time.clone(),
            time_limit: self.time_limit.clone(),
            record: self.record.clone(),
            move_limit: self.move_limit,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = settings.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(settings.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(cli: &Cli) -> Result<MissionSettings, Box<dyn Error>> {
    let file_config = match &cli.config {
        Some(path) => MissionConfig::from_path(path)?,
        None => MissionConfig::default(),
    };
    Ok(file_config.merge(cli.overrides()).resolve()?)
}

/// Runs the mission and reports whether every survivor was rescued.
fn run(settings: MissionSettings) -> Result<bool, Box<dyn Error>> {
    let mut agent = SearchAgent::new(settings.problem, settings.engine, settings.heuristic)
        .with_time_limit(settings.time_limit);
    let mut display: Box<dyn MissionDisplay> = match settings.display {
        DisplayMode::Quiet => Box::new(NullDisplay),
        DisplayMode::Text => Box::new(TextDisplay::new(settings.frame_time)),
    };

    let mut mission = RescueMission::new(settings.layout);
    if let Some(limit) = settings.move_limit {
        mission = mission.with_move_limit(limit);
    }
    let outcome = mission.run(&mut agent, display.as_mut());

    println!(
        "Mission {}: cost {}, rescued {}, remaining {}, moves {}",
        if outcome.won { "accomplished" } else { "failed" },
        outcome.cumulative_cost,
        outcome.rescued,
        outcome.remaining,
        outcome.moves.len()
    );
    if let Some(failure) = &outcome.failure {
        println!("Failure: {}", failure);
    }

    if let Some(path) = settings.record {
        mission.record().write_json(&path)?;
        info!(record = %path.display(), "mission recorded");
    }
    Ok(outcome.won)
}
