//! Mission settings, read from a TOML file and overridden by command line
//! flags.

use crate::error::ConfigError;
use crate::search::{HeuristicName, ProblemName, SearchEngineName};
use crate::world::RescueLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Directory searched for layouts given by name.
pub const DEFAULT_LAYOUTS_DIR: &str = "layouts";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Only log the outcome.
    Quiet,
    /// Print the map after every move.
    Text,
}

/// Every setting of a mission. Missing values fall back to defaults in
/// [`MissionConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionConfig {
    /// A layout file, or the name of a layout under `layouts_dir`.
    pub layout: Option<String>,
    pub layouts_dir: Option<PathBuf>,
    pub problem: Option<ProblemName>,
    pub engine: Option<SearchEngineName>,
    pub heuristic: Option<HeuristicName>,
    pub verbosity: Option<Verbosity>,
    pub colour: Option<bool>,
    pub display: Option<DisplayMode>,
    /// Delay between frames of the text display, e.g. `"100ms"`.
    pub frame_time: Option<String>,
    /// Planning budget, e.g. `"30s"`.
    pub time_limit: Option<String>,
    /// Where to write the mission record.
    pub record: Option<PathBuf>,
    pub move_limit: Option<usize>,
}

/// A fully resolved [`MissionConfig`].
#[derive(Debug, Clone)]
pub struct MissionSettings {
    pub layout: Rc<RescueLayout>,
    pub problem: ProblemName,
    pub engine: SearchEngineName,
    pub heuristic: HeuristicName,
    pub verbosity: Verbosity,
    pub colour: bool,
    pub display: DisplayMode,
    pub frame_time: Duration,
    pub time_limit: Option<Duration>,
    pub record: Option<PathBuf>,
    pub move_limit: Option<usize>,
}

impl MissionConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Settings from `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: MissionConfig) -> MissionConfig {
        MissionConfig {
            layout: overrides.layout.or(self.layout),
            layouts_dir: overrides.layouts_dir.or(self.layouts_dir),
            problem: overrides.problem.or(self.problem),
            engine: overrides.engine.or(self.engine),
            heuristic: overrides.heuristic.or(self.heuristic),
            verbosity: overrides.verbosity.or(self.verbosity),
            colour: overrides.colour.or(self.colour),
            display: overrides.display.or(self.display),
            frame_time: overrides.frame_time.or(self.frame_time),
            time_limit: overrides.time_limit.or(self.time_limit),
            record: overrides.record.or(self.record),
            move_limit: overrides.move_limit.or(self.move_limit),
        }
    }

    /// Loads the layout, parses durations and fills in defaults.
    pub fn resolve(self) -> Result<MissionSettings, ConfigError> {
        let layout_name = self.layout.ok_or(ConfigError::Missing("layout"))?;
        let layouts_dir = self
            .layouts_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LAYOUTS_DIR));
        let layout = load_layout(&layout_name, &layouts_dir)?;

        let frame_time = self
            .frame_time
            .map(|value| parse_duration("frame_time", &value))
            .transpose()?
            .unwrap_or(Duration::ZERO);
        let time_limit = self
            .time_limit
            .map(|value| parse_duration("time_limit", &value))
            .transpose()?;

        Ok(MissionSettings {
            layout: Rc::new(layout),
            problem: self.problem.unwrap_or(ProblemName::SimpleSurvivor),
            engine: self.engine.unwrap_or(SearchEngineName::Dfs),
            heuristic: self.heuristic.unwrap_or(HeuristicName::Zero),
            verbosity: self.verbosity.unwrap_or(Verbosity::Normal),
            colour: self.colour.unwrap_or(false),
            display: self.display.unwrap_or(DisplayMode::Text),
            frame_time,
            time_limit,
            record: self.record,
            move_limit: self.move_limit,
        })
    }
}

/// `name` is tried as a path first and then looked up under `root`.
fn load_layout(name: &str, root: &Path) -> Result<RescueLayout, ConfigError> {
    let path = Path::new(name);
    let layout = if path.is_file() {
        RescueLayout::from_path(path)?
    } else {
        RescueLayout::find(root, name)?
    };
    Ok(layout)
}

fn parse_duration(setting: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|source| ConfigError::Duration {
        setting,
        value: value.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn reads_a_mission_file() {
        let config = MissionConfig::from_text(
            r#"
            layout = "tinyHouse"
            problem = "multi-survivor"
            engine = "a-star-search"
            heuristic = "survivor"
            time_limit = "2s"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.as_deref(), Some("tinyHouse"));
        assert_eq!(config.problem, Some(ProblemName::MultiSurvivor));
        assert_eq!(config.engine, Some(SearchEngineName::Astar));
        assert_eq!(config.heuristic, Some(HeuristicName::Survivor));
        assert_eq!(config.display, None);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let error = MissionConfig::from_text(r#"engine = "gbfs""#).unwrap_err();
        assert!(matches!(error, ConfigError::Toml(_)));
        let error = MissionConfig::from_text(r#"speed = 3"#).unwrap_err();
        assert!(matches!(error, ConfigError::Toml(_)));
    }

    #[test]
    fn overrides_win() {
        let file = MissionConfig {
            layout: Some("tinyHouse".to_owned()),
            engine: Some(SearchEngineName::Bfs),
            colour: Some(true),
            ..Default::default()
        };
        let flags = MissionConfig {
            engine: Some(SearchEngineName::Ucs),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.engine, Some(SearchEngineName::Ucs));
        assert_eq!(merged.layout.as_deref(), Some("tinyHouse"));
        assert_eq!(merged.colour, Some(true));
    }

    #[test]
    fn resolves_defaults_and_layout_by_name() {
        let config = MissionConfig {
            layout: Some("tinyHouse".to_owned()),
            layouts_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("layouts")),
            frame_time: Some("50ms".to_owned()),
            ..Default::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.problem, ProblemName::SimpleSurvivor);
        assert_eq!(settings.engine, SearchEngineName::Dfs);
        assert_eq!(settings.heuristic, HeuristicName::Zero);
        assert_eq!(settings.display, DisplayMode::Text);
        assert_eq!(settings.frame_time, Duration::from_millis(50));
        assert_eq!(settings.time_limit, None);
        assert_eq!(settings.layout.total_survivors(), 1);
    }

    #[test]
    fn resolves_layout_by_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIRE_CORRIDOR_TEXT.as_bytes()).unwrap();
        let config = MissionConfig {
            layout: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.layout.width(), 7);
    }

    #[test]
    fn reports_bad_settings() {
        assert!(matches!(
            MissionConfig::default().resolve(),
            Err(ConfigError::Missing("layout"))
        ));

        let dir = tempfile::tempdir().unwrap();
        let config = MissionConfig {
            layout: Some("nowhere".to_owned()),
            layouts_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::Layout(LayoutError::NotFound { .. }))
        ));

        let config = MissionConfig {
            layout: Some("tinyHouse".to_owned()),
            layouts_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("layouts")),
            time_limit: Some("soon".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::Duration {
                setting: "time_limit",
                ..
            })
        ));
    }

    #[test]
    fn verbosity_maps_to_tracing_levels() {
        assert_eq!(tracing::Level::from(Verbosity::Silent), tracing::Level::ERROR);
        assert_eq!(tracing::Level::from(Verbosity::Debug), tracing::Level::TRACE);
    }
}
