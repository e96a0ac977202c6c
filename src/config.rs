use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEBUG_HEIGHT, DEBUG_WIDTH, START_YEAR, TIC_TIMEOUT};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Invalid value `{value}` for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("Unknown argument `{0}`")]
    UnknownArgument(String),
}

/// Size of the in-memory screen used by `--debug`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugScreen {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub debug: Option<DebugScreen>,
    pub max_ticks: Option<u64>,
    pub show_obstacles: bool,
    pub seed: Option<u64>,
    pub start_year: u32,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            debug: None,
            max_ticks: None,
            show_obstacles: false,
            seed: None,
            start_year: START_YEAR,
            tick_interval: TIC_TIMEOUT,
        }
    }
}

fn parse_value<T: FromStr>(flag: &'static str, value: Option<&String>) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value.parse::<T>().map_err(|_| ConfigError::InvalidValue { flag, value: value.clone() })
}

impl GameConfig {
    /// Parse the process arguments, program name included.
    ///
    /// `--debug` takes up to three optional positional values: width,
    /// height and a tick limit.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = GameConfig::default();
        let mut args = args.iter().skip(1).peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--debug" => {
                    let mut positional = Vec::new();
                    while let Some(value) = args.next_if(|value| !value.starts_with("--")) {
                        positional.push(value);
                    }
                    let mut screen = DebugScreen { width: DEBUG_WIDTH, height: DEBUG_HEIGHT };
                    match positional.as_slice() {
                        [] => {}
                        [width, height] | [width, height, _] => {
                            screen.width = parse_value("--debug width", Some(*width))?;
                            screen.height = parse_value("--debug height", Some(*height))?;
                        }
                        [single] => return Err(ConfigError::InvalidValue { flag: "--debug", value: (*single).clone() }),
                        [.., extra] => return Err(ConfigError::UnknownArgument((*extra).clone())),
                    }
                    if let [_, _, max_ticks] = positional.as_slice() {
                        config.max_ticks = Some(parse_value("--debug max ticks", Some(*max_ticks))?);
                    }
                    config.debug = Some(screen);
                }
                "--show-obstacles" => config.show_obstacles = true,
                "--seed" => config.seed = Some(parse_value("--seed", args.next())?),
                "--max-ticks" => config.max_ticks = Some(parse_value("--max-ticks", args.next())?),
                "--year" => config.start_year = parse_value("--year", args.next())?,
                "--tick-ms" => {
                    let millis: u64 = parse_value("--tick-ms", args.next())?;
                    config.tick_interval = Duration::from_millis(millis);
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(config)
    }
}
