use std::fmt;

use log::debug;

use crate::{
    error::{ConfigError, ConfigResult},
    quaternion::Quaternion,
    vector::Vector3f,
};


/// Parsing states.
enum Parse {
    None,
    Angle,
    Axis,
    Point,
}
impl Parse {
    fn flag(&self) -> &'static str {
        match self {
            Parse::None  => "",
            Parse::Angle => "-angle",
            Parse::Axis  => "-axis",
            Parse::Point => "-point",
        }
    }

    fn arity(&self) -> usize {
        match self {
            Parse::None  => 0,
            Parse::Angle => 1,
            Parse::Axis  => 3,
            Parse::Point => 4,
        }
    }
}


/// Settings for the rotation demo.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Half of the net rotation, in degrees.
    pub angle: f32,
    pub axis: Vector3f,
    pub point: Quaternion,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> ConfigResult<Config> {
        let mut parser = Parse::None;
        let mut cfg    = Config::default();
        let mut values = Vec::with_capacity(4);

        for arg in args.into_iter() {
            let next = match arg.as_str() {
                "-angle" => Some(Parse::Angle),
                "-axis"  => Some(Parse::Axis),
                "-point" => Some(Parse::Point),
                _ => None,
            };
            if let Some(next) = next {
                cfg.apply(&parser, &values)?;
                values.clear();
                parser = next;
                continue;
            }
            if values.len() == parser.arity() {
                return Err(
                    ConfigError::UnknownFlag(arg)
                );
            }
            match arg.parse::<f32>() {
                Ok(value) => values.push(value),
                Err(_) if arg.starts_with('-') => {
                    return Err(
                        ConfigError::UnknownFlag(arg)
                    );
                }
                Err(_) => {
                    return Err(
                        ConfigError::InvalidNumber(parser.flag().to_string(), arg)
                    );
                }
            }
        }
        cfg.apply(&parser, &values)?;
        Ok(cfg)
    }

    fn apply(&mut self, parser: &Parse, values: &[f32]) -> ConfigResult<()> {
        if values.len() < parser.arity() {
            return Err(
                ConfigError::MissingValues(parser.flag().to_string(), parser.arity())
            );
        }
        match parser {
            Parse::Angle => {
                self.angle = values[0];
                debug!("angle set to {}deg", self.angle);
            }
            Parse::Axis => {
                self.axis = Vector3f::new(values[0], values[1], values[2]);
                debug!("axis set to {}", self.axis);
            }
            Parse::Point => {
                self.point = Quaternion::new(values[0], values[1], values[2], values[3]);
                debug!("point set to {}", self.point);
            }
            Parse::None => {},
        }
        Ok(())
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rRotation
            \r=============================================================
            \rAngle: {}deg
            \rAxis:  {}
            \rPoint: {}",
            self.angle,
            self.axis,
            self.point,
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            angle: 45.0,
            axis: Vector3f::new(1.0, 0.0, 0.0),
            point: Quaternion::new(0.0, 0.0, 1.0, 1.0),
        }
    }
}


#[cfg(test)]
fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn defaults_without_args() {
    assert_eq!(Config::new(Vec::new()), Ok(Config::default()));
}

#[test]
fn parses_all_flags() {
    let cfg = Config::new(args("-angle 30 -axis 0 0 -2 -point 1 2 3 4")).unwrap();

    assert_eq!(cfg.angle, 30.0);
    assert_eq!(cfg.axis, Vector3f::new(0.0, 0.0, -2.0));
    assert_eq!(cfg.point, Quaternion::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn later_flag_wins() {
    let cfg = Config::new(args("-angle 30 -angle -15.5")).unwrap();
    assert_eq!(cfg.angle, -15.5);
}

#[test]
fn rejects_unknown_flag() {
    assert_eq!(
        Config::new(args("-spin 3")),
        Err(ConfigError::UnknownFlag("-spin".to_string()))
    );
    assert_eq!(
        Config::new(args("-angle 30 -spin")),
        Err(ConfigError::UnknownFlag("-spin".to_string()))
    );
}

#[test]
fn rejects_extra_value() {
    assert_eq!(
        Config::new(args("-angle 30 40")),
        Err(ConfigError::UnknownFlag("40".to_string()))
    );
}

#[test]
fn rejects_bad_number() {
    assert_eq!(
        Config::new(args("-axis 1 x 0")),
        Err(ConfigError::InvalidNumber("-axis".to_string(), "x".to_string()))
    );
}

#[test]
fn rejects_missing_values() {
    assert_eq!(
        Config::new(args("-point 1 2")),
        Err(ConfigError::MissingValues("-point".to_string(), 4))
    );
    assert_eq!(
        Config::new(args("-angle -axis 1 0 0")),
        Err(ConfigError::MissingValues("-angle".to_string(), 1))
    );
}
