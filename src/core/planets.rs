use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

/// Planets a game can be played on, in the fixed order random selection
/// indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Earth,
    Moon,
    Mars,
    Jupiter,
}

/// Plot color assigned to every trajectory fired on a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceColor {
    Green,
    Gray,
    Red,
    Black,
}

impl Planet {
    pub const ALL: [Planet; 4] = [Planet::Earth, Planet::Moon, Planet::Mars, Planet::Jupiter];

    pub fn gravity_mps2(self) -> f64 {
        match self {
            Planet::Earth => 9.8,
            Planet::Moon => 1.6,
            Planet::Mars => 3.7,
            Planet::Jupiter => 24.8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Planet::Earth => "Earth",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
        }
    }

    pub fn trace_color(self) -> TraceColor {
        match self {
            Planet::Earth => TraceColor::Green,
            Planet::Moon => TraceColor::Gray,
            Planet::Mars => TraceColor::Red,
            Planet::Jupiter => TraceColor::Black,
        }
    }

    pub fn from_index(index: usize) -> Option<Planet> {
        Self::ALL.get(index).copied()
    }
}

impl TraceColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TraceColor::Green => (0, 128, 0),
            TraceColor::Gray => (128, 128, 128),
            TraceColor::Red => (255, 0, 0),
            TraceColor::Black => (0, 0, 0),
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|planet| planet.name() == name)
            .ok_or_else(|| GameError::UnknownPlanet {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{Planet, TraceColor};
    use crate::core::error::GameError;

    #[test]
    fn gravity_table_matches_fixed_values() {
        let table: Vec<(&str, f64)> = Planet::ALL
            .iter()
            .map(|p| (p.name(), p.gravity_mps2()))
            .collect();
        assert_eq!(
            table,
            vec![("Earth", 9.8), ("Moon", 1.6), ("Mars", 3.7), ("Jupiter", 24.8)]
        );
    }

    #[test]
    fn colors_follow_planet_identity() {
        assert_eq!(Planet::Earth.trace_color(), TraceColor::Green);
        assert_eq!(Planet::Moon.trace_color(), TraceColor::Gray);
        assert_eq!(Planet::Mars.trace_color(), TraceColor::Red);
        assert_eq!(Planet::Jupiter.trace_color(), TraceColor::Black);
    }

    #[test]
    fn parses_known_names_and_rejects_others() {
        assert_eq!("Mars".parse::<Planet>().unwrap(), Planet::Mars);

        let err = "Pluto".parse::<Planet>().expect_err("Pluto is not in the table");
        assert!(matches!(err, GameError::UnknownPlanet { ref name } if name == "Pluto"));
        assert!("earth".parse::<Planet>().is_err());
    }

    #[test]
    fn index_lookup_is_bounded() {
        assert_eq!(Planet::from_index(0), Some(Planet::Earth));
        assert_eq!(Planet::from_index(3), Some(Planet::Jupiter));
        assert_eq!(Planet::from_index(4), None);
    }
}
