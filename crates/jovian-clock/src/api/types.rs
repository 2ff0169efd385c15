use std::fmt;

use serde::{Deserialize, Serialize};

use crate::renderer::color::Rgb;

/// The four Galilean moons, in canonical (orbital) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Moon {
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl Moon {
    /// Every moon in canonical draw and report order.
    pub const ALL: [Moon; 4] = [Moon::Io, Moon::Europa, Moon::Ganymede, Moon::Callisto];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            Moon::Io => "Io",
            Moon::Europa => "Europa",
            Moon::Ganymede => "Ganymede",
            Moon::Callisto => "Callisto",
        }
    }

    /// Position in [`Moon::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Default display color.
    pub fn color(self) -> Rgb {
        match self {
            Moon::Io => Rgb::new(0xF6, 0xE2, 0x7F),
            Moon::Europa => Rgb::new(0xE8, 0xEE, 0xF8),
            Moon::Ganymede => Rgb::new(0xD0, 0xD0, 0xD0),
            Moon::Callisto => Rgb::new(0xA0, 0xA0, 0xA0),
        }
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Jupiter's default display color.
pub const JUPITER_COLOR: Rgb = Rgb::new(0xFF, 0xD9, 0x7B);

/// Body colors used by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    #[serde(rename = "Jupiter")]
    pub jupiter: Rgb,
    #[serde(rename = "Io")]
    pub io: Rgb,
    #[serde(rename = "Europa")]
    pub europa: Rgb,
    #[serde(rename = "Ganymede")]
    pub ganymede: Rgb,
    #[serde(rename = "Callisto")]
    pub callisto: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            jupiter: JUPITER_COLOR,
            io: Moon::Io.color(),
            europa: Moon::Europa.color(),
            ganymede: Moon::Ganymede.color(),
            callisto: Moon::Callisto.color(),
        }
    }
}

impl Palette {
    pub fn moon(&self, moon: Moon) -> Rgb {
        match moon {
            Moon::Io => self.io,
            Moon::Europa => self.europa,
            Moon::Ganymede => self.ganymede,
            Moon::Callisto => self.callisto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order() {
        let names: Vec<_> = Moon::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Io", "Europa", "Ganymede", "Callisto"]);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, moon) in Moon::ALL.iter().enumerate() {
            assert_eq!(moon.index(), i);
        }
    }

    #[test]
    fn serde_uses_capitalized_names() {
        assert_eq!(serde_json::to_string(&Moon::Ganymede).unwrap(), "\"Ganymede\"");
        let m: Moon = serde_json::from_str("\"Callisto\"").unwrap();
        assert_eq!(m, Moon::Callisto);
    }

    #[test]
    fn palette_overrides_single_body() {
        let p: Palette = serde_json::from_str(r##"{"Europa":"#112233"}"##).unwrap();
        assert_eq!(p.moon(Moon::Europa), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(p.moon(Moon::Io), Moon::Io.color());
        assert_eq!(p.jupiter, JUPITER_COLOR);
    }
}
