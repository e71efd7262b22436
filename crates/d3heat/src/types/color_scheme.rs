//! Supported d3 color schemes as an enumerated type.
//!
//! Each scheme carries its category (ordinal palette vs sequential
//! interpolator), which the grid template needs to pick the right d3 scale
//! constructor. Keeping this on the type removes the stringly allow-list
//! lookup the category check would otherwise need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of a color scheme: discrete palette or continuous interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    Ordinal,
    Sequential,
}

impl SchemeKind {
    /// The d3 scale constructor name the template should use.
    pub fn as_d3_scale(self) -> &'static str {
        match self {
            Self::Ordinal => "scaleOrdinal",
            Self::Sequential => "scaleSequential",
        }
    }
}

/// A named d3-scale-chromatic color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    // Ordinal (categorical) palettes
    SchemeCategory10,
    SchemeAccent,
    SchemeDark2,
    SchemePaired,
    SchemePastel1,
    SchemePastel2,
    SchemeSet1,
    SchemeSet2,
    SchemeSet3,
    SchemeTableau10,
    // Diverging interpolators
    InterpolatePRGn,
    InterpolatePiYG,
    InterpolatePuOr,
    InterpolateRdBu,
    InterpolateRdGy,
    InterpolateRdYlBu,
    InterpolateRdYlGn,
    InterpolateSpectral,
    // Single-hue interpolators
    InterpolateBlues,
    InterpolateGreens,
    InterpolateGreys,
    InterpolateOranges,
    InterpolatePurples,
    InterpolateReds,
    // Multi-hue sequential interpolators
    InterpolateTurbo,
    InterpolateViridis,
    InterpolateInferno,
    InterpolateMagma,
    InterpolatePlasma,
    InterpolateCividis,
    InterpolateWarm,
    InterpolateCool,
    InterpolateCubehelixDefault,
    InterpolateBuGn,
    InterpolateBuPu,
    InterpolateGnBu,
    InterpolateOrRd,
    InterpolatePuBuGn,
    InterpolatePuBu,
    InterpolatePuRd,
    InterpolateRdPu,
    InterpolateYlGnBu,
    InterpolateYlGn,
    InterpolateYlOrBr,
    InterpolateYlOrRd,
    // Cyclic interpolators
    InterpolateRainbow,
    InterpolateSinebow,
}

impl ColorScheme {
    /// All supported schemes, for error messages and enumeration.
    pub const ALL: &'static [ColorScheme] = &[
        Self::SchemeCategory10,
        Self::SchemeAccent,
        Self::SchemeDark2,
        Self::SchemePaired,
        Self::SchemePastel1,
        Self::SchemePastel2,
        Self::SchemeSet1,
        Self::SchemeSet2,
        Self::SchemeSet3,
        Self::SchemeTableau10,
        Self::InterpolatePRGn,
        Self::InterpolatePiYG,
        Self::InterpolatePuOr,
        Self::InterpolateRdBu,
        Self::InterpolateRdGy,
        Self::InterpolateRdYlBu,
        Self::InterpolateRdYlGn,
        Self::InterpolateSpectral,
        Self::InterpolateBlues,
        Self::InterpolateGreens,
        Self::InterpolateGreys,
        Self::InterpolateOranges,
        Self::InterpolatePurples,
        Self::InterpolateReds,
        Self::InterpolateTurbo,
        Self::InterpolateViridis,
        Self::InterpolateInferno,
        Self::InterpolateMagma,
        Self::InterpolatePlasma,
        Self::InterpolateCividis,
        Self::InterpolateWarm,
        Self::InterpolateCool,
        Self::InterpolateCubehelixDefault,
        Self::InterpolateBuGn,
        Self::InterpolateBuPu,
        Self::InterpolateGnBu,
        Self::InterpolateOrRd,
        Self::InterpolatePuBuGn,
        Self::InterpolatePuBu,
        Self::InterpolatePuRd,
        Self::InterpolateRdPu,
        Self::InterpolateYlGnBu,
        Self::InterpolateYlGn,
        Self::InterpolateYlOrBr,
        Self::InterpolateYlOrRd,
        Self::InterpolateRainbow,
        Self::InterpolateSinebow,
    ];

    /// Scheme category. Ordinal for the `scheme*` palettes, sequential for
    /// every interpolator.
    pub fn kind(self) -> SchemeKind {
        match self {
            Self::SchemeCategory10
            | Self::SchemeAccent
            | Self::SchemeDark2
            | Self::SchemePaired
            | Self::SchemePastel1
            | Self::SchemePastel2
            | Self::SchemeSet1
            | Self::SchemeSet2
            | Self::SchemeSet3
            | Self::SchemeTableau10 => SchemeKind::Ordinal,
            _ => SchemeKind::Sequential,
        }
    }

    /// The d3 identifier, e.g. `interpolateViridis`.
    pub fn as_d3_name(self) -> &'static str {
        match self {
            Self::SchemeCategory10 => "schemeCategory10",
            Self::SchemeAccent => "schemeAccent",
            Self::SchemeDark2 => "schemeDark2",
            Self::SchemePaired => "schemePaired",
            Self::SchemePastel1 => "schemePastel1",
            Self::SchemePastel2 => "schemePastel2",
            Self::SchemeSet1 => "schemeSet1",
            Self::SchemeSet2 => "schemeSet2",
            Self::SchemeSet3 => "schemeSet3",
            Self::SchemeTableau10 => "schemeTableau10",
            Self::InterpolatePRGn => "interpolatePRGn",
            Self::InterpolatePiYG => "interpolatePiYG",
            Self::InterpolatePuOr => "interpolatePuOr",
            Self::InterpolateRdBu => "interpolateRdBu",
            Self::InterpolateRdGy => "interpolateRdGy",
            Self::InterpolateRdYlBu => "interpolateRdYlBu",
            Self::InterpolateRdYlGn => "interpolateRdYlGn",
            Self::InterpolateSpectral => "interpolateSpectral",
            Self::InterpolateBlues => "interpolateBlues",
            Self::InterpolateGreens => "interpolateGreens",
            Self::InterpolateGreys => "interpolateGreys",
            Self::InterpolateOranges => "interpolateOranges",
            Self::InterpolatePurples => "interpolatePurples",
            Self::InterpolateReds => "interpolateReds",
            Self::InterpolateTurbo => "interpolateTurbo",
            Self::InterpolateViridis => "interpolateViridis",
            Self::InterpolateInferno => "interpolateInferno",
            Self::InterpolateMagma => "interpolateMagma",
            Self::InterpolatePlasma => "interpolatePlasma",
            Self::InterpolateCividis => "interpolateCividis",
            Self::InterpolateWarm => "interpolateWarm",
            Self::InterpolateCool => "interpolateCool",
            Self::InterpolateCubehelixDefault => "interpolateCubehelixDefault",
            Self::InterpolateBuGn => "interpolateBuGn",
            Self::InterpolateBuPu => "interpolateBuPu",
            Self::InterpolateGnBu => "interpolateGnBu",
            Self::InterpolateOrRd => "interpolateOrRd",
            Self::InterpolatePuBuGn => "interpolatePuBuGn",
            Self::InterpolatePuBu => "interpolatePuBu",
            Self::InterpolatePuRd => "interpolatePuRd",
            Self::InterpolateRdPu => "interpolateRdPu",
            Self::InterpolateYlGnBu => "interpolateYlGnBu",
            Self::InterpolateYlGn => "interpolateYlGn",
            Self::InterpolateYlOrBr => "interpolateYlOrBr",
            Self::InterpolateYlOrRd => "interpolateYlOrRd",
            Self::InterpolateRainbow => "interpolateRainbow",
            Self::InterpolateSinebow => "interpolateSinebow",
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::InterpolateInferno
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_d3_name())
    }
}

/// Unknown scheme name, with the offending input.
#[derive(Debug, thiserror::Error)]
#[error("unknown color scheme {0:?}; expected a d3-scale-chromatic name such as \"interpolateViridis\" or \"schemeSet2\"")]
pub struct UnknownScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.as_d3_name() == s)
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_d3_name())
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
