//! The two furniture styles a factory can commit to.

use factory_framework::{parse_variation, FrameworkError, Variation};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Furniture style. Tables and sofas only pair correctly within one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureStyle {
    ArDeko,
    Modern,
}

impl Variation for FurnitureStyle {
    const FAMILY: &'static str = "furniture";

    fn all() -> &'static [Self] {
        &[FurnitureStyle::ArDeko, FurnitureStyle::Modern]
    }

    fn name(&self) -> &'static str {
        match self {
            FurnitureStyle::ArDeko => "ArDeko",
            FurnitureStyle::Modern => "Modern",
        }
    }
}

impl Display for FurnitureStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FurnitureStyle {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variation(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_indices() {
        assert_eq!(FurnitureStyle::ArDeko.index(), 1);
        assert_eq!(FurnitureStyle::Modern.index(), 2);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("ardeko".parse::<FurnitureStyle>().unwrap(), FurnitureStyle::ArDeko);
        assert_eq!("Modern".parse::<FurnitureStyle>().unwrap(), FurnitureStyle::Modern);
        assert!("Baroque".parse::<FurnitureStyle>().is_err());
    }

    #[test]
    fn test_style_display_matches_name() {
        for style in FurnitureStyle::all() {
            assert_eq!(style.to_string(), style.name());
        }
    }
}
