//! # Variation Trait
//!
//! A variation is the tag that ties a family of products together ("ArDeko",
//! "Modern", "Oracle", ...). Every factory commits to exactly one variation and
//! every product it creates carries the same one.
//!
//! The set of variations for a family is closed and known at compile time, so a
//! variation is always a plain `Copy` enum. The trait gives the framework enough
//! to enumerate, name and parse them without knowing the family.

use crate::FrameworkError;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed set of named variations for one product family.
///
/// # Example
///
/// ```rust
/// use factory_framework::{parse_variation, FrameworkError, Variation};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Finish { Matte, Gloss }
///
/// impl std::fmt::Display for Finish {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.name())
///     }
/// }
///
/// impl Variation for Finish {
///     const FAMILY: &'static str = "finish";
///     fn all() -> &'static [Self] { &[Finish::Matte, Finish::Gloss] }
///     fn name(&self) -> &'static str {
///         match self { Finish::Matte => "Matte", Finish::Gloss => "Gloss" }
///     }
/// }
///
/// assert_eq!(Finish::Gloss.index(), 2);
/// assert_eq!(parse_variation::<Finish>("gloss").unwrap(), Finish::Gloss);
/// assert!(matches!(
///     parse_variation::<Finish>("satin"),
///     Err(FrameworkError::UnknownVariation { family: "finish", .. })
/// ));
/// ```
pub trait Variation: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Human-readable name of the family these variations belong to.
    const FAMILY: &'static str;

    /// Every variation, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical display name (e.g. `"PostgreSQL"`).
    fn name(&self) -> &'static str;

    /// 1-based position of this variation in [`Variation::all`].
    fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .map_or(0, |pos| pos + 1)
    }
}

/// Parses a variation by name, ignoring ASCII case and surrounding whitespace.
pub fn parse_variation<V: Variation>(input: &str) -> Result<V, FrameworkError> {
    let wanted = input.trim();
    V::all()
        .iter()
        .copied()
        .find(|v| v.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| FrameworkError::UnknownVariation {
            family: V::FAMILY,
            name: wanted.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Season {
        Spring,
        Summer,
        Winter,
    }

    impl Display for Season {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl Variation for Season {
        const FAMILY: &'static str = "season";

        fn all() -> &'static [Self] {
            &[Season::Spring, Season::Summer, Season::Winter]
        }

        fn name(&self) -> &'static str {
            match self {
                Season::Spring => "Spring",
                Season::Summer => "Summer",
                Season::Winter => "Winter",
            }
        }
    }

    #[test]
    fn test_index_is_one_based() {
        assert_eq!(Season::Spring.index(), 1);
        assert_eq!(Season::Summer.index(), 2);
        assert_eq!(Season::Winter.index(), 3);
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(parse_variation::<Season>("summer").unwrap(), Season::Summer);
        assert_eq!(parse_variation::<Season>("  WINTER ").unwrap(), Season::Winter);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = parse_variation::<Season>("Autumn").unwrap_err();
        match err {
            FrameworkError::UnknownVariation { family, name } => {
                assert_eq!(family, "season");
                assert_eq!(name, "Autumn");
            }
            other => panic!("expected UnknownVariation, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variation_message() {
        let err = parse_variation::<Season>("").unwrap_err();
        assert_eq!(err.to_string(), "Unknown season variation: ");
    }
}
