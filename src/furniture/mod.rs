//! # Furniture Family
//!
//! Tables and sofas in two styles, `ArDeko` and `Modern`.
//!
//! ## Structure
//!
//! - [`Table`], [`Sofa`] - product traits, the only product types clients see
//! - [`FurnitureFactory`] - the abstract factory, one creation method per product kind
//! - [`ArDekoFactory`], [`ModernFactory`] - concrete factories, one per [`FurnitureStyle`]
//! - [`factory_for`] - picks the concrete factory for a style
//!
//! ## Compatibility
//!
//! A sofa can collaborate with any table, but the result only reads as a matched
//! pair when both come from the same factory:
//!
//! ```rust
//! use factory_recipe::furniture::{factory_for, FurnitureStyle};
//!
//! let factory = factory_for(FurnitureStyle::ArDeko);
//! let table = factory.create_table();
//! let sofa = factory.create_sofa();
//!
//! assert_eq!(
//!     sofa.another_useful_function_b(table.as_ref()),
//!     "The result of the B1 collaborating with the (The result of the product A1.)"
//! );
//! ```

mod factories;
mod products;
pub mod style;

pub use factories::{ArDekoFactory, ModernFactory};
pub use style::FurnitureStyle;

use factory_framework::FamilyFactory;
use std::fmt::Debug;

/// Product A of the furniture family.
pub trait Table: Debug + Send + Sync {
    fn useful_function_a(&self) -> String;

    /// Style of the factory that produced this table.
    fn variation(&self) -> FurnitureStyle;
}

/// Product B of the furniture family.
///
/// A sofa works on its own and can also collaborate with a table. The
/// collaboration accepts any table; only a table of the same style yields the
/// matched result.
pub trait Sofa: Debug + Send + Sync {
    fn useful_function_b(&self) -> String;

    /// Returns `"The result of the B{n} collaborating with the ({table})"`, where
    /// `{n}` is this sofa's style index and `{table}` is the collaborator's
    /// [`Table::useful_function_a`] output.
    fn another_useful_function_b(&self, collaborator: &dyn Table) -> String;

    /// Style of the factory that produced this sofa.
    fn variation(&self) -> FurnitureStyle;
}

/// Abstract factory for the furniture family.
///
/// Every product created by one factory shares the factory's
/// [`variation`](FamilyFactory::variation).
pub trait FurnitureFactory: FamilyFactory<Variation = FurnitureStyle> {
    fn create_table(&self) -> Box<dyn Table>;

    fn create_sofa(&self) -> Box<dyn Sofa>;

    /// Creates a table and a sofa from this factory and lets them collaborate.
    fn combine_table_sofa(&self) -> String {
        let table = self.create_table();
        let sofa = self.create_sofa();
        sofa.another_useful_function_b(table.as_ref())
    }
}

/// Returns the concrete factory for `style`.
pub fn factory_for(style: FurnitureStyle) -> Box<dyn FurnitureFactory> {
    match style {
        FurnitureStyle::ArDeko => Box::new(ArDekoFactory),
        FurnitureStyle::Modern => Box::new(ModernFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factory_framework::Variation;

    #[test]
    fn test_factory_for_matches_style() {
        for &style in FurnitureStyle::all() {
            assert_eq!(factory_for(style).variation(), style);
        }
    }

    #[test]
    fn test_products_share_factory_style() {
        for &style in FurnitureStyle::all() {
            let factory = factory_for(style);
            assert_eq!(factory.create_table().variation(), style);
            assert_eq!(factory.create_sofa().variation(), style);
        }
    }

    #[test]
    fn test_combine_table_sofa() {
        assert_eq!(
            ArDekoFactory.combine_table_sofa(),
            "The result of the B1 collaborating with the (The result of the product A1.)"
        );
        assert_eq!(
            ModernFactory.combine_table_sofa(),
            "The result of the B2 collaborating with the (The result of the product A2.)"
        );
    }
}
