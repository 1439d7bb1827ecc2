//! # FamilyFactory Trait
//!
//! The common supertrait of every abstract factory. Family-specific factory
//! traits (`FurnitureFactory`, `DatabaseFactory`, ...) add their own creation
//! methods and pin the associated variation type:
//!
//! ```rust,ignore
//! pub trait FurnitureFactory: FamilyFactory<Variation = FurnitureStyle> {
//!     fn create_table(&self) -> Box<dyn Table>;
//!     fn create_sofa(&self) -> Box<dyn Sofa>;
//! }
//! ```
//!
//! Because the associated type is fixed in the supertrait bound, the family
//! trait stays object safe and clients can work with `&dyn FurnitureFactory`.

use crate::Variation;

/// A factory bound to exactly one variation for its whole lifetime.
pub trait FamilyFactory: Send + Sync {
    /// The variation enum of the family this factory belongs to.
    type Variation: Variation;

    /// The variation of every product this factory creates.
    fn variation(&self) -> Self::Variation;
}
