//! Concrete furniture factories, one per style.

use super::products::{ArDekoSofa, ArDekoTable, ModernSofa, ModernTable};
use super::{FurnitureFactory, FurnitureStyle, Sofa, Table};
use factory_framework::FamilyFactory;
use tracing::debug;

/// Produces ArDeko tables and sofas.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArDekoFactory;

impl FamilyFactory for ArDekoFactory {
    type Variation = FurnitureStyle;

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::ArDeko
    }
}

impl FurnitureFactory for ArDekoFactory {
    fn create_table(&self) -> Box<dyn Table> {
        debug!(style = %self.variation(), "Creating table");
        Box::new(ArDekoTable)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        debug!(style = %self.variation(), "Creating sofa");
        Box::new(ArDekoSofa)
    }
}

/// Produces Modern tables and sofas.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernFactory;

impl FamilyFactory for ModernFactory {
    type Variation = FurnitureStyle;

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}

impl FurnitureFactory for ModernFactory {
    fn create_table(&self) -> Box<dyn Table> {
        debug!(style = %self.variation(), "Creating table");
        Box::new(ModernTable)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        debug!(style = %self.variation(), "Creating sofa");
        Box::new(ModernSofa)
    }
}
