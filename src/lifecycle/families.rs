//! [`FamilyDemo`] wiring for each product family.
//!
//! This is the only place outside the family modules that turns a variation
//! into a concrete factory. The clients themselves never see one.

use crate::clients::{database_client, furniture_client};
use crate::database::{self, DatabaseFactory, DatabaseKind};
use crate::furniture::{self, FurnitureFactory, FurnitureStyle};
use factory_framework::{FamilyDemo, FrameworkError};
use std::io::Write;

/// Runs the furniture client against one factory per style.
pub struct FurnitureDemo;

impl FamilyDemo for FurnitureDemo {
    type Variation = FurnitureStyle;
    type Factory = dyn FurnitureFactory;

    fn build(style: FurnitureStyle) -> Box<Self::Factory> {
        furniture::factory_for(style)
    }

    fn exercise(factory: &Self::Factory, out: &mut dyn Write) -> Result<(), FrameworkError> {
        furniture_client(factory, out)
    }
}

/// Runs the database client against one factory per engine.
pub struct DatabaseDemo;

impl FamilyDemo for DatabaseDemo {
    type Variation = DatabaseKind;
    type Factory = dyn DatabaseFactory;

    fn build(kind: DatabaseKind) -> Box<Self::Factory> {
        database::factory_for(kind)
    }

    fn exercise(factory: &Self::Factory, out: &mut dyn Write) -> Result<(), FrameworkError> {
        database_client(factory, out)
    }
}
