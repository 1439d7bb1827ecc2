//! Concrete furniture products, one type per (kind, style) pair.
//!
//! These types are crate-private on purpose: clients only ever see them as
//! `Box<dyn Table>` / `Box<dyn Sofa>` handed out by a [`FurnitureFactory`](super::FurnitureFactory).

use super::{FurnitureStyle, Sofa, Table};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ArDekoTable;

impl Table for ArDekoTable {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::ArDeko
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ModernTable;

impl Table for ModernTable {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ArDekoSofa;

impl Sofa for ArDekoSofa {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    /// Pairs correctly only with an ArDeko table, but accepts any table.
    fn another_useful_function_b(&self, collaborator: &dyn Table) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({result})")
    }

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::ArDeko
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ModernSofa;

impl Sofa for ModernSofa {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    /// Pairs correctly only with a Modern table, but accepts any table.
    fn another_useful_function_b(&self, collaborator: &dyn Table) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({result})")
    }

    fn variation(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}
