//! # Furniture Client
//!
//! Client code for the furniture family. It only knows the
//! [`FurnitureFactory`], [`Table`](crate::furniture::Table) and
//! [`Sofa`](crate::furniture::Sofa) traits; the concrete style is decided by
//! whoever hands it the factory.
use crate::furniture::FurnitureFactory;
use factory_framework::{FamilyFactory, FrameworkError};
use std::io::Write;
use tracing::{debug, instrument};

/// Creates a table and a sofa, then returns the sofa's own description
/// followed by its collaboration with the table.
#[instrument(name = "furniture_client", skip_all, fields(style = %factory.variation()))]
pub fn furniture_lines(factory: &dyn FurnitureFactory) -> Vec<String> {
    let table = factory.create_table();
    debug!("Created table");
    let sofa = factory.create_sofa();
    debug!("Created sofa");

    vec![
        sofa.useful_function_b(),
        sofa.another_useful_function_b(table.as_ref()),
    ]
}

/// Writes [`furniture_lines`] to `out`, one per line.
pub fn furniture_client(
    factory: &dyn FurnitureFactory,
    out: &mut dyn Write,
) -> Result<(), FrameworkError> {
    for line in furniture_lines(factory) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furniture::{ArDekoFactory, ModernFactory};
    use factory_framework::mock::{FailingSink, MockSink};

    #[test]
    fn test_ardeko_lines() {
        assert_eq!(
            furniture_lines(&ArDekoFactory),
            vec![
                "The result of the product B1.",
                "The result of the B1 collaborating with the (The result of the product A1.)",
            ]
        );
    }

    #[test]
    fn test_client_writes_modern_lines() {
        let mut sink = MockSink::new();
        furniture_client(&ModernFactory, &mut sink).unwrap();

        assert_eq!(
            sink.text(),
            "The result of the product B2.\n\
             The result of the B2 collaborating with the (The result of the product A2.)\n"
        );
    }

    #[test]
    fn test_client_surfaces_sink_failure() {
        let mut sink = FailingSink::after(10);
        let result = furniture_client(&ArDekoFactory, &mut sink);

        assert!(matches!(result, Err(FrameworkError::Io(_))));
        assert_eq!(sink.accepted(), "The result");
    }
}
