use crate::config::DemoConfig;
use crate::lifecycle::{DatabaseDemo, DemoError, FurnitureDemo};
use factory_framework::{FamilyDemo, FrameworkError};
use std::io::Write;
use tracing::{info, info_span};

/// Runs every configured family demo into one output sink.
///
/// Furniture runs first, then the database family. The two transcripts are
/// separated by a blank line; a family with no configured variations is
/// skipped entirely.
///
/// # Example
///
/// ```rust
/// use factory_recipe::config::DemoConfig;
/// use factory_recipe::lifecycle::DemoRunner;
/// use factory_framework::mock::MockSink;
///
/// let config = DemoConfig::from_toml_str("furniture = []\ndatabase = [\"Oracle\"]").unwrap();
/// let mut sink = MockSink::new();
/// DemoRunner::new(config).run(&mut sink).unwrap();
///
/// assert_eq!(sink.lines()[1], "Oracle DB connected");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DemoRunner {
    config: DemoConfig,
}

impl DemoRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        let mut wrote_family = false;

        if !self.config.furniture.is_empty() {
            let span = info_span!("furniture_demo");
            let _guard = span.enter();
            info!(styles = ?self.config.furniture, "Running furniture demo");
            FurnitureDemo::run(&self.config.furniture, out)?;
            wrote_family = true;
        }

        if !self.config.database.is_empty() {
            let span = info_span!("database_demo");
            let _guard = span.enter();
            if wrote_family {
                writeln!(out).map_err(FrameworkError::from)?;
            }
            info!(engines = ?self.config.database, "Running database demo");
            DatabaseDemo::run(&self.config.database, out)?;
        }

        out.flush().map_err(FrameworkError::from)?;
        info!("Demo completed");
        Ok(())
    }
}
