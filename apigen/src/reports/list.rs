//! List command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Services discovered in the services directory.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub services_dir: PathBuf,
    pub services: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.services.is_empty() {
            out.preformatted(&format!(
                "No services found in {}",
                self.services_dir.display()
            ));
            return;
        }

        out.section(&format!("Services ({})", self.services.len()));
        for service in &self.services {
            out.list_item(service);
        }
    }
}
