// src/architecture/mod.rs
//! Layer separation: every import edge must point at a layer the importing
//! layer is allowed to depend on.

pub mod imports;
pub mod layers;

pub use self::imports::{ImportEdge, ModulePath};
pub use self::layers::{LayerMap, ModulePattern};

use std::path::Path;

use crate::analysis::checks::CheckContext;
use crate::config::ArchitectureConfig;
use crate::types::{Category, Violation};

#[cfg(test)]
#[path = "checker_test.rs"]
mod tests;

#[derive(Debug, Clone)]
pub struct ArchitectureChecker {
    layers: LayerMap,
    enforce: bool,
}

impl ArchitectureChecker {
    /// Compiles the layer policy.
    ///
    /// # Errors
    /// Returns the first invalid module pattern.
    pub fn new(config: &ArchitectureConfig) -> Result<Self, String> {
        Ok(Self {
            layers: LayerMap::from_config(config)?,
            enforce: config.enforce_layer_separation,
        })
    }

    /// Reports every import whose target layer is not allowed for the file's
    /// layer. Files and imports outside any layer are ignored.
    pub fn check(&self, ctx: &CheckContext, out: &mut Vec<Violation>) {
        if !self.enforce {
            return;
        }
        let module = ModulePath::relative_to(ctx.path, ctx.source_root);
        let Some(source_layer) = self.source_layer(ctx.path, &module) else {
            return;
        };

        for edge in imports::import_edges(ctx.root, ctx.source, &module) {
            let Some(target_layer) = self.target_layer(&edge) else {
                continue;
            };
            if self.layers.allows(source_layer, target_layer) {
                continue;
            }
            out.push(Violation::error(
                Category::Architecture,
                ctx.path,
                Some(edge.line),
                format!(
                    "Layer violation: '{source_layer}' must not import from '{target_layer}' ({})",
                    edge.display_target()
                ),
            ));
        }
    }

    /// Layer of the scanned file: its module path under the source root, else
    /// the longest matching tail of its full path.
    fn source_layer(&self, path: &Path, module: &ModulePath) -> Option<&str> {
        self.layers.layer_of(&module.segments).or_else(|| {
            let full = ModulePath::from_file(path);
            self.layers.layer_of_suffix(&full.segments)
        })
    }

    fn target_layer(&self, edge: &ImportEdge) -> Option<&str> {
        edge.candidates
            .iter()
            .find_map(|candidate| self.layers.layer_of(candidate))
    }
}
