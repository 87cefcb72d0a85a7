//! Batch processing of configured modules
//!
//! One module in, one outcome out. Failures never propagate: every error
//! degrades to a [`ModuleOutcome`] the caller can log before moving on to
//! the next module, so a single broken README cannot abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use mdsheet_babel::datasheet::{selective, structural};
use mdsheet_babel::{FormatRegistry, SectionPlan};
use mdsheet_config::SheetConfig;
use mdsheet_parser::DocumentLoader;

/// Assembly strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Structural copy into the canonical section skeleton.
    Full,
    /// Selective field extraction into a summary datasheet.
    Summary,
}

impl Strategy {
    pub fn parse(name: &str) -> Option<Strategy> {
        match name {
            "full" => Some(Strategy::Full),
            "summary" => Some(Strategy::Summary),
            _ => None,
        }
    }
}

/// What happened to one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    /// Output written to this path.
    Written(PathBuf),
    /// Module skipped, with the reason.
    Skipped(String),
    /// Module failed, with the error detail.
    Failed(String),
}

/// Processes configured modules one at a time.
pub struct BatchRunner<'a> {
    config: &'a SheetConfig,
    registry: &'a FormatRegistry,
    plan: SectionPlan,
    strategy: Strategy,
    format: String,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        config: &'a SheetConfig,
        registry: &'a FormatRegistry,
        strategy: Strategy,
        format: impl Into<String>,
    ) -> Self {
        BatchRunner {
            config,
            registry,
            plan: config.section_plan(),
            strategy,
            format: format.into(),
        }
    }

    /// Modules to process, in configured order.
    pub fn modules(&self) -> &[String] {
        &self.config.batch.modules
    }

    /// Process a single module directory under `root`.
    ///
    /// The permanent skip list is honored before any file is touched, so a
    /// skipped module can never overwrite an existing datasheet.
    pub fn process_module(&self, root: &Path, module: &str) -> ModuleOutcome {
        if self.config.is_skipped(module) {
            return ModuleOutcome::Skipped("datasheet is ready, not modified".to_string());
        }

        let readme = root.join(module).join(&self.config.batch.readme_name);
        if !readme.exists() {
            return ModuleOutcome::Skipped(format!("no {}", self.config.batch.readme_name));
        }
        let loader = match DocumentLoader::from_path(&readme) {
            Ok(loader) => loader,
            Err(e) => return ModuleOutcome::Failed(format!("reading {}: {}", readme.display(), e)),
        };

        let (sheet, file_stem) = match self.strategy {
            Strategy::Full => {
                let sections = loader.parse();
                if sections.is_empty() {
                    return ModuleOutcome::Skipped("no sections parsed".to_string());
                }
                (
                    structural::assemble(&sections, &self.plan, module),
                    "Datasheet".to_string(),
                )
            }
            Strategy::Summary => {
                if loader.source().trim().is_empty() {
                    return ModuleOutcome::Skipped("empty README".to_string());
                }
                let (code, _) = selective::extract_module_identity(loader.source(), module);
                (
                    selective::assemble(
                        loader.source(),
                        module,
                        &self.config.datasheet.part_no,
                        &self.config.publisher.default,
                    ),
                    format!("{}_Datasheet", code),
                )
            }
        };

        let format = match self.registry.get(&self.format) {
            Some(format) => format,
            None => return ModuleOutcome::Failed(format!("format '{}' not found", self.format)),
        };
        let bytes = match format.serialize(&sheet) {
            Ok(bytes) => bytes,
            Err(e) => return ModuleOutcome::Failed(e.to_string()),
        };

        let out_dir = root.join(module).join(&self.config.batch.output_dir);
        if let Err(e) = fs::create_dir_all(&out_dir) {
            return ModuleOutcome::Failed(format!("creating {}: {}", out_dir.display(), e));
        }
        let out_path = out_dir.join(format!("{}.{}", file_stem, format.file_extension()));
        match fs::write(&out_path, bytes) {
            Ok(()) => ModuleOutcome::Written(out_path),
            Err(e) => ModuleOutcome::Failed(format!("writing {}: {}", out_path.display(), e)),
        }
    }
}
