use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Aggregate configuration for every check category.
///
/// Required sections are always present (defaulted when absent from the file);
/// optional sections stay `None` and their checks are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityGateConfig {
    #[serde(default)]
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub file_size: FileSizeConfig,
    #[serde(default)]
    pub complexity: ComplexityConfig,
    #[serde(default)]
    pub type_hints: TypeHintsConfig,
    #[serde(default)]
    pub error_handling: ErrorHandlingConfig,
    #[serde(default)]
    pub architecture: ArchitectureConfig,
    #[serde(default)]
    pub documentation: Option<DocumentationConfig>,
    #[serde(default)]
    pub testing: Option<TestingConfig>,
    #[serde(default)]
    pub security: Option<SecurityConfig>,
    #[serde(default)]
    pub performance: Option<PerformanceConfig>,
}

/// Coverage thresholds, in percent. Enforced by the caller's test runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_coverage")]
    pub minimum: f64,
    #[serde(default = "default_coverage")]
    pub fail_under: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum: default_coverage(),
            fail_under: default_coverage(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSizeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_max_imports")]
    pub max_imports: usize,
    #[serde(default = "default_max_functions")]
    pub max_functions: usize,
}

impl Default for FileSizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: default_max_lines(),
            max_imports: default_max_imports(),
            max_functions: default_max_functions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_cc")]
    pub max_cc: usize,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_cc: default_max_cc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeHintsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub require_return_types: bool,
    #[serde(default = "default_true")]
    pub require_param_types: bool,
}

impl Default for TypeHintsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_return_types: true,
            require_param_types: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub forbid_bare_except: bool,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            forbid_bare_except: true,
        }
    }
}

/// Layer policy. `layers` maps a layer name to dotted module patterns,
/// `allowed` maps a layer name to the layers it may import from.
///
/// Module paths of scanned files are taken relative to `source_root` when set,
/// otherwise relative to the outermost package around the scanned location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub enforce_layer_separation: bool,
    #[serde(default = "default_layers")]
    pub layers: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_allowed")]
    pub allowed: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub source_root: Option<PathBuf>,
}

impl Default for ArchitectureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enforce_layer_separation: true,
            layers: default_layers(),
            allowed: default_allowed(),
            source_root: None,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub require_module_docstrings: bool,
    #[serde(default)]
    pub require_class_docstrings: bool,
    #[serde(default)]
    pub require_function_docstrings: bool,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_module_docstrings: true,
            require_class_docstrings: false,
            require_function_docstrings: false,
        }
    }
}

/// Test policy consumed by the caller's CI glue; only validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub require_tests_for_new_code: bool,
    #[serde(default = "default_test_ratio")]
    pub min_test_to_code_ratio: f64,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_tests_for_new_code: true,
            min_test_to_code_ratio: default_test_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub forbid_hardcoded_secrets: bool,
    #[serde(default = "default_true")]
    pub forbid_eval_usage: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            forbid_hardcoded_secrets: true,
            forbid_eval_usage: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_depth")]
    pub max_nesting_depth: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_nesting_depth: default_max_depth(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_coverage() -> f64 { 80.0 }
const fn default_max_lines() -> usize { 200 }
const fn default_max_imports() -> usize { 20 }
const fn default_max_functions() -> usize { 15 }
const fn default_max_cc() -> usize { 10 }
const fn default_max_depth() -> usize { 5 }
const fn default_test_ratio() -> f64 { 0.5 }

fn default_layers() -> BTreeMap<String, Vec<String>> {
    ["domain", "application", "infrastructure", "presentation"]
        .into_iter()
        .map(|layer| (layer.to_string(), vec![format!("**.{layer}.**")]))
        .collect()
}

fn default_allowed() -> BTreeMap<String, Vec<String>> {
    let allow = |targets: &[&str]| -> Vec<String> {
        targets.iter().map(ToString::to_string).collect()
    };
    BTreeMap::from([
        ("domain".to_string(), Vec::new()),
        ("application".to_string(), allow(&["domain"])),
        ("infrastructure".to_string(), allow(&["domain", "application"])),
        ("presentation".to_string(), allow(&["domain", "application"])),
    ])
}
