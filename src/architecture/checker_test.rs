// src/architecture/checker_test.rs
use std::collections::BTreeMap;
use std::path::Path;

use super::*;
use crate::analysis::parser::SourceParser;

fn check(config: &ArchitectureConfig, path: &str, code: &str) -> Vec<Violation> {
    check_under(config, "", path, code)
}

fn check_under(
    config: &ArchitectureConfig,
    root: &str,
    path: &str,
    code: &str,
) -> Vec<Violation> {
    let checker = ArchitectureChecker::new(config).unwrap();
    let tree = SourceParser::new().unwrap().parse(code).unwrap();
    let ctx = CheckContext {
        root: tree.root_node(),
        source: code,
        path: Path::new(path),
        source_root: Path::new(root),
    };
    let mut out = Vec::new();
    checker.check(&ctx, &mut out);
    out
}

#[test]
fn test_domain_must_not_import_infrastructure() {
    let code = "\
import os
from app.infrastructure.db import Session
from app.domain import rules
";
    let out = check(&ArchitectureConfig::default(), "app/domain/user.py", code);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].line, Some(2));
    assert!(out[0].is_error());
    assert_eq!(
        out[0].message,
        "Layer violation: 'domain' must not import from 'infrastructure' (app.infrastructure.db)"
    );
}

#[test]
fn test_allowed_direction_is_clean() {
    let code = "from app.domain.user import User\nimport app.application.service\n";
    assert!(check(&ArchitectureConfig::default(), "app/presentation/api.py", code).is_empty());
}

#[test]
fn test_relative_import_resolves_to_layer() {
    let code = "from ..presentation import views\n";
    let out = check(&ArchitectureConfig::default(), "app/application/service.py", code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'application' must not import from 'presentation'"));
}

#[test]
fn test_imported_submodule_decides_layer() {
    let code = "from app import infrastructure\n";
    let out = check(&ArchitectureConfig::default(), "app/domain/user.py", code);
    assert_eq!(out.len(), 1);
}

#[test]
fn test_unlayered_file_is_skipped() {
    let code = "from app.infrastructure.db import Session\n";
    assert!(check(&ArchitectureConfig::default(), "scripts/migrate.py", code).is_empty());
}

#[test]
fn test_enforcement_disabled() {
    let config = ArchitectureConfig {
        enforce_layer_separation: false,
        ..ArchitectureConfig::default()
    };
    let code = "from app.infrastructure.db import Session\n";
    assert!(check(&config, "app/domain/user.py", code).is_empty());
}

fn core_and_web() -> ArchitectureConfig {
    let layer = |pattern: &str| vec![pattern.to_string()];
    ArchitectureConfig {
        layers: BTreeMap::from([
            ("core".to_string(), layer("app.core.**")),
            ("web".to_string(), layer("app.web.**")),
        ]),
        allowed: BTreeMap::from([
            ("core".to_string(), Vec::new()),
            ("web".to_string(), vec!["core".to_string()]),
        ]),
        ..ArchitectureConfig::default()
    }
}

#[test]
fn test_anchored_patterns_under_source_root() {
    let code = "from app.web.views import render\n";
    let models = "/srv/checkout/app/core/models.py";
    let out = check_under(&core_and_web(), "/srv/checkout", models, code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'core' must not import from 'web'"));

    let reverse = "from app.core.models import Model\n";
    let web = "/srv/checkout/app/web/views.py";
    assert!(check_under(&core_and_web(), "/srv/checkout", web, reverse).is_empty());
}

#[test]
fn test_anchored_patterns_without_known_root() {
    let code = "from app.web.views import render\n";
    let out = check_under(&core_and_web(), "/elsewhere", "/tmp/run/app/core/models.py", code);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, Category::Architecture);
}
