// src/architecture/layers.rs
//! Declared layers and the module patterns that place a module in a layer.

use std::collections::BTreeMap;

use crate::config::ArchitectureConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*`: exactly one segment.
    One,
    /// `**`: zero or more segments.
    Any,
}

/// A dotted module pattern such as `app.domain.**` or `**.infrastructure.*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePattern {
    segments: Vec<Segment>,
}

impl ModulePattern {
    /// Parses a pattern.
    ///
    /// # Errors
    /// Returns a reason if the pattern is empty, has an empty segment, or mixes
    /// wildcards with other characters inside one segment.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        if pattern.trim().is_empty() {
            return Err("pattern is empty".into());
        }
        let segments = pattern
            .split('.')
            .map(parse_segment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    #[must_use]
    pub fn matches(&self, module: &[String]) -> bool {
        match_segments(&self.segments, module)
    }
}

fn parse_segment(raw: &str) -> Result<Segment, String> {
    match raw {
        "" => Err("empty segment".into()),
        "*" => Ok(Segment::One),
        "**" => Ok(Segment::Any),
        s if s.contains('*') => Err(format!("wildcard must span a whole segment in '{s}'")),
        s if s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') => {
            Ok(Segment::Literal(s.to_string()))
        }
        s => Err(format!("invalid characters in segment '{s}'")),
    }
}

fn match_segments(pattern: &[Segment], module: &[String]) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return module.is_empty();
    };
    match head {
        Segment::Any => (0..=module.len()).any(|skip| match_segments(rest, &module[skip..])),
        Segment::One => !module.is_empty() && match_segments(rest, &module[1..]),
        Segment::Literal(lit) => {
            module.first().is_some_and(|m| m == lit) && match_segments(rest, &module[1..])
        }
    }
}

/// Compiled layer policy.
#[derive(Debug, Clone)]
pub struct LayerMap {
    layers: Vec<(String, Vec<ModulePattern>)>,
    allowed: BTreeMap<String, Vec<String>>,
}

impl LayerMap {
    /// Compiles the layer patterns of `config`.
    ///
    /// # Errors
    /// Returns the first invalid pattern.
    pub fn from_config(config: &ArchitectureConfig) -> Result<Self, String> {
        let mut layers = Vec::with_capacity(config.layers.len());
        for (name, patterns) in &config.layers {
            let compiled = patterns
                .iter()
                .map(|p| {
                    ModulePattern::parse(p)
                        .map_err(|reason| format!("layer '{name}', pattern '{p}': {reason}"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            layers.push((name.clone(), compiled));
        }
        Ok(Self {
            layers,
            allowed: config.allowed.clone(),
        })
    }

    /// The first layer (in name order) with a pattern matching `module`.
    #[must_use]
    pub fn layer_of(&self, module: &[String]) -> Option<&str> {
        self.layers
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.matches(module)))
            .map(|(name, _)| name.as_str())
    }

    /// Like [`LayerMap::layer_of`], but also tries every trailing run of
    /// segments, longest first. Places a file whose path carries an unknown
    /// prefix such as a checkout directory.
    #[must_use]
    pub fn layer_of_suffix(&self, module: &[String]) -> Option<&str> {
        (0..module.len()).find_map(|skip| self.layer_of(&module[skip..]))
    }

    /// Whether `from` may depend on `to`. A layer may always use itself.
    #[must_use]
    pub fn allows(&self, from: &str, to: &str) -> bool {
        from == to
            || self
                .allowed
                .get(from)
                .is_some_and(|targets| targets.iter().any(|t| t == to))
    }
}
