//! Hexagonal boundary lint for the `destinate` backend.
//!
//! Every `.rs` file under `backend/src/{domain,inbound,outbound}` is parsed
//! and each path it mentions is resolved to a dependency: another layer of
//! this crate, or an external crate. `RULES` lists what each layer may not
//! depend on.
//!
//! Test-only code is exempt: files named `tests.rs`, `*_tests.rs` or
//! `test_utils.rs`, and any `use`, `mod` or `fn` marked `#[cfg(test)]`.
//!
//! Run with `cargo run -p architecture-lint` from anywhere in the workspace.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Library crate name, as seen from integration tests and binaries.
const CRATE_NAME: &str = "destinate";

/// Source directories under `backend/src` that are linted.
const LAYERS: [&str; 3] = ["domain", "inbound", "outbound"];

/// What a layer must not depend on.
struct Rule {
    layer: &'static str,
    layers: &'static [&'static str],
    crates: &'static [&'static str],
}

const RULES: [Rule; 3] = [
    Rule {
        layer: "domain",
        layers: &["inbound", "outbound"],
        crates: &[
            "actix_http",
            "actix_web",
            "awc",
            "ortho_config",
            "utoipa",
            "utoipa_swagger_ui",
        ],
    },
    Rule {
        layer: "inbound",
        layers: &["outbound"],
        crates: &["mockable", "ortho_config"],
    },
    Rule {
        layer: "outbound",
        layers: &["inbound"],
        crates: &["actix_http", "actix_web", "awc", "utoipa"],
    },
];

/// A single boundary violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

#[derive(Debug)]
pub enum ArchitectureLintError {
    Io(io::Error),
    /// The file could not be parsed or lies outside the linted layers.
    Parse { file: PathBuf, message: String },
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "architecture lint could not read sources: {err}"),
            Self::Parse { file, message } => write!(f, "{}: {message}", file.display()),
            Self::Violations(violations) => {
                writeln!(f, "{} architecture boundary violation(s):", violations.len())?;
                violations
                    .iter()
                    .try_for_each(|violation| writeln!(f, "- {violation}"))
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } | Self::Violations(_) => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    pub contents: String,
}

/// Lint the sources under `backend_dir/src`.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<(), ArchitectureLintError> {
    let sources = read_layer_sources(&backend_dir.join("src"))?;
    lint_sources(&sources)
}

/// Lint in-memory sources. Every file must sit inside one of the layers.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let rule = rule_for(&source.file).ok_or_else(|| ArchitectureLintError::Parse {
            file: source.file.clone(),
            message: format!("not inside one of the {LAYERS:?} layers"),
        })?;
        if is_test_only_file(&source.file) {
            continue;
        }
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;

        let mut collector = DependencyCollector::default();
        collector.visit_file(&parsed);
        violations.extend(
            collector
                .found
                .iter()
                .filter_map(|dependency| rule.reject(dependency))
                .map(|message| Violation {
                    file: source.file.clone(),
                    message,
                }),
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn rule_for(file: &Path) -> Option<&'static Rule> {
    let first = file.components().next()?.as_os_str().to_str()?;
    RULES.iter().find(|rule| rule.layer == first)
}

impl Rule {
    fn reject(&self, dependency: &Dependency) -> Option<String> {
        match dependency {
            Dependency::Layer(name) if self.layers.contains(&name.as_str()) => Some(format!(
                "{} module must not depend on crate::{name}",
                self.layer
            )),
            Dependency::Crate(name) if self.crates.contains(&name.as_str()) => Some(format!(
                "{} module must not depend on external crate `{name}`",
                self.layer
            )),
            Dependency::Layer(_) | Dependency::Crate(_) => None,
        }
    }
}

/// Where a path points, reduced to the part the rules care about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Dependency {
    /// A top-level module of this crate, such as `outbound`.
    Layer(String),
    /// An external crate root, such as `actix_web`.
    Crate(String),
}

impl Dependency {
    /// Resolve the leading segments of a path.
    ///
    /// `crate::`, `self::`, `super::` and `destinate::` prefixes are stripped
    /// before looking for a layer name. Any other single-segment or
    /// multi-segment path is taken to start with a crate name.
    fn resolve(segments: &[String]) -> Option<Self> {
        let first = segments.first()?.as_str();
        if LAYERS.contains(&first) {
            return Some(Self::Layer(first.to_owned()));
        }
        if first == CRATE_NAME || is_relative(first) {
            return segments
                .iter()
                .skip(1)
                .find(|segment| !is_relative(segment))
                .filter(|segment| LAYERS.contains(&segment.as_str()))
                .map(|segment| Self::Layer(segment.clone()));
        }
        Some(Self::Crate(first.to_owned()))
    }
}

fn is_relative(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

#[derive(Default)]
struct DependencyCollector {
    found: BTreeSet<Dependency>,
}

impl DependencyCollector {
    fn record(&mut self, segments: &[String]) {
        self.found.extend(Dependency::resolve(segments));
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(syn::UseName { ident })
            | syn::UseTree::Rename(syn::UseRename { ident, .. }) => {
                prefix.push(ident.to_string());
                self.record(prefix);
                prefix.pop();
            }
            syn::UseTree::Glob(_) => self.record(prefix),
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for DependencyCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        self.record(&segments);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        if !is_cfg_test(&node.attrs) {
            self.record_use_tree(&node.tree, &mut Vec::new());
        }
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if !is_cfg_test(&node.attrs) {
            syn::visit::visit_item_mod(self, node);
        }
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        if !is_cfg_test(&node.attrs) {
            syn::visit::visit_item_fn(self, node);
        }
    }
}

fn is_test_only_file(file: &Path) -> bool {
    file.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            matches!(name, "tests.rs" | "test_utils.rs") || name.ends_with("_tests.rs")
        })
}

/// `#[cfg(test)]` exactly; `#[cfg(not(test))]` and friends are still linted.
fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

fn read_layer_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut pending: Vec<PathBuf> = LAYERS
        .iter()
        .map(|layer| src_dir.join(layer))
        .filter(|dir| dir.is_dir())
        .collect();
    let mut sources = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let contents = fs::read_to_string(&path)?;
                let file = path
                    .strip_prefix(src_dir)
                    .map_err(|err| ArchitectureLintError::Parse {
                        file: path.clone(),
                        message: err.to_string(),
                    })?
                    .to_path_buf();
                sources.push(LintSource { file, contents });
            }
        }
    }

    sources.sort_by(|left, right| left.file.cmp(&right.file));
    Ok(sources)
}
