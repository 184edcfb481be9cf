//! Process-wide registry of import operators.
//!
//! Hosts call [`init`] once before offering imports and [`shutdown`] when they
//! unload. Both are idempotent and depend on nothing else being set up.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub const MAP_IMPORT_OPERATOR: &str = "umap_importer.import_unreal_map";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Extension of accepted source files, without the leading period.
    pub file_extension: &'static str,
}

impl OperatorDescriptor {
    pub fn accepts(&self, path: &std::path::Path) -> bool {
        path.extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case(self.file_extension))
    }
}

const BUILTIN_OPERATORS: [OperatorDescriptor; 1] = [OperatorDescriptor {
    id: MAP_IMPORT_OPERATOR,
    label: "Import Unreal Map",
    description: "Imports an Unreal Engine map export (FModel .json)",
    file_extension: "json",
}];

static OPERATORS: Mutex<Vec<OperatorDescriptor>> = Mutex::new(Vec::new());

fn operators() -> MutexGuard<'static, Vec<OperatorDescriptor>> {
    OPERATORS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn init() {
    let mut operators = operators();

    for operator in BUILTIN_OPERATORS {
        if !operators.iter().any(|registered| registered.id == operator.id) {
            log::debug!("Registering operator {}", operator.id);
            operators.push(operator);
        }
    }
}

pub fn shutdown() {
    let mut operators = operators();

    for operator in operators.drain(..) {
        log::debug!("Unregistering operator {}", operator.id);
    }
}

pub fn is_initialized() -> bool {
    !operators().is_empty()
}

pub fn operator(id: &str) -> Option<OperatorDescriptor> {
    operators().iter().find(|operator| operator.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // Single test: the registry is process-wide and tests run in parallel.
    #[test]
    fn lifecycle() {
        init();
        init();
        assert!(is_initialized());

        let operator = operator(MAP_IMPORT_OPERATOR).unwrap();
        assert!(operator.accepts(Path::new("maps/Hogsmeade.JSON")));
        assert!(!operator.accepts(Path::new("maps/Hogsmeade.umap")));
        assert_eq!(operators().len(), 1);

        shutdown();
        shutdown();
        assert!(!is_initialized());
        assert!(super::operator(MAP_IMPORT_OPERATOR).is_none());
    }
}
