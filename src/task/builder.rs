//! Turning a selection into tasks

use std::collections::HashSet;

use super::DeferredTask;
use crate::catalog::Catalog;

/// Tasks built from a selection, plus the keys that matched no candidate
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub tasks: Vec<DeferredTask>,
    pub unknown_keys: Vec<String>,
}

/// Build one queued task per selected key, in selection order.
///
/// Keys missing from `candidates` are skipped with a warning; repeated keys
/// build a single task. Nothing is executed here.
pub fn build(selected: &[String], candidates: &Catalog) -> BuildOutput {
    let mut output = BuildOutput::default();
    let mut seen = HashSet::new();

    for key in selected {
        if !seen.insert(key.as_str()) {
            continue;
        }

        match candidates.get(key) {
            Some(candidate) => output.tasks.push(DeferredTask::new(candidate.clone())),
            None => {
                tracing::warn!(
                    category = candidates.category(),
                    key = %key,
                    "skipping unknown selection"
                );
                output.unknown_keys.push(key.clone());
            }
        }
    }

    output
}
