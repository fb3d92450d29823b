//! Theme override application
//!
//! A theme is a sparse `path -> value` set applied on top of an already
//! resolved tier, once per non-default mode. Targets are found through the
//! symbol table only - never by re-querying the host, which would cost a
//! scan per lookup. Override sets are shared across tiers in the payload,
//! so entries with a foreign tier prefix are expected and skipped.
//!
//! Nothing in here is fatal: every failure degrades to a skip, and the
//! returned report carries the counts with a bounded sample of missing
//! paths for the caller's summary line.

use std::collections::BTreeMap;

use weft_core::payload::ThemeOverride;
use weft_core::{Host, ModeId};

use crate::symbol_table::SymbolTable;

/// Number of skipped paths quoted in the summary line
const SKIP_SAMPLE_LIMIT: usize = 5;

/// Applied/skipped counts for one override pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideReport {
    pub applied: usize,
    pub skipped: usize,
    /// Skips that should have resolved: right prefix, but the path missed
    /// the table or the host rejected the value. Prefix mismatches are
    /// expected cross-tier noise and are not counted here.
    pub missing: usize,
    /// Up to [`SKIP_SAMPLE_LIMIT`] of the missing paths
    pub samples: Vec<String>,
}

impl OverrideReport {
    /// One summary line for the run log. The ellipsis marker appears only
    /// when more paths went missing than the sample could hold.
    pub fn summary(&self, scope: &str) -> String {
        if self.samples.is_empty() {
            format!(
                "theme overrides ({scope}): {} applied, {} skipped",
                self.applied, self.skipped
            )
        } else {
            let ellipsis = if self.missing > self.samples.len() {
                ", ..."
            } else {
                ""
            };
            format!(
                "theme overrides ({scope}): {} applied, {} skipped ({}{ellipsis})",
                self.applied,
                self.skipped,
                self.samples.join(", ")
            )
        }
    }
}

/// Apply one theme's overrides to one collection mode.
///
/// Entries whose path does not start with `"<collection_prefix>/"` belong
/// to another tier's pass over the same set and count as skipped without
/// being sampled. Overrides can only retarget variables that already
/// exist; they never create new ones.
pub fn apply_overrides(
    host: &mut dyn Host,
    mode: ModeId,
    overrides: &BTreeMap<String, ThemeOverride>,
    table: &SymbolTable,
    collection_prefix: &str,
) -> OverrideReport {
    let mut report = OverrideReport::default();
    let prefix = format!("{collection_prefix}/");

    for (path, entry) in overrides {
        if !path.starts_with(&prefix) {
            report.skipped += 1;
            continue;
        }

        let Some(target) = table.get(path) else {
            report.skipped += 1;
            report.missing += 1;
            if report.samples.len() < SKIP_SAMPLE_LIMIT {
                report.samples.push(path.clone());
            }
            continue;
        };

        match host.set_variable_value(target.handle, mode, &entry.value) {
            Ok(()) => report.applied += 1,
            Err(err) => {
                tracing::debug!("override {path} rejected by host: {err}");
                report.skipped += 1;
                report.missing += 1;
                if report.samples.len() < SKIP_SAMPLE_LIMIT {
                    report.samples.push(path.clone());
                }
            }
        }
    }

    tracing::debug!("{}", report.summary(collection_prefix));
    report
}
