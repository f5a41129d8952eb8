//! Main-code → sub-code cascade.
//!
//! A time-log entry classifies its activity with a main code and an optional
//! sub code that must belong to it. Changing the main code drops a sub code
//! whose parent is different. Setting the sub code directly is not checked
//! here: callers only offer the sub codes of the current main code.

use crate::models::time_log::TimeLogEntry;
use std::collections::HashMap;

/// Resolves the parent main code of a sub code.
pub trait CodeLookup {
    fn sub_code_parent(&self, sub_code_id: i64) -> Option<i64>;
}

impl CodeLookup for HashMap<i64, i64> {
    fn sub_code_parent(&self, sub_code_id: i64) -> Option<i64> {
        self.get(&sub_code_id).copied()
    }
}

/// Sub code to keep after the main code becomes `new_main_code_id`.
///
/// A sub code whose parent is unknown is dropped as well.
pub fn reconcile_codes_on_main_change(
    current_sub_code_id: Option<i64>,
    current_sub_codes_parent_id: Option<i64>,
    new_main_code_id: Option<i64>,
) -> Option<i64> {
    match (current_sub_code_id, current_sub_codes_parent_id) {
        (Some(sub), Some(parent)) if Some(parent) == new_main_code_id => Some(sub),
        _ => None,
    }
}

pub fn apply_main_code_change<L: CodeLookup + ?Sized>(
    entry: &mut TimeLogEntry,
    new_main_code_id: Option<i64>,
    lookup: &L,
) {
    let parent = entry.sub_code_ref.and_then(|sub| lookup.sub_code_parent(sub));

    entry.main_code_ref = new_main_code_id;
    entry.sub_code_ref =
        reconcile_codes_on_main_change(entry.sub_code_ref, parent, new_main_code_id);
}

pub fn apply_sub_code_change(entry: &mut TimeLogEntry, new_sub_code_id: Option<i64>) {
    entry.sub_code_ref = new_sub_code_id;
}
