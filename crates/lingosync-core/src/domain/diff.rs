//! Structural diff engine
//!
//! Classifies every `(language, key)` pair across two translation sets into
//! local-only, remote-only, or conflicting. Equal values (including both
//! sides empty) produce no output at all.
//!
//! Absence is distinct from the empty string: a key whose local value is
//! `""` and whose remote value is missing is still local-only, and two `""`
//! values are equal, not conflicting.

use std::collections::BTreeSet;

use super::merge::{MergeDecision, MergeStrategy, SyncMerge};
use super::translation::{ConflictEntry, DiffResult, Entry, TranslationSet};

/// Compute the three-way classification of `local` vs. `remote`.
///
/// Output ordering is language-major, then key-sorted, which falls out of the
/// `BTreeMap`/`BTreeSet` iteration order; no explicit sort pass is needed.
/// Runs in O(total distinct keys across both sets).
pub fn compute_diff(local: &TranslationSet, remote: &TranslationSet) -> DiffResult {
    let mut result = DiffResult::default();

    let languages: BTreeSet<&str> = local.languages().chain(remote.languages()).collect();

    for language in languages {
        let keys: BTreeSet<&str> = local
            .language(language)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
            .chain(
                remote
                    .language(language)
                    .into_iter()
                    .flat_map(|m| m.keys().map(String::as_str)),
            )
            .collect();

        for key in keys {
            let local_value = local.get(language, key);
            let remote_value = remote.get(language, key);

            match SyncMerge.resolve(local_value, remote_value) {
                MergeDecision::UseLocal => result.local_only.push(Entry {
                    language: language.to_string(),
                    key: key.to_string(),
                    value: local_value.unwrap_or_default().to_string(),
                }),
                MergeDecision::UseRemote => result.remote_only.push(Entry {
                    language: language.to_string(),
                    key: key.to_string(),
                    value: remote_value.unwrap_or_default().to_string(),
                }),
                MergeDecision::Conflict => result.conflicts.push(ConflictEntry {
                    language: language.to_string(),
                    key: key.to_string(),
                    local_value: local_value.unwrap_or_default().to_string(),
                    remote_value: remote_value.unwrap_or_default().to_string(),
                }),
                // Equal values need no action; Preserved is pull-only.
                MergeDecision::Drop | MergeDecision::Preserved => {}
            }
        }
    }

    result
}
