//! Per-record processing and batch runs.

use std::collections::BTreeMap;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, info_span};

use aed_model::{CleanDocument, CleanOptions, RawRecord, SkipCategory, SkipReason, SkippedRecord};
use aed_transform::{assemble_document, extract_properties};
use aed_validate::{check_geometry, validate_document};

/// What happened to one source feature.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Accepted(CleanDocument),
    Skipped(SkipReason),
}

impl RecordOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RecordOutcome::Accepted(_))
    }
}

impl From<Result<CleanDocument, SkipReason>> for RecordOutcome {
    fn from(result: Result<CleanDocument, SkipReason>) -> Self {
        match result {
            Ok(document) => RecordOutcome::Accepted(document),
            Err(reason) => RecordOutcome::Skipped(reason),
        }
    }
}

/// Run one feature through every step.
pub fn process_record(feature: &Value, options: &CleanOptions) -> RecordOutcome {
    clean_record(feature, options).into()
}

fn clean_record(feature: &Value, options: &CleanOptions) -> Result<CleanDocument, SkipReason> {
    let record = RawRecord::from_feature(feature)?;
    let coordinate = check_geometry(&record, &options.region)?;
    let properties = extract_properties(&record)?;
    let document = assemble_document(coordinate, &properties);
    validate_document(&document)?;
    Ok(document)
}

/// Number of records skipped for one reason code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipCount {
    pub code: &'static str,
    pub label: &'static str,
    pub category: SkipCategory,
    pub count: usize,
}

/// Result of cleaning a whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanRun {
    /// Number of features read.
    pub input_count: usize,
    /// Accepted documents, in input order.
    pub accepted: Vec<CleanDocument>,
    /// Skipped features, in input order.
    pub skipped: Vec<SkippedRecord>,
}

impl CleanRun {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Accepted documents whose inspection date was kept as text.
    pub fn unparsed_date_count(&self) -> usize {
        self.accepted
            .iter()
            .filter(|document| {
                document
                    .last_checked_at
                    .as_ref()
                    .is_some_and(|date| !date.is_normalized())
            })
            .count()
    }

    /// Skips grouped by reason code, ordered by code.
    pub fn skip_counts(&self) -> Vec<SkipCount> {
        let mut counts: BTreeMap<&'static str, SkipCount> = BTreeMap::new();
        for skipped in &self.skipped {
            let reason = &skipped.reason;
            counts
                .entry(reason.code())
                .or_insert_with(|| SkipCount {
                    code: reason.code(),
                    label: reason.label(),
                    category: reason.category(),
                    count: 0,
                })
                .count += 1;
        }
        counts.into_values().collect()
    }
}

/// Clean every feature, in order.
///
/// Never fails: every feature ends up either accepted or skipped, so
/// `accepted_count() + skipped_count() == input_count`.
pub fn clean_features(features: &[Value], options: &CleanOptions) -> CleanRun {
    let span = info_span!("clean", feature_count = features.len(), region = %options.region);
    let _guard = span.enter();
    let start = Instant::now();

    let mut run = CleanRun {
        input_count: features.len(),
        ..CleanRun::default()
    };
    for (index, feature) in features.iter().enumerate() {
        match process_record(feature, options) {
            RecordOutcome::Accepted(document) => run.accepted.push(document),
            RecordOutcome::Skipped(reason) => {
                debug!(
                    record_index = index,
                    reason_code = reason.code(),
                    reason = %reason,
                    "skipped record"
                );
                run.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    info!(
        accepted = run.accepted_count(),
        skipped = run.skipped_count(),
        unparsed_dates = run.unparsed_date_count(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    run
}
