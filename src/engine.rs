//! Record matching engine: pairs control rows to test rows with a
//! bounded-diff greedy search, then orders the paired output

use crate::error::{Result, TabalignError};
use crate::partition::PartitionIndex;
use crate::record::{field_identifier, Dataset, Record};
use crate::render;
use serde::Serialize;
use std::cmp::Ordering;

/// One unit of aligned output. At most one side is ever absent.
#[derive(Debug, Clone, Copy)]
pub enum Pair<'a> {
    Matched(&'a Record, &'a Record),
    ControlOnly(&'a Record),
    TestOnly(&'a Record),
}

impl<'a> Pair<'a> {
    pub fn control(&self) -> Option<&'a Record> {
        match self {
            Pair::Matched(control, _) | Pair::ControlOnly(control) => Some(control),
            Pair::TestOnly(_) => None,
        }
    }

    pub fn test(&self) -> Option<&'a Record> {
        match self {
            Pair::Matched(_, test) | Pair::TestOnly(test) => Some(test),
            Pair::ControlOnly(_) => None,
        }
    }

    /// Whichever side is present, control preferred. Used for output ordering.
    pub fn present(&self) -> &'a Record {
        match self {
            Pair::Matched(control, _) | Pair::ControlOnly(control) => control,
            Pair::TestOnly(test) => test,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Pair::Matched(..))
    }
}

/// Pairing statistics for one run. Returned with the result rather than
/// accumulated in shared state, so runs stay independent.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MatchStats {
    pub matched: usize,
    pub control_only: usize,
    pub test_only: usize,
    /// Candidate pairs examined across all partitions and tolerance levels.
    pub comparisons: u64,
}

/// Column layout for one comparison run, resolved against both datasets.
///
/// `must` holds the column indices of the must-match fields in the order the
/// caller gave them; `optional` holds every other column in dataset order.
#[derive(Debug, Clone)]
pub struct MatchFields {
    pub must: Vec<usize>,
    pub optional: Vec<usize>,
}

impl MatchFields {
    /// Validate both datasets against each other and resolve the raw
    /// must-match header strings to column indices.
    ///
    /// A column-count mismatch is fatal. A must-match header whose normalized
    /// identifier is missing from either dataset is fatal, and every offending
    /// field is reported at once. Same count but different identifier text is
    /// only warned about; matching proceeds positionally on the assumption
    /// that column N of control corresponds to column N of test.
    pub fn resolve(control: &Dataset, test: &Dataset, must_match: &[String]) -> Result<Self> {
        if control.column_count() != test.column_count() {
            return Err(TabalignError::column_count_mismatch(
                control.column_count(),
                test.column_count(),
            ));
        }

        if control.fields().keys().ne(test.fields().keys()) {
            log::warn!(
                "column headers not equal, matching positionally: control {:?}, test {:?}",
                control.fields().keys().collect::<Vec<_>>(),
                test.fields().keys().collect::<Vec<_>>(),
            );
        }

        let mut must = Vec::with_capacity(must_match.len());
        let mut missing = Vec::new();
        for raw in must_match {
            let id = field_identifier(raw);
            match (control.field_index(&id), test.field_index(&id)) {
                (Some(index), Some(_)) => must.push(index),
                _ => missing.push(id),
            }
        }
        if !missing.is_empty() {
            return Err(TabalignError::unknown_must_match(missing));
        }

        let optional = (0..control.column_count())
            .filter(|index| !must.contains(index))
            .collect();

        Ok(Self { must, optional })
    }
}

/// The pairs emitted by one matching pass, plus its statistics.
pub struct MatchOutcome<'a> {
    pub pairs: Vec<Pair<'a>>,
    pub stats: MatchStats,
}

/// Pair up two datasets partition by partition.
///
/// Partitions are visited in control-side first-appearance order, then any
/// keys present only on the test side. Within a partition the greedy
/// bounded-diff search runs; a key missing from one side degenerates to an
/// empty group, so its records all come out one-sided.
pub fn match_datasets<'a>(
    control: &'a Dataset,
    test: &'a Dataset,
    fields: &MatchFields,
) -> MatchOutcome<'a> {
    let control_index = PartitionIndex::build(control, &fields.must);
    let test_index = PartitionIndex::build(test, &fields.must);

    let mut pairs = Vec::with_capacity(control.record_count().max(test.record_count()));
    let mut stats = MatchStats::default();

    let test_only_keys = test_index.keys().filter(|key| !control_index.contains(key));
    let keys: Vec<&Vec<String>> = control_index.keys().chain(test_only_keys).collect();

    for key in keys {
        let mut controls = control_index.group(key).to_vec();
        let mut tests = test_index.group(key).to_vec();
        log::debug!(
            "partition {:?}: {} control x {} test",
            key,
            controls.len(),
            tests.len()
        );
        match_partition(&mut controls, &mut tests, fields, &mut pairs, &mut stats);
    }

    MatchOutcome { pairs, stats }
}

/// Greedy bounded-diff bipartite match within one partition.
///
/// The outer loop raises the tolerance (allowed optional-field differences)
/// from zero to the optional-field count, so exact matches are claimed before
/// looser ones. Within a tolerance level both sides are scanned in current
/// working order and the first qualifying candidate wins; after a match the
/// scan resumes at the next control record instead of restarting. Results are
/// deliberately a function of input row order, not a minimum-cost assignment.
///
/// Matched records are swept out of the unmatched region in O(1) by swapping
/// with the region boundary and advancing it; the front of each working
/// vector accumulates excluded records and is never rescanned.
fn match_partition<'a>(
    controls: &mut Vec<&'a Record>,
    tests: &mut Vec<&'a Record>,
    fields: &MatchFields,
    pairs: &mut Vec<Pair<'a>>,
    stats: &mut MatchStats,
) {
    let mut controls_start = 0;
    let mut tests_start = 0;

    for tolerance in 0..=fields.optional.len() {
        let mut i = controls_start;
        while i < controls.len() {
            let control = controls[i];

            let mut j = tests_start;
            while j < tests.len() {
                let test = tests[j];

                stats.comparisons += 1;
                if record_matches(control, test, fields, tolerance) {
                    pairs.push(Pair::Matched(control, test));
                    stats.matched += 1;

                    controls[i] = controls[controls_start];
                    controls_start += 1;
                    tests[j] = tests[tests_start];
                    tests_start += 1;
                    break;
                }
                j += 1;
            }

            i += 1;
        }
    }

    for &control in &controls[controls_start..] {
        pairs.push(Pair::ControlOnly(control));
        stats.control_only += 1;
    }
    for &test in &tests[tests_start..] {
        pairs.push(Pair::TestOnly(test));
        stats.test_only += 1;
    }
}

/// A candidate pair qualifies when every must-match column is equal (checked
/// again here even though partitioning guarantees it) and at most `tolerance`
/// optional columns differ. Comparison is exact equality on the trimmed cell
/// text; no case folding or numeric coercion.
fn record_matches(
    control: &Record,
    test: &Record,
    fields: &MatchFields,
    tolerance: usize,
) -> bool {
    for &index in &fields.must {
        if control.value(index) != test.value(index) {
            return false;
        }
    }

    let mut diffs = 0;
    for &index in &fields.optional {
        if control.value(index) != test.value(index) {
            diffs += 1;
            if diffs > tolerance {
                return false;
            }
        }
    }
    true
}

/// Impose the output order: with a non-empty must-match set, a stable sort by
/// the must-match values of whichever side is present, field by field,
/// ascending. Ties keep emission order. With no must-match set the emission
/// order stands, since there is no meaningful global key to sort by.
pub fn order_pairs(pairs: &mut [Pair<'_>], must: &[usize]) {
    if must.is_empty() {
        return;
    }

    pairs.sort_by(|a, b| {
        let a_record = a.present();
        let b_record = b.present();
        for &index in must {
            match a_record.value(index).cmp(b_record.value(index)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    });
}

/// The externally visible output of one comparison run.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Total pairs emitted: matched plus one-sided.
    pub pair_count: usize,
    #[serde(flatten)]
    pub stats: MatchStats,
    /// Aligned tab-separated text, ready to paste into a spreadsheet.
    pub text: String,
}

/// Run the whole pipeline: parse both blobs, validate, partition, match,
/// order, and render.
pub fn align_for_comparison(
    control_raw: &str,
    test_raw: &str,
    must_match: &[String],
) -> Result<Comparison> {
    let control = Dataset::parse(control_raw)?;
    let test = Dataset::parse(test_raw)?;
    let fields = MatchFields::resolve(&control, &test, must_match)?;

    let MatchOutcome { mut pairs, stats } = match_datasets(&control, &test, &fields);
    order_pairs(&mut pairs, &fields.must);

    let text = render::render(&control, &test, &pairs);
    log::info!(
        "aligned {} pairs ({} matched, {} control-only, {} test-only) in {} comparisons",
        pairs.len(),
        stats.matched,
        stats.control_only,
        stats.test_only,
        stats.comparisons,
    );

    Ok(Comparison {
        pair_count: pairs.len(),
        stats,
        text,
    })
}
