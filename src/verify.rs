use crate::catalog::PatternEntry;
use crate::transcript::Transcript;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};

const MISSING: &str = "<missing>";

/// First line where a demo's output and its documented output disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub slug: &'static str,
    pub mismatch: Option<Mismatch>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    pub fn summary(&self) -> String {
        let failed = self.failures().count();
        format!("{} passed, {} failed", self.outcomes.len() - failed, failed)
    }
}

/// Compares produced lines with documented ones, reporting the first difference.
pub fn compare(expected: &[&str], actual: &[String]) -> Option<Mismatch> {
    let longest = expected.len().max(actual.len());
    (0..longest).find_map(|line| {
        let want = expected.get(line).copied().unwrap_or(MISSING);
        let got = actual.get(line).map(String::as_str).unwrap_or(MISSING);
        (want != got).then(|| Mismatch {
            line,
            expected: want.to_string(),
            actual: got.to_string(),
        })
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "demo panicked".to_string()
    }
}

/// Runs one demo and compares its transcript. A panicking demo becomes a
/// failed outcome; the process panic hook still reports the panic on stderr.
pub fn verify_demo(slug: &'static str, demo: fn(&mut Transcript), expected: &[&str]) -> Outcome {
    let mismatch = match panic::catch_unwind(AssertUnwindSafe(|| Transcript::capture(demo))) {
        Ok(transcript) => compare(expected, transcript.lines()),
        Err(payload) => Some(Mismatch {
            line: 0,
            expected: expected.first().copied().unwrap_or(MISSING).to_string(),
            actual: format!("panic: {}", panic_message(payload.as_ref())),
        }),
    };

    match &mismatch {
        None => tracing::debug!("{slug}: output matches"),
        Some(m) => tracing::warn!(
            "{slug}: line {} expected {:?}, got {:?}",
            m.line + 1,
            m.expected,
            m.actual
        ),
    }
    Outcome { slug, mismatch }
}

pub fn verify_entry(entry: &PatternEntry) -> Outcome {
    verify_demo(entry.slug, entry.demo, entry.expected)
}

/// Runs every demo on the rayon pool; outcomes keep the input order.
pub fn verify_all(entries: &[&PatternEntry]) -> Report {
    let outcomes = entries.par_iter().map(|entry| verify_entry(entry)).collect();
    Report { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn prints_hello(out: &mut Transcript) {
        out.line("hello");
    }

    fn panics(_out: &mut Transcript) {
        panic!("boom");
    }

    #[test]
    fn test_compare_equal() {
        assert_eq!(compare(&["a", "b"], &["a".to_string(), "b".to_string()]), None);
    }

    #[test]
    fn test_compare_reports_first_difference() {
        let mismatch = compare(&["a", "b", "c"], &["a".to_string(), "x".to_string()]).unwrap();
        assert_eq!(mismatch.line, 1);
        assert_eq!(mismatch.expected, "b");
        assert_eq!(mismatch.actual, "x");
    }

    #[test]
    fn test_compare_missing_and_extra_lines() {
        let short = compare(&["a", "b"], &["a".to_string()]).unwrap();
        assert_eq!(short.actual, MISSING);

        let long = compare(&["a"], &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(long.expected, MISSING);
        assert_eq!(long.actual, "b");
    }

    #[test]
    fn test_wrong_output_fails() {
        let outcome = verify_demo("hello", prints_hello, &["goodbye"]);
        assert!(!outcome.passed());
    }

    #[test]
    fn test_panicking_demo_is_a_failure() {
        let outcome = verify_demo("boom", panics, &["anything"]);
        let mismatch = outcome.mismatch.unwrap();
        assert_eq!(mismatch.actual, "panic: boom");
    }

    #[test]
    fn test_whole_catalog_passes_in_order() {
        let entries: Vec<&PatternEntry> = CATALOG.iter().collect();
        let report = verify_all(&entries);

        assert!(report.passed(), "{:?}", report.failures().collect::<Vec<_>>());
        assert_eq!(report.summary(), format!("{} passed, 0 failed", CATALOG.len()));
        let slugs: Vec<_> = report.outcomes.iter().map(|o| o.slug).collect();
        let expected: Vec<_> = CATALOG.iter().map(|e| e.slug).collect();
        assert_eq!(slugs, expected);
    }
}
