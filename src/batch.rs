//! Generate-check-retry loop producing a batch of accepted passwords.

use std::io::Write;

use rand::{CryptoRng, RngCore};

use crate::breach::{BreachChecker, BreachStatus};
use crate::error::{Error, Result};
use crate::pass::{CharClasses, Generator, Password};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub count: usize,
    pub length: usize,
    pub classes: CharClasses,
    pub check_breach: bool,
}

/// Counters for a finished batch. Passwords themselves only go to the writer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub accepted: usize,
    /// Accepted lines that carry an inconclusive-check note.
    pub annotated: usize,
    pub attempts: usize,
}

impl BatchReport {
    /// Candidates dropped because they were found in the breach corpus.
    pub fn discarded(&self) -> usize {
        self.attempts - self.accepted
    }

    pub fn summary(&self) -> Option<String> {
        match self.discarded() {
            0 => None,
            1 => Some("Note: 1 breached password was discarded.".to_string()),
            n => Some(format!("Note: {} breached passwords were discarded.", n)),
        }
    }
}

fn write_line<W: Write>(out: &mut W, password: &Password, note: Option<&str>) -> std::io::Result<()> {
    match note {
        Some(note) => writeln!(out, "{}  [{}]", password, note),
        None => writeln!(out, "{}", password),
    }
}

pub struct BatchRunner<'a, R> {
    generator: Generator<R>,
    checker: Option<&'a dyn BreachChecker>,
    max_attempts: Option<usize>,
}

impl<'a, R: RngCore + CryptoRng> BatchRunner<'a, R> {
    pub fn new(generator: Generator<R>) -> Self {
        Self {
            generator,
            checker: None,
            max_attempts: None,
        }
    }

    pub fn with_checker(mut self, checker: &'a dyn BreachChecker) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Give up with [`Error::Exhausted`] after this many candidates. Unbounded when `None`.
    pub fn max_attempts(mut self, limit: Option<usize>) -> Self {
        self.max_attempts = limit;
        self
    }

    /// Generate until `request.count` passwords are accepted, writing each
    /// accepted line to `out` as soon as it is decided.
    pub fn run<W: Write>(&mut self, request: &BatchRequest, out: &mut W) -> Result<BatchReport> {
        let checker = match (request.check_breach, self.checker) {
            (true, None) => return Err(Error::MissingChecker),
            (true, Some(checker)) => Some(checker),
            (false, _) => None,
        };

        let mut report = BatchReport::default();

        while report.accepted < request.count {
            if let Some(limit) = self.max_attempts
                && report.attempts >= limit
            {
                tracing::warn!(attempts = report.attempts, "attempt limit reached");
                return Err(Error::Exhausted {
                    attempts: report.attempts,
                });
            }

            let password = self.generator.generate(request.length, &request.classes)?;
            report.attempts += 1;

            let note = match checker.map(|c| c.check(password.as_str())) {
                None | Some(BreachStatus::Clean) => None,
                Some(BreachStatus::Breached(count)) => {
                    tracing::debug!(attempt = report.attempts, count, "discarding breached candidate");
                    continue;
                }
                Some(BreachStatus::Unknown(reason)) => {
                    tracing::warn!(attempt = report.attempts, %reason, "breach check inconclusive");
                    Some(reason)
                }
            };

            write_line(out, &password, note.as_deref())?;
            report.accepted += 1;
            if note.is_some() {
                report.annotated += 1;
            }
        }
        out.flush()?;

        tracing::info!(
            accepted = report.accepted,
            attempts = report.attempts,
            "batch complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Replays scripted statuses, then falls back to `rest`, recording every password seen.
    struct Scripted {
        script: RefCell<VecDeque<BreachStatus>>,
        rest: BreachStatus,
        seen: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(script: Vec<BreachStatus>, rest: BreachStatus) -> Self {
            Self {
                script: RefCell::new(script.into()),
                rest,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl BreachChecker for Scripted {
        fn check(&self, password: &str) -> BreachStatus {
            self.seen.borrow_mut().push(password.to_string());
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| self.rest.clone())
        }
    }

    fn runner<'a>() -> BatchRunner<'a, StdRng> {
        BatchRunner::new(Generator::new(StdRng::seed_from_u64(42)))
    }

    fn request(count: usize, length: usize, check_breach: bool) -> BatchRequest {
        BatchRequest {
            count,
            length,
            classes: CharClasses::default(),
            check_breach,
        }
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn unchecked_batch_accepts_everything() {
        let mut out = Vec::new();
        let report = runner().run(&request(3, 8, false), &mut out).unwrap();

        assert_eq!(report.accepted, 3);
        assert_eq!(report.attempts, 3);
        assert_eq!(report.summary(), None);

        let printed = lines(&out);
        assert_eq!(printed.len(), 3);
        for line in printed {
            assert_eq!(line.len(), 8);
            assert!(line.bytes().all(|b| b.is_ascii_graphic()));
        }
    }

    #[test]
    fn unchecked_batch_never_consults_checker() {
        let checker = Scripted::new(vec![], BreachStatus::Breached(1));
        let mut out = Vec::new();
        let report = runner()
            .with_checker(&checker)
            .run(&request(4, 10, false), &mut out)
            .unwrap();
        assert_eq!(report.attempts, 4);
        assert!(checker.seen.borrow().is_empty());
    }

    #[test]
    fn breached_candidate_is_discarded_and_reported() {
        let checker = Scripted::new(vec![BreachStatus::Breached(5)], BreachStatus::Clean);
        let mut out = Vec::new();
        let report = runner()
            .with_checker(&checker)
            .run(&request(2, 10, true), &mut out)
            .unwrap();

        assert_eq!(report.accepted, 2);
        assert_eq!(report.attempts, 3);
        assert_eq!(report.discarded(), 1);
        assert_eq!(
            report.summary().as_deref(),
            Some("Note: 1 breached password was discarded.")
        );

        let breached = checker.seen.borrow()[0].clone();
        let printed = lines(&out);
        assert_eq!(printed.len(), 2);
        assert!(!printed.contains(&breached));
    }

    #[test]
    fn unknown_status_is_emitted_with_annotation() {
        let checker = Scripted::new(vec![], BreachStatus::Unknown("API timeout".into()));
        let mut out = Vec::new();
        let report = runner()
            .with_checker(&checker)
            .run(&request(3, 12, true), &mut out)
            .unwrap();

        assert_eq!(report.attempts, 3);
        assert_eq!(report.discarded(), 0);
        assert_eq!(report.annotated, 3);
        let seen = checker.seen.borrow();
        let printed = lines(&out);
        assert_eq!(printed.len(), 3);
        for (line, password) in printed.iter().zip(seen.iter()) {
            assert_eq!(line, &format!("{}  [API timeout]", password));
        }
    }

    #[test]
    fn always_breached_hits_attempt_limit() {
        let checker = Scripted::new(vec![], BreachStatus::Breached(1));
        let mut out = Vec::new();
        let result = runner()
            .with_checker(&checker)
            .max_attempts(Some(25))
            .run(&request(2, 6, true), &mut out);

        assert!(matches!(result, Err(Error::Exhausted { attempts: 25 })));
        assert!(out.is_empty());
        assert_eq!(checker.seen.borrow().len(), 25);
    }

    #[test]
    fn huge_count_is_bounded_by_attempt_limit() {
        let checker = Scripted::new(vec![], BreachStatus::Breached(1));
        let mut out = Vec::new();
        let result = runner()
            .with_checker(&checker)
            .max_attempts(Some(3))
            .run(&request(usize::MAX, 8, true), &mut out);

        assert!(matches!(result, Err(Error::Exhausted { attempts: 3 })));
        assert!(out.is_empty());
    }

    #[test]
    fn mostly_breached_never_emits_breached_values() {
        let mut script = vec![BreachStatus::Breached(3); 7];
        script.insert(3, BreachStatus::Clean);
        let checker = Scripted::new(script, BreachStatus::Clean);
        let mut out = Vec::new();
        let report = runner()
            .with_checker(&checker)
            .run(&request(2, 16, true), &mut out)
            .unwrap();

        assert!(report.attempts >= 2);
        assert_eq!(report.attempts, 9);
        assert_eq!(report.discarded(), 7);

        let seen = checker.seen.borrow();
        let printed = lines(&out);
        assert_eq!(printed, vec![seen[3].clone(), seen[8].clone()]);
    }

    #[test]
    fn empty_classes_fail_before_any_attempt() {
        let checker = Scripted::new(vec![], BreachStatus::Clean);
        let mut req = request(5, 8, true);
        req.classes = CharClasses {
            upper: false,
            lower: false,
            digits: false,
            special: false,
        };
        let mut out = Vec::new();
        let result = runner().with_checker(&checker).run(&req, &mut out);

        assert!(matches!(result, Err(Error::NoCharacterClass)));
        assert!(out.is_empty());
        assert!(checker.seen.borrow().is_empty());
    }

    #[test]
    fn check_without_checker_is_a_config_error() {
        let mut out = Vec::new();
        let err = runner().run(&request(1, 8, true), &mut out).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn zero_count_is_empty_batch() {
        let mut out = Vec::new();
        let report = runner().run(&request(0, 8, false), &mut out).unwrap();
        assert_eq!(report.attempts, 0);
        assert!(out.is_empty());
    }
}
