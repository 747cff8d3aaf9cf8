//! Swipeable job deck for the browse view.
//!
//! A horizontal drag past the threshold is a decision: right saves the job,
//! left skips it. Anything shorter springs back and changes nothing.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::job::Job;

pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Save,
    Skip,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwipeOutcome {
    Saved,
    Skipped,
    SpringBack,
}

#[derive(Debug, Error, PartialEq)]
pub enum DeckError {
    #[error("No jobs left in the deck")]
    Exhausted,
}

/// Maps a horizontal drag displacement to a decision, if it crosses the threshold.
pub fn classify_drag(dx: f64, threshold_px: f64) -> Option<Decision> {
    if dx > threshold_px {
        Some(Decision::Save)
    } else if dx < -threshold_px {
        Some(Decision::Skip)
    } else {
        None
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeckView {
    pub index: usize,
    pub total: usize,
    pub remaining: usize,
    pub done: bool,
    pub current: Option<Job>,
    pub saved: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct JobDeck {
    jobs: Arc<[Job]>,
    index: usize,
    saved: BTreeSet<String>,
    threshold_px: f64,
}

impl JobDeck {
    pub fn new(jobs: Arc<[Job]>, threshold_px: f64) -> Self {
        Self {
            jobs,
            index: 0,
            saved: BTreeSet::new(),
            threshold_px,
        }
    }

    pub fn current(&self) -> Option<&Job> {
        self.jobs.get(self.index)
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.jobs.len()
    }

    /// Applies a released drag gesture.
    pub fn drag(&mut self, dx: f64) -> Result<SwipeOutcome, DeckError> {
        if self.is_done() {
            return Err(DeckError::Exhausted);
        }
        match classify_drag(dx, self.threshold_px) {
            Some(decision) => self.decide(decision),
            None => Ok(SwipeOutcome::SpringBack),
        }
    }

    /// Applies a button tap. No threshold involved.
    pub fn decide(&mut self, decision: Decision) -> Result<SwipeOutcome, DeckError> {
        let job = self.current().ok_or(DeckError::Exhausted)?;
        let outcome = match decision {
            Decision::Save => {
                let id = job.id.clone();
                self.saved.insert(id);
                SwipeOutcome::Saved
            }
            Decision::Skip => SwipeOutcome::Skipped,
        };
        self.index += 1;
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.saved.clear();
    }

    pub fn view(&self) -> DeckView {
        DeckView {
            index: self.index,
            total: self.jobs.len(),
            remaining: self.jobs.len().saturating_sub(self.index),
            done: self.is_done(),
            current: self.current().cloned(),
            saved: self.saved.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::default_jobs;

    fn deck() -> JobDeck {
        let jobs: Arc<[Job]> = default_jobs().unwrap().into();
        JobDeck::new(jobs, DEFAULT_SWIPE_THRESHOLD_PX)
    }

    #[test]
    fn test_drag_past_threshold_saves_and_advances() {
        let mut deck = deck();
        let first = deck.current().unwrap().id.clone();

        assert_eq!(deck.drag(120.0), Ok(SwipeOutcome::Saved));
        assert_eq!(deck.view().index, 1);
        assert_eq!(deck.view().saved, vec![first]);
    }

    #[test]
    fn test_short_drag_springs_back() {
        let mut deck = deck();
        assert_eq!(deck.drag(40.0), Ok(SwipeOutcome::SpringBack));
        assert_eq!(deck.view().index, 0);
        assert!(deck.view().saved.is_empty());
    }

    #[test]
    fn test_left_drag_skips_without_saving() {
        let mut deck = deck();
        assert_eq!(deck.drag(-150.0), Ok(SwipeOutcome::Skipped));
        assert_eq!(deck.view().index, 1);
        assert!(deck.view().saved.is_empty());
    }

    #[test]
    fn test_threshold_itself_is_not_a_decision() {
        assert_eq!(classify_drag(100.0, 100.0), None);
        assert_eq!(classify_drag(-100.0, 100.0), None);
        assert_eq!(classify_drag(100.5, 100.0), Some(Decision::Save));
        assert_eq!(classify_drag(f64::NAN, 100.0), None);
    }

    #[test]
    fn test_exhausted_deck_rejects_decisions() {
        let mut deck = deck();
        let total = deck.view().total;
        for _ in 0..total {
            deck.decide(Decision::Skip).unwrap();
        }
        assert!(deck.is_done());
        assert!(deck.current().is_none());
        assert_eq!(deck.decide(Decision::Save), Err(DeckError::Exhausted));
        assert_eq!(deck.drag(5.0), Err(DeckError::Exhausted));
        assert_eq!(deck.view().remaining, 0);
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut deck = deck();
        deck.decide(Decision::Save).unwrap();
        deck.decide(Decision::Save).unwrap();
        deck.reset();
        assert_eq!(deck.view().index, 0);
        assert!(deck.view().saved.is_empty());
    }

    #[test]
    fn test_empty_deck_starts_done() {
        let deck = JobDeck::new(Vec::<Job>::new().into(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert!(deck.is_done());
        assert!(deck.view().current.is_none());
    }
}
