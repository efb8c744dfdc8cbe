//! Signal rules and the trail they accumulate into.
//!
//! Rules run in a fixed order. Each rule may add to the score, raise it to a floor, append one
//! reason per fired condition, and propose a top-signal label.

use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::{ids, Reason};

mod admin;
mod approval;
mod contract;
mod gas;
mod signature;
mod strict;
mod value;


pub type Rule = fn(&TransactionIntent, &Policy, &mut SignalTrail);

/// Evaluation order. Later unconditional headlines replace earlier ones, so this order is
/// also the top-signal priority.
pub const RULES: &[Rule] = &[
    approval::run,
    contract::reputation,
    contract::age,
    value::run,
    signature::run,
    admin::run,
    gas::run,
    strict::run,
];

/// How a rule's label competes for the top-signal slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Headline {
    /// Always replace the current label.
    Overwrite,
    /// Only set while the label is still the sentinel.
    IfUnset,
    /// Replace unless the current label is the given one.
    Unless(&'static str),
}

/// Raw output of the signal rules, before clamping and verdict selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalAssessment {
    /// Unclamped accumulated score.
    pub raw_score: i32,
    pub reasons: Vec<Reason>,
    pub top_signal: String,
}

/// Append-only accumulator threaded through the rules.
#[derive(Clone, Debug)]
pub struct SignalTrail {
    score: i32,
    reasons: Vec<Reason>,
    top_signal: &'static str,
    pinned: Option<&'static str>,
}

impl Default for SignalTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalTrail {
    pub fn new() -> Self {
        Self {
            score: 0,
            reasons: Vec::new(),
            top_signal: ids::TOP_NONE,
            pinned: None,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn top_signal(&self) -> &'static str {
        self.top_signal
    }

    /// Add `delta` to the score and record the reason.
    pub fn add(&mut self, delta: i32, title: &str, detail: impl Into<String>) {
        self.score += delta;
        self.reasons.push(Reason::new(title, detail));
    }

    /// Raise the score to at least `floor` and record the reason. Never lowers the score.
    pub fn raise_to(&mut self, floor: i32, title: &str, detail: impl Into<String>) {
        self.score = self.score.max(floor);
        self.reasons.push(Reason::new(title, detail));
    }

    pub fn headline(&mut self, label: &'static str, mode: Headline) {
        let replace = match mode {
            Headline::Overwrite => true,
            Headline::IfUnset => self.top_signal == ids::TOP_NONE,
            Headline::Unless(keep) => self.top_signal != keep,
        };
        if replace {
            self.top_signal = label;
        }
    }

    /// Policy headline that takes effect after every base rule has run.
    pub fn pin_headline(&mut self, label: &'static str) {
        self.pinned = Some(label);
    }

    pub fn finish(self) -> SignalAssessment {
        SignalAssessment {
            raw_score: self.score,
            reasons: self.reasons,
            top_signal: self.pinned.unwrap_or(self.top_signal).to_string(),
        }
    }
}

/// Run every rule in order against `intent`.
pub fn run_all(intent: &TransactionIntent, policy: &Policy) -> SignalAssessment {
    let mut trail = SignalTrail::new();
    for rule in RULES {
        rule(intent, policy, &mut trail);
    }
    trail.finish()
}
