//! Gate decision counters.
//!
//! Counters are stored as atomics in a `DashMap` keyed by sorted label pairs
//! and rendered in Prometheus text exposition format by the `/metrics`
//! handler.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use authmap_core::{AccessDecision, DenialReason};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

/// Outcome label for a gate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    NoRole,
    RoleMismatch,
    InvalidPolicy,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Allowed => "allowed",
            Outcome::NoRole => "no_role",
            Outcome::RoleMismatch => "role_mismatch",
            Outcome::InvalidPolicy => "invalid_policy",
        }
    }
}

impl From<AccessDecision> for Outcome {
    fn from(d: AccessDecision) -> Self {
        match d {
            AccessDecision::Allowed => Outcome::Allowed,
            AccessDecision::Denied(DenialReason::NoRole) => Outcome::NoRole,
            AccessDecision::Denied(DenialReason::RoleMismatch) => Outcome::RoleMismatch,
        }
    }
}

#[derive(Default)]
pub struct GateMetrics {
    pub decisions: CounterVec,
}

impl GateMetrics {
    pub fn record(&self, outcome: Outcome, route: &str) {
        self.decisions
            .inc(&[("outcome", outcome.as_str()), ("route", route)]);
    }

    /// Render all counters plus any extra gauge lines provided by callers.
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.decisions.render("authmap_gate_decisions_total", &mut out);
        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {} gauge\n{} {}", k, k, v);
        }
        out
    }
}
