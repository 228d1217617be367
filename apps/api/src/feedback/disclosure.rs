//! Disclosure state — which report sections are expanded.
//!
//! The composer only decides the initial state. After that a `Disclosure`
//! implementation owns it; `Accordion` is the one the service hands out.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::feedback::compose::RenderTree;

/// Contract the presentation layer needs from a disclosure component.
pub trait Disclosure {
    fn initial_open_id(&self) -> &str;
    fn is_open(&self, id: &str) -> bool;
    // Driven by the client after the initial render; the service only snapshots.
    #[allow(dead_code)]
    fn toggle(&mut self, id: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosurePolicy {
    /// Opening a section closes every other section.
    #[default]
    Single,
    /// Sections open and close independently.
    Multi,
}

impl FromStr for DisclosurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(DisclosurePolicy::Single),
            "multi" => Ok(DisclosurePolicy::Multi),
            other => Err(format!("unknown disclosure policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accordion {
    policy: DisclosurePolicy,
    initial_open_id: String,
    section_ids: Vec<String>,
    open: BTreeSet<String>,
}

/// Serializable view of an accordion's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureSnapshot {
    pub policy: DisclosurePolicy,
    pub initial_open_id: String,
    pub open: Vec<String>,
}

impl Accordion {
    /// Seeds the accordion from the tree's initial section states.
    ///
    /// A tree produced by `compose` has exactly one open section; that id becomes
    /// the initial open id.
    pub fn from_tree(tree: &RenderTree, policy: DisclosurePolicy) -> Self {
        let section_ids: Vec<String> = tree.sections.iter().map(|s| s.id.clone()).collect();
        let open: BTreeSet<String> = tree.open_section_ids().map(str::to_string).collect();
        let initial_open_id = tree
            .open_section_ids()
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            policy,
            initial_open_id,
            section_ids,
            open,
        }
    }

    /// Open section ids in section order.
    pub fn open_ids(&self) -> Vec<String> {
        self.section_ids
            .iter()
            .filter(|id| self.is_open(id.as_str()))
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> DisclosureSnapshot {
        DisclosureSnapshot {
            policy: self.policy,
            initial_open_id: self.initial_open_id().to_string(),
            open: self.open_ids(),
        }
    }
}

impl Disclosure for Accordion {
    fn initial_open_id(&self) -> &str {
        &self.initial_open_id
    }

    fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    fn toggle(&mut self, id: &str) {
        if !self.section_ids.iter().any(|s| s == id) {
            warn!("Ignoring toggle of unknown section '{id}'");
            return;
        }

        if self.open.remove(id) {
            return;
        }

        if self.policy == DisclosurePolicy::Single {
            self.open.clear();
        }
        self.open.insert(id.to_string());
    }
}
