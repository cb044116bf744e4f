//! Roadmap Aggregator - merges every persona's actions into one prioritized plan.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::{MitigationAction, StartBy};

/// A deduplicated roadmap line supported by one or more personas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapEntry {
    pub action: String,
    pub owner: String,
    pub theme: String,
    pub kpi: String,
    pub start_by: StartBy,
    /// Sum of contributing personas' RPNs.
    pub weight: u32,
    /// Sorted persona names, comma-separated.
    pub supported_by: String,
    /// Sorted distinct rationales, semicolon-separated.
    pub rationale: String,
    pub supporter_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RoadmapKey {
    action: String,
    owner: String,
    theme: String,
    kpi: String,
    start_by: StartBy,
}

impl RoadmapKey {
    fn of(action: &MitigationAction) -> Self {
        Self {
            action: action.action.clone(),
            owner: action.owner.clone(),
            theme: action.theme.clone(),
            kpi: action.kpi.clone(),
            start_by: action.start_by,
        }
    }
}

#[derive(Debug, Default)]
struct Group {
    weight: u32,
    personas: BTreeSet<String>,
    rationales: BTreeSet<String>,
}

/// Cross-persona action aggregation.
pub struct RoadmapAggregator;

impl RoadmapAggregator {
    /// Groups actions by (action, owner, theme, KPI, start-by) and orders the result.
    ///
    /// # Ordering
    /// Start-by bucket (most urgent first), then weight descending. Equal
    /// weights keep the order in which the group was first seen.
    ///
    /// # Edge Cases
    /// - Empty input: returns empty Vec
    /// - Same persona proposing the same key twice: RPN is summed twice, the
    ///   persona is listed once
    pub fn aggregate(actions: &[MitigationAction]) -> Vec<RoadmapEntry> {
        let mut index: HashMap<RoadmapKey, usize> = HashMap::new();
        let mut groups: Vec<(RoadmapKey, Group)> = Vec::new();

        for action in actions {
            let key = RoadmapKey::of(action);
            let slot = match index.get(&key) {
                Some(slot) => *slot,
                None => {
                    groups.push((key.clone(), Group::default()));
                    index.insert(key, groups.len() - 1);
                    groups.len() - 1
                }
            };

            let group = &mut groups[slot].1;
            group.weight += u32::from(action.rpn);
            group.personas.insert(action.persona.clone());
            group.rationales.insert(action.rationale.clone());
        }

        let mut entries: Vec<RoadmapEntry> = groups
            .into_iter()
            .map(|(key, group)| RoadmapEntry {
                action: key.action,
                owner: key.owner,
                theme: key.theme,
                kpi: key.kpi,
                start_by: key.start_by,
                weight: group.weight,
                supporter_count: group.personas.len(),
                supported_by: group.personas.into_iter().collect::<Vec<_>>().join(", "),
                rationale: group.rationales.into_iter().collect::<Vec<_>>().join("; "),
            })
            .collect();

        entries.sort_by(|a, b| {
            a.start_by
                .cmp(&b.start_by)
                .then_with(|| b.weight.cmp(&a.weight))
        });

        entries
    }
}
