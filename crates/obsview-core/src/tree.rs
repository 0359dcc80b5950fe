//! Flat observation list -> ordered forest

use crate::config::BuilderConfig;
use crate::metrics::{estimate_cost, latency_display};
use crate::types::ObservationNode;
use obsview_wire::ObservationRecord;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Build the observation forest for one trace.
///
/// Every record becomes exactly one node. A record whose parent is absent,
/// unknown, or itself becomes a root. Roots and siblings keep input order.
/// When ids collide, parent references resolve to the last record with that id.
/// A parent cycle is cut at its earliest member in input order, which becomes a root.
pub fn build(records: &[ObservationRecord], config: &BuilderConfig) -> Vec<ObservationNode> {
    // Pass 1: materialize nodes and index ids
    let mut slots: Vec<Option<ObservationNode>> = Vec::with_capacity(records.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut duplicates = 0usize;

    for (idx, record) in records.iter().enumerate() {
        let node = ObservationNode::from_record(
            record,
            config.rules.classify(&record.kind),
            latency_display(&record.start_time, &record.end_time),
            estimate_cost(record.prompt_tokens, record.completion_tokens, config.unit_rate),
        );
        slots.push(Some(node));
        if index.insert(record.id.as_str(), idx).is_some() {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        warn!(duplicates, "duplicate observation ids; last record wins for parent lookups");
    }

    // Pass 2: resolve parents
    let mut orphans = 0usize;
    let mut parents: Vec<Option<usize>> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let parent_id = record.parent_observation_id.as_deref()?;
            match index.get(parent_id) {
                Some(&parent) if parent != idx => Some(parent),
                Some(_) => None,
                None => {
                    orphans += 1;
                    None
                }
            }
        })
        .collect();

    if orphans > 0 {
        debug!(orphans, "observations with unknown parents promoted to roots");
    }

    break_cycles(&mut parents);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    for (idx, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(idx),
            None => roots.push(idx),
        }
    }

    // Attach children bottom-up so each node owns finished subtrees
    for idx in post_order(&roots, &children) {
        let kids: Vec<ObservationNode> = children[idx]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(node) = slots[idx].as_mut() {
            node.children = kids;
        }
    }

    let forest: Vec<ObservationNode> = roots.iter().filter_map(|&root| slots[root].take()).collect();
    debug!(records = records.len(), roots = forest.len(), "built observation tree");
    forest
}

fn break_cycles(parents: &mut [Option<usize>]) {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; parents.len()];
    for start in 0..parents.len() {
        let mut path = Vec::new();
        let mut current = start;
        loop {
            match marks[current] {
                Mark::Done => break,
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&p| p == current) {
                        if let Some(&cut) = path[pos..].iter().min() {
                            warn!(position = cut, "observation parent cycle; promoting to root");
                            parents[cut] = None;
                        }
                    }
                    break;
                }
                Mark::Unvisited => {
                    marks[current] = Mark::OnPath;
                    path.push(current);
                    match parents[current] {
                        Some(parent) => current = parent,
                        None => break,
                    }
                }
            }
        }
        for idx in path {
            marks[idx] = Mark::Done;
        }
    }
}

fn post_order(roots: &[usize], children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((idx, expanded)) = stack.pop() {
        if expanded {
            order.push(idx);
            continue;
        }
        stack.push((idx, true));
        for &child in children[idx].iter().rev() {
            stack.push((child, false));
        }
    }
    order
}

/// Group records by trace id in first-seen order, keeping input order within each group
pub fn partition_by_trace(records: &[ObservationRecord]) -> Vec<(String, Vec<ObservationRecord>)> {
    let mut groups: Vec<(String, Vec<ObservationRecord>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let pos = *positions.entry(record.trace_id.as_str()).or_insert_with(|| {
            groups.push((record.trace_id.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(record.clone());
    }

    if groups.len() > 1 {
        warn!(traces = groups.len(), "observation list spans multiple traces");
    }
    groups
}

/// Depth-first pre-order iterator over a forest
pub struct Walk<'a> {
    stack: Vec<&'a ObservationNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ObservationNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

pub fn walk(forest: &[ObservationNode]) -> Walk<'_> {
    Walk {
        stack: forest.iter().rev().collect(),
    }
}

/// First node with `id` in pre-order
pub fn find<'a>(forest: &'a [ObservationNode], id: &str) -> Option<&'a ObservationNode> {
    walk(forest).find(|node| node.id == id)
}

/// Total nodes in the forest
pub fn count(forest: &[ObservationNode]) -> usize {
    walk(forest).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObservationType;

    fn rec(id: &str, parent: Option<&str>, kind: &str) -> ObservationRecord {
        let record = ObservationRecord::new(id, "trace-1", kind, format!("step {}", id));
        match parent {
            Some(parent) => record.with_parent(parent),
            None => record,
        }
    }

    fn ids(nodes: &[ObservationNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let forest = build(&[], &BuilderConfig::new());
        assert!(forest.is_empty());
    }

    #[test]
    fn test_scenario_roots_and_classification() {
        let records = vec![
            rec("a", None, "LLM call"),
            rec("b", Some("a"), "tool-event"),
            rec("c", Some("zzz"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["a", "c"]);
        assert_eq!(ids(&forest[0].children), vec!["b"]);
        assert!(forest[1].is_leaf());
        assert_eq!(forest[0].classified_type, ObservationType::Generation);
        assert_eq!(forest[0].children[0].classified_type, ObservationType::Event);
        assert_eq!(forest[1].classified_type, ObservationType::Span);
    }

    #[test]
    fn test_child_before_parent_in_input() {
        let records = vec![
            rec("child", Some("root"), "span"),
            rec("root", None, "span"),
            rec("grandchild", Some("child"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["root"]);
        assert_eq!(ids(&forest[0].children), vec!["child"]);
        assert_eq!(ids(&forest[0].children[0].children), vec!["grandchild"]);
    }

    #[test]
    fn test_sibling_order_follows_input() {
        let records = vec![
            rec("p", None, "span"),
            rec("z", Some("p"), "span"),
            rec("q", None, "span"),
            rec("a", Some("p"), "span"),
            rec("m", Some("p"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["p", "q"]);
        assert_eq!(ids(&forest[0].children), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_self_reference_is_root() {
        let records = vec![rec("a", Some("a"), "span"), rec("b", Some("a"), "span")];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["a"]);
        assert_eq!(ids(&forest[0].children), vec!["b"]);
    }

    #[test]
    fn test_cycle_cut_at_first_member() {
        let records = vec![
            rec("x", None, "span"),
            rec("a", Some("b"), "span"),
            rec("b", Some("a"), "span"),
            rec("tail", Some("b"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["x", "a"]);
        assert_eq!(ids(&forest[1].children), vec!["b"]);
        assert_eq!(ids(&forest[1].children[0].children), vec!["tail"]);
        assert_eq!(count(&forest), records.len());
    }

    #[test]
    fn test_cycle_reached_through_tail() {
        let records = vec![
            rec("tail", Some("c2"), "span"),
            rec("c1", Some("c2"), "span"),
            rec("c2", Some("c1"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(ids(&forest), vec!["c1"]);
        assert_eq!(count(&forest), 3);
    }

    #[test]
    fn test_duplicate_ids_last_wins_for_lookup() {
        let records = vec![
            rec("dup", None, "span"),
            rec("dup", None, "generation"),
            rec("kid", Some("dup"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        assert_eq!(forest.len(), 2);
        assert!(forest[0].is_leaf());
        assert_eq!(forest[1].classified_type, ObservationType::Generation);
        assert_eq!(ids(&forest[1].children), vec!["kid"]);
        assert_eq!(count(&forest), 3);
    }

    #[test]
    fn test_derived_fields() {
        let records = vec![rec("g", None, "generation")
            .with_times("2024-05-01T10:00:00Z", "2024-05-01T10:00:02.25Z")
            .with_tokens(Some(100), Some(50))];
        let forest = build(&records, &BuilderConfig::new());

        let node = &forest[0];
        assert_eq!(node.latency_display, "2.25s");
        let cost = node.estimated_cost.unwrap();
        assert!((cost - 0.0003).abs() < 1e-12);
    }

    #[test]
    fn test_custom_unit_rate() {
        let config = BuilderConfig::new().with_unit_rate(0.001).unwrap();
        let records = vec![rec("g", None, "llm").with_tokens(Some(3), Some(7))];
        let forest = build(&records, &config);
        let cost = forest[0].estimated_cost.unwrap();
        assert!((cost - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let records = vec![
            rec("a", None, "span"),
            rec("b", Some("a"), "event"),
            rec("c", Some("missing"), "llm"),
        ];
        let snapshot = records.clone();
        let config = BuilderConfig::new();

        let first = build(&records, &config);
        let second = build(&records, &config);

        assert_eq!(records, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_and_find() {
        let records = vec![
            rec("a", None, "span"),
            rec("b", Some("a"), "span"),
            rec("c", None, "span"),
            rec("d", Some("b"), "span"),
        ];
        let forest = build(&records, &BuilderConfig::new());

        let order: Vec<_> = walk(&forest).map(|n| n.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "d", "c"]);
        assert_eq!(find(&forest, "d").map(|n| n.id.as_str()), Some("d"));
        assert!(find(&forest, "nope").is_none());
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut records = vec![rec("n0", None, "span")];
        for i in 1..100_000 {
            records.push(rec(&format!("n{}", i), Some(&format!("n{}", i - 1)), "span"));
        }
        let forest = build(&records, &BuilderConfig::new());
        assert_eq!(forest.len(), 1);
        assert_eq!(count(&forest), 100_000);
        assert!(find(&forest, "n99999").is_some_and(|node| node.is_leaf()));
        drop(forest);
    }

    #[test]
    fn test_partition_by_trace() {
        let records = vec![
            ObservationRecord::new("a", "t2", "span", "a"),
            ObservationRecord::new("b", "t1", "span", "b"),
            ObservationRecord::new("c", "t2", "span", "c"),
        ];
        let groups = partition_by_trace(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "t2");
        assert_eq!(ids_of(&groups[0].1), vec!["a", "c"]);
        assert_eq!(groups[1].0, "t1");
        assert_eq!(ids_of(&groups[1].1), vec!["b"]);
    }

    fn ids_of(records: &[ObservationRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }
}
