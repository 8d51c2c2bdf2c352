//! Read-only graph walks over persisted causal edges.
//!
//! Inference writes edges from a memory toward the earlier memories that
//! explain it, so "why did X happen" follows X's outgoing edges and "what
//! else needs updating if X changes" follows the incoming ones. Both walks
//! build a petgraph DiGraph from the store's edge table, skip cycles via a
//! visited set, and cap depth at [`MAX_TRAVERSAL_DEPTH`].

use std::collections::{HashMap, HashSet, VecDeque};

use engram_core::constants::MAX_TRAVERSAL_DEPTH;
use engram_core::errors::EngramResult;
use engram_core::memory::{CausalEdge, CausalRelation};
use engram_core::traits::MemoryStore;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// One memory reached during a traversal.
#[derive(Debug, Clone)]
pub struct TraversalNode {
    pub memory_id: String,
    pub depth: usize,
    pub relation: CausalRelation,
    /// Product of edge confidences along the path from the origin.
    pub path_confidence: f64,
}

/// Traversal output, origin excluded, breadth-first order.
#[derive(Debug, Clone)]
pub struct TraversalResult {
    pub origin_id: String,
    pub nodes: Vec<TraversalNode>,
    pub max_depth_reached: usize,
}

struct EdgeWeight {
    relation: CausalRelation,
    confidence: f64,
}

fn build_graph(edges: &[CausalEdge]) -> (DiGraph<String, EdgeWeight>, HashMap<String, NodeIndex>) {
    let mut graph = DiGraph::new();
    let mut index: HashMap<String, NodeIndex> = HashMap::new();

    for edge in edges {
        // Only causal relations participate in chains; Related/Contradicts
        // are associative.
        if !edge.relation.is_causal() {
            continue;
        }
        let source = *index
            .entry(edge.source_id.clone())
            .or_insert_with(|| graph.add_node(edge.source_id.clone()));
        let target = *index
            .entry(edge.target_id.clone())
            .or_insert_with(|| graph.add_node(edge.target_id.clone()));
        graph.add_edge(
            source,
            target,
            EdgeWeight {
                relation: edge.relation,
                confidence: edge.confidence,
            },
        );
    }

    (graph, index)
}

fn walk(
    graph: &DiGraph<String, EdgeWeight>,
    start: NodeIndex,
    origin_id: &str,
    direction: Direction,
    max_depth: usize,
) -> TraversalResult {
    let max_depth = max_depth.min(MAX_TRAVERSAL_DEPTH);
    let mut result = TraversalResult {
        origin_id: origin_id.to_string(),
        nodes: Vec::new(),
        max_depth_reached: 0,
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    visited.insert(start);

    let mut queue = VecDeque::new();
    queue.push_back((start, 0usize, 1.0f64));

    while let Some((current, depth, path_confidence)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for edge_ref in graph.edges_directed(current, direction) {
            let neighbor = match direction {
                Direction::Outgoing => edge_ref.target(),
                Direction::Incoming => edge_ref.source(),
            };
            if !visited.insert(neighbor) {
                continue;
            }
            let weight = edge_ref.weight();
            let new_depth = depth + 1;
            let new_confidence = path_confidence * weight.confidence;
            result.max_depth_reached = result.max_depth_reached.max(new_depth);
            result.nodes.push(TraversalNode {
                memory_id: graph[neighbor].clone(),
                depth: new_depth,
                relation: weight.relation,
                path_confidence: new_confidence,
            });
            queue.push_back((neighbor, new_depth, new_confidence));
        }
    }

    result
}

/// Explain a memory's causal chain: follow its outgoing causal edges toward
/// the memories that explain it, answering "why did X happen".
pub fn explain_chain(
    store: &dyn MemoryStore,
    memory_id: &str,
    max_depth: usize,
) -> EngramResult<TraversalResult> {
    let edges = store.all_edges()?;
    let (graph, index) = build_graph(&edges);
    let Some(&start) = index.get(memory_id) else {
        return Ok(TraversalResult {
            origin_id: memory_id.to_string(),
            nodes: vec![],
            max_depth_reached: 0,
        });
    };
    Ok(walk(&graph, start, memory_id, Direction::Outgoing, max_depth))
}

/// Impact analysis: walk incoming causal edges toward the memories that
/// depend on this one, answering "what else needs updating if X changes".
pub fn impact_set(
    store: &dyn MemoryStore,
    memory_id: &str,
    max_depth: usize,
) -> EngramResult<TraversalResult> {
    let edges = store.all_edges()?;
    let (graph, index) = build_graph(&edges);
    let Some(&start) = index.get(memory_id) else {
        return Ok(TraversalResult {
            origin_id: memory_id.to_string(),
            nodes: vec![],
            max_depth_reached: 0,
        });
    };
    Ok(walk(&graph, start, memory_id, Direction::Incoming, max_depth))
}
