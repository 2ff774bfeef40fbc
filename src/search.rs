use crate::{Action, State};
use log::{debug, trace};
use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Default bound on plan length before the search gives up.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// An ordered action sequence together with its total cost.
///
/// An empty plan with cost 0 means the goal was already satisfied by the
/// start state.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// The actions to perform, in order.
    pub actions: Vec<Action>,
    /// The sum of the contained actions' costs.
    pub cost: u32,
}

impl Plan {
    /// True if no actions are needed.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions in the plan.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// The action names in order, handy for logging and assertions.
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Trait defining the interface for search algorithms used in GOAP.
///
/// Implementations explore the implicit graph whose nodes are world states
/// and whose edges are applicable actions, looking for a cheapest path to a
/// state that satisfies the goal. Returning `None` means no plan exists
/// within the algorithm's budget; it is a normal outcome, not an error.
///
/// The `Send + Sync` bound keeps planners shareable across threads; a search
/// owns all of its working state, so independent plans can run concurrently.
pub trait SearchAlgorithm: Send + Sync {
    /// Finds a cheapest action sequence from `start` to a state satisfying
    /// `goal`, or `None` if there is none within budget.
    fn search(&self, actions: &[Action], start: &State, goal: &State) -> Option<Plan>;
}

/// A trait for heuristic functions used to guide the search.
pub trait HeuristicStrategy: Send + Sync {
    /// Estimates the remaining cost from `state` to `goal`.
    fn estimate(&self, state: &State, goal: &State) -> u32;
}

/// Default heuristic: the number of goal propositions not yet satisfied.
///
/// A proposition counts only if it is genuinely unsatisfied under the goal
/// rule (boolean mismatch, or integer below its threshold), not merely
/// different, so an integer already past its threshold contributes nothing.
/// With every unmet proposition needing at least one action to fix, the
/// estimate stays a lower bound for catalogues whose costs are >= 1.
pub struct GoalDistanceHeuristic;

impl HeuristicStrategy for GoalDistanceHeuristic {
    fn estimate(&self, state: &State, goal: &State) -> u32 {
        goal.values()
            .iter()
            .filter(|(key, required)| !state.meets(key, **required))
            .count() as u32
    }
}

/// Zero heuristic for algorithms like Dijkstra that don't use heuristics.
pub struct ZeroHeuristic;

impl HeuristicStrategy for ZeroHeuristic {
    fn estimate(&self, _state: &State, _goal: &State) -> u32 {
        0
    }
}

/// A frontier entry: a reachable state plus the path that got there.
#[derive(Debug)]
struct OpenEntry {
    /// Priority key: path cost plus heuristic estimate.
    f_cost: u32,
    /// Insertion counter; breaks f_cost ties first-in-first-out so the
    /// search is deterministic without states needing an ordering.
    seq: u64,
    /// Path cost from the start state.
    g_cost: u32,
    /// The state reached.
    state: State,
    /// Indices into the action catalogue, in application order.
    path: Vec<usize>,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A* search over the action-application graph.
///
/// The open set is a min-heap keyed by `(f_cost, insertion order)`. A closed
/// set of expanded states bounds the search on cyclic domains; entries whose
/// state was already expanded are discarded lazily when popped, which is
/// cheaper than removing them from the heap eagerly.
///
/// `max_depth` is a global search budget, not a per-branch filter: popping
/// any node whose path is longer than `max_depth` stops the whole search and
/// reports no plan. Costs this deep mean the frontier as a whole has gone
/// past the budget, since the heap always expands the cheapest node first.
pub struct AStarSearch {
    heuristic: Box<dyn HeuristicStrategy>,
    max_depth: usize,
}

impl AStarSearch {
    /// Creates a new A* search with the given heuristic and the default
    /// depth budget.
    pub fn new(heuristic: Box<dyn HeuristicStrategy>) -> Self {
        Self {
            heuristic,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the depth budget.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AStarSearch {
    fn default() -> Self {
        Self::new(Box::new(GoalDistanceHeuristic))
    }
}

impl SearchAlgorithm for AStarSearch {
    fn search(&self, actions: &[Action], start: &State, goal: &State) -> Option<Plan> {
        let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
        let mut visited: HashSet<State> = HashSet::new();
        let mut seq: u64 = 0;

        open.push(Reverse(OpenEntry {
            f_cost: 0,
            seq,
            g_cost: 0,
            state: start.clone(),
            path: Vec::new(),
        }));

        while let Some(Reverse(entry)) = open.pop() {
            // Lazy deletion: a state expanded since this entry was pushed.
            if visited.contains(&entry.state) {
                continue;
            }
            visited.insert(entry.state.clone());

            if entry.state.satisfies(goal) {
                debug!(
                    "plan found: {} actions, cost {}, {} states expanded",
                    entry.path.len(),
                    entry.g_cost,
                    visited.len()
                );
                return Some(Plan {
                    actions: entry.path.iter().map(|&i| actions[i].clone()).collect(),
                    cost: entry.g_cost,
                });
            }

            // Global depth budget: the cheapest frontier node is already
            // past the bound, so the search as a whole is cut off.
            if entry.path.len() > self.max_depth {
                debug!(
                    "search stopped: cheapest path length {} exceeds max depth {}",
                    entry.path.len(),
                    self.max_depth
                );
                break;
            }

            for (idx, action) in actions.iter().enumerate() {
                if !action.is_doable(&entry.state) {
                    continue;
                }

                let next = action.apply(&entry.state);
                // A degenerate edge: the action changed nothing under these
                // preconditions, so it can never make progress.
                if next == entry.state {
                    continue;
                }

                let g_cost = entry.g_cost.saturating_add(action.cost);
                let f_cost = g_cost.saturating_add(self.heuristic.estimate(&next, goal));
                seq += 1;

                trace!(
                    "push {:?} via {} (g={}, f={})",
                    next,
                    action.name,
                    g_cost,
                    f_cost
                );

                let mut path = entry.path.clone();
                path.push(idx);
                open.push(Reverse(OpenEntry {
                    f_cost,
                    seq,
                    g_cost,
                    state: next,
                    path,
                }));
            }
        }

        debug!("no plan found ({} states expanded)", visited.len());
        None
    }
}

/// Dijkstra's algorithm: A* with a zero heuristic.
///
/// Explores strictly by path cost. Slower than the guided search but
/// immune to any heuristic bias; kept as the uninformed alternative.
#[derive(Default)]
pub struct DijkstraSearch;

impl SearchAlgorithm for DijkstraSearch {
    fn search(&self, actions: &[Action], start: &State, goal: &State) -> Option<Plan> {
        let astar = AStarSearch::new(Box::new(ZeroHeuristic));
        astar.search(actions, start, goal)
    }
}
