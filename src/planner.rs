//! # Planner Module for Goal-Oriented Action Planning (GOAP)
//!
//! The planner is the central component of a GOAP system, responsible for:
//! - Finding minimum-cost sequences of actions to achieve goals
//! - Coordinating between world states and available actions
//! - Using search algorithms to determine the best plan
//!
//! ## Overview
//!
//! Goal-Oriented Action Planning is a decision-making system that:
//! 1. Starts with a current world state
//! 2. Defines a goal state to achieve
//! 3. Considers all available actions with their preconditions and effects
//! 4. Finds the cheapest sequence of actions transforming the current state
//!    into one that satisfies the goal
//!
//! The `Planner` brings these components together by running a search
//! algorithm (A* by default) over the action space.
//!
//! ## Basic Usage
//!
//! ```
//! use goalpath::{Action, Planner, State};
//!
//! // Step 1: Create actions that define what your agent can do
//! let mut chop_tree = Action::new("chop_tree", 2).unwrap();
//! chop_tree.preconditions.set("has_axe", true);
//! chop_tree.effects.set("has_wood", true);
//!
//! let mut craft_axe = Action::new("craft_axe", 1).unwrap();
//! craft_axe.preconditions.set("has_metal", true);
//! craft_axe.effects.set("has_axe", true);
//!
//! // Step 2: Create a planner with all available actions
//! let planner = Planner::new(vec![chop_tree, craft_axe]);
//!
//! // Step 3: Define the current state
//! let mut current_state = State::new();
//! current_state.set("has_metal", true);
//!
//! // Step 4: Define the goal state
//! let mut goal_state = State::new();
//! goal_state.set("has_wood", true);
//!
//! // Step 5: Generate a plan
//! let plan = planner.plan(&current_state, &goal_state).unwrap();
//!
//! // The planner found: craft_axe -> chop_tree
//! assert_eq!(plan.action_names(), ["craft_axe", "chop_tree"]);
//! assert_eq!(plan.cost, 3);
//! ```

use crate::search::{AStarSearch, SearchAlgorithm};
use crate::{Action, Plan, State};

/// The GOAP planner: finds a minimum-cost sequence of actions that achieves
/// a goal state.
///
/// A `Planner` owns a catalogue of available actions and a search algorithm
/// (A* with an admissible goal-distance heuristic by default). Planning is
/// synchronous, single-threaded, and side-effect free; a `Planner` can be
/// shared across threads and independent `plan` calls may run concurrently,
/// each search owning its own open and visited sets.
///
/// # Examples
///
/// ```
/// use goalpath::{Action, Planner, State};
///
/// let mut goto_store = Action::new("go_to_store", 1).unwrap();
/// goto_store.preconditions.set("at_home", true);
/// goto_store.effects.set("at_store", true);
/// goto_store.effects.set("at_home", false);
///
/// let mut buy_food = Action::new("buy_food", 2).unwrap();
/// buy_food.preconditions.set("at_store", true);
/// buy_food.preconditions.set("has_money", true);
/// buy_food.effects.set("has_food", true);
///
/// let planner = Planner::new(vec![goto_store, buy_food]);
///
/// let mut current_state = State::new();
/// current_state.set("at_home", true);
/// current_state.set("has_money", true);
///
/// let mut goal_state = State::new();
/// goal_state.set("has_food", true);
///
/// let plan = planner.plan(&current_state, &goal_state).unwrap();
/// assert_eq!(plan.action_names(), ["go_to_store", "buy_food"]);
/// ```
pub struct Planner {
    /// Available actions that can be used in planning.
    actions: Vec<Action>,
    /// The algorithm used to search for a plan.
    search_algorithm: Box<dyn SearchAlgorithm>,
}

impl Planner {
    /// Creates a new planner with the given actions and the default A*
    /// search algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::{Action, Planner};
    ///
    /// let mut move_action = Action::new("move", 1).unwrap();
    /// move_action.effects.set("at_destination", true);
    ///
    /// let planner = Planner::new(vec![move_action]);
    /// assert_eq!(planner.actions().len(), 1);
    /// ```
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            search_algorithm: Box::new(AStarSearch::default()),
        }
    }

    /// Creates a new planner with the given actions and a custom search
    /// algorithm.
    ///
    /// Use this to swap in [`DijkstraSearch`](crate::DijkstraSearch), an
    /// [`AStarSearch`](crate::AStarSearch) with a custom heuristic or depth
    /// budget, or your own [`SearchAlgorithm`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::{Action, AStarSearch, DijkstraSearch, Planner};
    ///
    /// let pickup = Action::new("pickup", 1).unwrap();
    ///
    /// // Uninformed search
    /// let planner = Planner::with_search_algorithm(
    ///     vec![pickup.clone()],
    ///     Box::new(DijkstraSearch),
    /// );
    ///
    /// // A* with a tighter search budget
    /// let planner = Planner::with_search_algorithm(
    ///     vec![pickup],
    ///     Box::new(AStarSearch::default().with_max_depth(10)),
    /// );
    /// ```
    pub fn with_search_algorithm(
        actions: Vec<Action>,
        search_algorithm: Box<dyn SearchAlgorithm>,
    ) -> Self {
        Self {
            actions,
            search_algorithm,
        }
    }

    /// Finds a plan transforming the current state into one that satisfies
    /// the goal state.
    ///
    /// Returns the cheapest plan the search finds, or `None` if no sequence
    /// of applicable actions reaches the goal within the search budget.
    /// `None` is a normal outcome, not an error: an agent that cannot warm
    /// itself simply has no warm-up plan.
    ///
    /// An empty plan (cost 0) means the current state already satisfies the
    /// goal.
    ///
    /// # Examples
    ///
    /// Finding a simple plan:
    ///
    /// ```
    /// use goalpath::{Action, Planner, State};
    ///
    /// let mut light_fire = Action::new("light_fire", 1).unwrap();
    /// light_fire.preconditions.set("has_matches", true);
    /// light_fire.effects.set("fire_lit", true);
    ///
    /// let planner = Planner::new(vec![light_fire]);
    ///
    /// let mut current_state = State::new();
    /// current_state.set("has_matches", true);
    ///
    /// let mut goal_state = State::new();
    /// goal_state.set("fire_lit", true);
    ///
    /// let plan = planner.plan(&current_state, &goal_state).unwrap();
    /// assert_eq!(plan.action_names(), ["light_fire"]);
    /// assert_eq!(plan.cost, 1);
    /// ```
    ///
    /// When no plan is possible:
    ///
    /// ```
    /// use goalpath::{Action, Planner, State};
    ///
    /// let mut cook = Action::new("cook_meal", 1).unwrap();
    /// cook.preconditions.set("has_ingredients", true);
    /// cook.effects.set("has_food", true);
    ///
    /// let planner = Planner::new(vec![cook]);
    ///
    /// // No ingredients and no way to get them
    /// let current_state = State::new();
    /// let mut goal_state = State::new();
    /// goal_state.set("has_food", true);
    ///
    /// assert!(planner.plan(&current_state, &goal_state).is_none());
    /// ```
    ///
    /// When the goal is already satisfied:
    ///
    /// ```
    /// use goalpath::{Planner, State};
    ///
    /// let planner = Planner::new(vec![]);
    ///
    /// let mut state = State::new();
    /// state.set("goal_met", true);
    ///
    /// let mut goal = State::new();
    /// goal.set("goal_met", true);
    ///
    /// let plan = planner.plan(&state, &goal).unwrap();
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.cost, 0);
    /// ```
    pub fn plan(&self, current_state: &State, goal_state: &State) -> Option<Plan> {
        self.search_algorithm
            .search(&self.actions, current_state, goal_state)
    }

    /// The action catalogue this planner draws from.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Cloning a planner preserves the actions but resets the search algorithm
/// to the default A*, since boxed trait objects cannot be cloned directly.
impl Clone for Planner {
    fn clone(&self) -> Self {
        Self::new(self.actions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{AStarSearch, DijkstraSearch};
    use crate::{Action, State};

    fn make_action(name: &str, cost: u32, pre: Vec<(&str, bool)>, eff: Vec<(&str, bool)>) -> Action {
        let mut action = Action::new(name, cost).unwrap();
        for (k, v) in pre {
            action.preconditions.set(k, v);
        }
        for (k, v) in eff {
            action.effects.set(k, v);
        }
        action
    }

    #[test]
    fn test_simple_plan() {
        // a -> b -> c
        let a = make_action("a", 1, vec![("start", true)], vec![("mid", true)]);
        let b = make_action("b", 1, vec![("mid", true)], vec![("end", true)]);
        let c = make_action("c", 1, vec![("end", true)], vec![("goal", true)]);
        let planner = Planner::new(vec![a, b, c]);

        let mut initial = State::new();
        initial.set("start", true);

        let mut goal = State::new();
        goal.set("goal", true);

        let plan = planner.plan(&initial, &goal).unwrap();
        assert_eq!(plan.action_names(), ["a", "b", "c"]);
        assert_eq!(plan.cost, 3);
    }

    #[test]
    fn test_no_plan_found() {
        let a = make_action("a", 1, vec![("foo", true)], vec![("bar", true)]);
        let planner = Planner::new(vec![a]);
        let mut initial = State::new();
        initial.set("foo", false);
        let mut goal = State::new();
        goal.set("bar", true);
        assert!(planner.plan(&initial, &goal).is_none());
    }

    #[test]
    fn test_plan_with_multiple_paths() {
        // Two ways to reach the goal, but one is cheaper
        let a = make_action("a", 1, vec![("start", true)], vec![("goal", true)]);
        let b = make_action("b", 5, vec![("start", true)], vec![("goal", true)]);
        let planner = Planner::new(vec![a, b]);
        let mut initial = State::new();
        initial.set("start", true);
        let mut goal = State::new();
        goal.set("goal", true);
        let plan = planner.plan(&initial, &goal).unwrap();
        assert_eq!(plan.action_names(), ["a"]);
        assert_eq!(plan.cost, 1);
    }

    #[test]
    fn test_cost_is_sum_of_action_costs() {
        let a = make_action("a", 2, vec![("start", true)], vec![("mid", true)]);
        let b = make_action("b", 7, vec![("mid", true)], vec![("goal", true)]);
        let planner = Planner::new(vec![a, b]);

        let mut initial = State::new();
        initial.set("start", true);
        let mut goal = State::new();
        goal.set("goal", true);

        let plan = planner.plan(&initial, &goal).unwrap();
        let summed: u32 = plan.actions.iter().map(|a| a.cost).sum();
        assert_eq!(plan.cost, summed);
        assert_eq!(plan.cost, 9);
    }

    #[test]
    fn test_goal_already_satisfied() {
        let planner = Planner::new(vec![]);
        let mut state = State::new();
        state.set("warm", true);
        let mut goal = State::new();
        goal.set("warm", true);

        let plan = planner.plan(&state, &goal).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.cost, 0);
    }

    #[test]
    fn test_different_search_algorithms_agree() {
        let a = make_action("a", 1, vec![("start", true)], vec![("goal", true)]);
        let b = make_action("b", 5, vec![("start", true)], vec![("goal", true)]);
        let actions = vec![a, b];

        let mut initial = State::new();
        initial.set("start", true);
        let mut goal = State::new();
        goal.set("goal", true);

        let astar_planner =
            Planner::with_search_algorithm(actions.clone(), Box::new(AStarSearch::default()));
        let astar_plan = astar_planner.plan(&initial, &goal).unwrap();
        assert_eq!(astar_plan.action_names(), ["a"]);

        let dijkstra_planner =
            Planner::with_search_algorithm(actions, Box::new(DijkstraSearch));
        let dijkstra_plan = dijkstra_planner.plan(&initial, &goal).unwrap();
        assert_eq!(dijkstra_plan.action_names(), ["a"]);
    }

    #[test]
    fn test_clone_preserves_actions() {
        let a = make_action("a", 1, vec![], vec![("goal", true)]);
        let planner = Planner::with_search_algorithm(vec![a], Box::new(DijkstraSearch));
        let cloned = planner.clone();
        assert_eq!(cloned.actions().len(), 1);

        let mut goal = State::new();
        goal.set("goal", true);
        let plan = cloned.plan(&State::new(), &goal).unwrap();
        assert_eq!(plan.action_names(), ["a"]);
    }

    #[test]
    fn test_resource_accumulation_plan() {
        // Integer effects accumulate across repeated applications of the
        // same action until the threshold precondition opens up.
        let mut gather = Action::new("gather_stone", 1).unwrap();
        gather.effects.set("stone_count", 2u32);

        let mut build = Action::new("build_wall", 3).unwrap();
        build.preconditions.set("stone_count", 5u32);
        build.effects.set("has_wall", true);

        let planner = Planner::new(vec![gather, build]);

        let mut goal = State::new();
        goal.set("has_wall", true);

        let plan = planner.plan(&State::new(), &goal).unwrap();
        assert_eq!(
            plan.action_names(),
            ["gather_stone", "gather_stone", "gather_stone", "build_wall"]
        );
        assert_eq!(plan.cost, 6);
    }
}
