//! # State Module for Goal-Oriented Action Planning (GOAP)
//!
//! This module provides the fundamental `State` structure, which represents
//! world states, conditions, and effects within the GOAP system.
//!
//! ## What is State in GOAP?
//!
//! In Goal-Oriented Action Planning, "state" refers to a snapshot of the world or
//! agent at a particular moment. The GOAP system uses states in several ways:
//!
//! - **World State**: Representing the current state of the environment/agent
//! - **Goal State**: Defining desired conditions the agent wants to achieve
//! - **Preconditions**: Conditions that must be true for an action to be performed
//! - **Effects**: How actions change the world state when executed
//!
//! ## Propositions
//!
//! Each entry in a state maps a proposition name to a [`StateValue`], which is
//! either a boolean flag or a non-negative integer quantity. The two kinds have
//! different satisfaction semantics:
//!
//! - A boolean requirement is met only by the exact same boolean value.
//! - An integer requirement is a *minimum threshold*: a world value of 5
//!   satisfies a requirement of 3. This lets goals and preconditions express
//!   "at least N of some resource".
//!
//! ## Basic Usage
//!
//! ```
//! use goalpath::State;
//!
//! // Current world state of a game agent
//! let mut current_state = State::new();
//! current_state.set("has_axe", true);
//! current_state.set("wood_count", 4u32);
//!
//! // Goal: hold at least three units of wood
//! let mut goal_state = State::new();
//! goal_state.set("wood_count", 3u32);
//!
//! // Threshold semantics: 4 >= 3, so the goal is satisfied
//! assert!(current_state.satisfies(&goal_state));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// The value of a single proposition: a boolean flag or a non-negative
/// integer quantity.
///
/// The two kinds never satisfy each other. Comparing a boolean requirement
/// against an integer world value (or vice versa) is a type mismatch and is
/// simply unsatisfied, never an error.
///
/// # Examples
///
/// ```
/// use goalpath::StateValue;
///
/// let flag: StateValue = true.into();
/// let count: StateValue = 3u32.into();
/// assert_eq!(flag, StateValue::Bool(true));
/// assert_eq!(count, StateValue::Int(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateValue {
    /// An on/off fact about the world.
    Bool(bool),
    /// A non-negative quantity, e.g. a resource count.
    Int(u32),
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        StateValue::Int(value)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(value) => write!(f, "{}", value),
            StateValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// Represents the state of the world in the Goal-Oriented Action Planning
/// (GOAP) system.
///
/// A `State` is a collection of proposition name → [`StateValue`] pairs. It
/// plays two roles:
///
/// - **World state**: every proposition relevant to the domain has a concrete
///   value; a proposition that is absent counts as boolean `false` / integer 0.
/// - **Partial specification** (goal, precondition, or effect): only the
///   propositions that matter are present; absent propositions are
///   unconstrained.
///
/// States are values: the planner never mutates a state in place, it derives
/// new states from old ones. Propositions are kept in a [`BTreeMap`] so that
/// two states with the same contents compare and hash identically regardless
/// of insertion order, which is what allows the search to use `State` as its
/// visited-set key.
///
/// # Examples
///
/// ```
/// use goalpath::State;
///
/// let mut state = State::new();
/// state.set("door_open", false);
/// state.set("key_count", 2u32);
///
/// assert_eq!(state.get("door_open"), Some(false.into()));
/// assert_eq!(state.get("key_count"), Some(2u32.into()));
/// assert_eq!(state.get("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    /// The propositions, ordered by name.
    values: BTreeMap<String, StateValue>,
}

impl State {
    /// Creates a new empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::State;
    ///
    /// let state = State::new();
    /// assert!(state.values().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets a proposition, inserting it or overwriting an existing value.
    ///
    /// Accepts `bool` and `u32` values directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::State;
    ///
    /// let mut state = State::new();
    /// state.set("has_ammo", true);
    /// state.set("ammo_count", 30u32);
    /// state.set("ammo_count", 25u32); // overwrite
    ///
    /// assert_eq!(state.get("ammo_count"), Some(25u32.into()));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StateValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Gets the value of a proposition, or `None` if it is absent.
    pub fn get(&self, key: &str) -> Option<StateValue> {
        self.values.get(key).copied()
    }

    /// Checks whether a single requirement holds in this state.
    ///
    /// This is the one place the satisfaction rule lives; both
    /// [`satisfies`](State::satisfies) and the planner's goal-distance
    /// heuristic are defined in terms of it:
    ///
    /// - boolean requirement: the proposition must be present with the exact
    ///   same value (an absent proposition fails),
    /// - integer requirement: the world value must be `>=` the required
    ///   value, with an absent proposition counting as 0,
    /// - mismatched kinds never satisfy.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::State;
    ///
    /// let mut state = State::new();
    /// state.set("wood_count", 2u32);
    ///
    /// assert!(state.meets("wood_count", 2u32.into()));
    /// assert!(!state.meets("wood_count", 3u32.into()));
    /// // absent integer counts as zero
    /// assert!(state.meets("stone_count", 0u32.into()));
    /// // absent boolean always fails
    /// assert!(!state.meets("has_fire", false.into()));
    /// ```
    pub fn meets(&self, key: &str, required: StateValue) -> bool {
        match (self.get(key), required) {
            (Some(StateValue::Bool(have)), StateValue::Bool(want)) => have == want,
            (Some(StateValue::Int(have)), StateValue::Int(min)) => have >= min,
            (None, StateValue::Int(min)) => min == 0,
            _ => false,
        }
    }

    /// Checks if this state satisfies another state's requirements.
    ///
    /// Every requirement must hold per [`meets`](State::meets); an empty
    /// requirement is vacuously satisfied. This predicate is used both for
    /// action preconditions and for the planner's goal test, and runs on the
    /// hot path of the search, so it allocates nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::State;
    ///
    /// let mut world = State::new();
    /// world.set("has_key", true);
    /// world.set("coin_count", 10u32);
    ///
    /// let mut requirement = State::new();
    /// requirement.set("has_key", true);
    /// requirement.set("coin_count", 5u32); // at least 5
    /// assert!(world.satisfies(&requirement));
    ///
    /// requirement.set("coin_count", 20u32);
    /// assert!(!world.satisfies(&requirement));
    ///
    /// // vacuous truth
    /// assert!(world.satisfies(&State::new()));
    /// ```
    pub fn satisfies(&self, requirement: &State) -> bool {
        requirement
            .values
            .iter()
            .all(|(key, required)| self.meets(key, *required))
    }

    /// Gets all the propositions in the state, ordered by name.
    pub fn values(&self) -> &BTreeMap<String, StateValue> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = State::new();
        assert!(state.values().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut state = State::new();
        state.set("foo", true);
        assert_eq!(state.get("foo"), Some(StateValue::Bool(true)));
        state.set("foo", false);
        assert_eq!(state.get("foo"), Some(StateValue::Bool(false)));
        state.set("count", 7u32);
        assert_eq!(state.get("count"), Some(StateValue::Int(7)));
        assert_eq!(state.get("bar"), None);
    }

    #[test]
    fn test_satisfies_boolean_exact() {
        let mut state = State::new();
        state.set("a", true);
        state.set("b", false);

        let mut required = State::new();
        required.set("a", true);
        assert!(state.satisfies(&required));
        required.set("b", false);
        assert!(state.satisfies(&required));
        required.set("b", true);
        assert!(!state.satisfies(&required));
    }

    #[test]
    fn test_satisfies_absent_boolean_fails() {
        let state = State::new();
        let mut required = State::new();
        required.set("missing", false);
        assert!(!state.satisfies(&required));
    }

    #[test]
    fn test_satisfies_integer_threshold() {
        let mut state = State::new();
        state.set("wood", 4u32);

        let mut required = State::new();
        required.set("wood", 3u32);
        assert!(state.satisfies(&required));
        required.set("wood", 4u32);
        assert!(state.satisfies(&required));
        required.set("wood", 5u32);
        assert!(!state.satisfies(&required));
    }

    #[test]
    fn test_satisfies_absent_integer_counts_as_zero() {
        let state = State::new();
        let mut required = State::new();
        required.set("wood", 0u32);
        assert!(state.satisfies(&required));
        required.set("wood", 1u32);
        assert!(!state.satisfies(&required));
    }

    #[test]
    fn test_satisfies_type_mismatch_never_holds() {
        let mut state = State::new();
        state.set("flag", true);
        state.set("count", 1u32);

        let mut required = State::new();
        required.set("flag", 1u32);
        assert!(!state.satisfies(&required));

        let mut required = State::new();
        required.set("count", true);
        assert!(!state.satisfies(&required));
    }

    #[test]
    fn test_empty_requirement_vacuously_satisfied() {
        let state = State::new();
        assert!(state.satisfies(&State::new()));
    }

    #[test]
    fn test_equality_independent_of_insertion_order() {
        let mut a = State::new();
        a.set("x", true);
        a.set("y", 2u32);

        let mut b = State::new();
        b.set("y", 2u32);
        b.set("x", true);

        assert_eq!(a, b);

        let mut seen = std::collections::HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_display_values() {
        assert_eq!(StateValue::Bool(true).to_string(), "true");
        assert_eq!(StateValue::Int(42).to_string(), "42");
    }
}
