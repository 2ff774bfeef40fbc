//! # Action Module for Goal-Oriented Action Planning (GOAP)
//!
//! This module provides the core action component of the GOAP system.
//!
//! ## What is an Action?
//!
//! An [`Action`] is a named, fixed-cost transformation rule: a set of
//! preconditions (a partial [`State`] that must hold for the action to be
//! applicable) and a set of effects (a partial `State` merged into the world
//! when the action is applied). The planner strings actions together into a
//! minimum-cost sequence that reaches a goal.
//!
//! ## Effect semantics
//!
//! The two proposition kinds merge differently, and the asymmetry is
//! deliberate:
//!
//! - a **boolean** effect *overwrites* the world value (flags are set or
//!   cleared outright),
//! - an **integer** effect is a *delta* added to the prior value (absent
//!   counts as 0), so integer propositions model accumulable resources.
//!   An action `gather_wood` with effect `{wood_count: 1}` increments a
//!   counter each time it is applied.
//!
//! ## Basic Usage
//!
//! ```
//! use goalpath::{Action, State};
//!
//! let mut gather_wood = Action::new("gather_wood", 2).unwrap();
//! gather_wood.effects.set("wood_count", 1u32);
//!
//! let mut build_fire = Action::new("build_fire", 1).unwrap();
//! build_fire.preconditions.set("wood_count", 3u32); // needs at least 3
//! build_fire.effects.set("has_fire", true);
//!
//! let world = State::new();
//! assert!(gather_wood.is_doable(&world));
//! assert!(!build_fire.is_doable(&world));
//!
//! // Gather three times, then the fire can be built
//! let world = gather_wood.apply(&world);
//! let world = gather_wood.apply(&world);
//! let world = gather_wood.apply(&world);
//! assert!(build_fire.is_doable(&world));
//! ```

use crate::{GoapError, Result, State};

/// Represents an action in the Goal-Oriented Action Planning (GOAP) system.
///
/// An action has:
/// - a name that identifies it in plans,
/// - a cost representing the relative expense of performing it (0 is legal),
/// - preconditions that must hold for the action to be applicable,
/// - effects that describe how the world state changes when it is applied.
///
/// Actions are constructed once, before planning begins, and are read-only
/// during the search. Preconditions and effects are public partial states
/// populated with [`State::set`].
///
/// # Examples
///
/// ```
/// use goalpath::{Action, State};
///
/// let mut unlock_door = Action::new("unlock_door", 1).unwrap();
/// unlock_door.preconditions.set("has_key", true);
/// unlock_door.effects.set("door_open", true);
///
/// let mut world = State::new();
/// world.set("has_key", true);
/// assert!(unlock_door.is_doable(&world));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// The name of the action.
    pub name: String,
    /// The cost of performing this action.
    pub cost: u32,
    /// The preconditions that must hold for this action to be applicable.
    pub preconditions: State,
    /// The effects this action has on the world state.
    pub effects: State,
}

impl Action {
    /// Creates a new action with the specified name and cost and no
    /// preconditions or effects.
    ///
    /// # Errors
    ///
    /// Returns [`GoapError::EmptyActionName`] if the name is empty. The cost
    /// may be any non-negative value, including 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::Action;
    ///
    /// let action = Action::new("move", 1).unwrap();
    /// assert_eq!(action.name, "move");
    /// assert_eq!(action.cost, 1);
    ///
    /// assert!(Action::new("", 1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, cost: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GoapError::EmptyActionName);
        }

        Ok(Self {
            name,
            cost,
            preconditions: State::new(),
            effects: State::new(),
        })
    }

    /// Checks if this action can be performed in the given state.
    ///
    /// True iff the state satisfies every precondition (boolean exact match,
    /// integer minimum threshold).
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::{Action, State};
    ///
    /// let mut refill = Action::new("refill", 1).unwrap();
    /// refill.preconditions.set("coin_count", 3u32);
    ///
    /// let mut world = State::new();
    /// world.set("coin_count", 2u32);
    /// assert!(!refill.is_doable(&world)); // 2 < 3
    ///
    /// world.set("coin_count", 5u32);
    /// assert!(refill.is_doable(&world)); // 5 >= 3
    /// ```
    pub fn is_doable(&self, state: &State) -> bool {
        state.satisfies(&self.preconditions)
    }

    /// Applies this action's effects to the given state, producing a new one.
    ///
    /// The input state is never modified. Boolean effects overwrite the
    /// corresponding proposition; integer effects are added to the prior
    /// value, with an absent (or non-integer) prior counting as 0 and the sum
    /// saturating at `u32::MAX`.
    ///
    /// `apply` is defined for any state regardless of doability; the planner
    /// calls [`is_doable`](Action::is_doable) first, and so should callers
    /// that want precondition enforcement.
    ///
    /// # Examples
    ///
    /// ```
    /// use goalpath::{Action, State};
    ///
    /// let mut mine = Action::new("mine", 2).unwrap();
    /// mine.effects.set("ore_count", 1u32);
    /// mine.effects.set("tool_sharp", false);
    ///
    /// let mut world = State::new();
    /// world.set("ore_count", 4u32);
    /// world.set("tool_sharp", true);
    ///
    /// let next = mine.apply(&world);
    /// assert_eq!(next.get("ore_count"), Some(5u32.into())); // 4 + 1
    /// assert_eq!(next.get("tool_sharp"), Some(false.into())); // overwritten
    /// // the original is untouched
    /// assert_eq!(world.get("ore_count"), Some(4u32.into()));
    /// ```
    pub fn apply(&self, state: &State) -> State {
        let mut next = state.clone();

        for (key, effect) in self.effects.values() {
            match *effect {
                crate::StateValue::Bool(value) => next.set(key.as_str(), value),
                crate::StateValue::Int(delta) => {
                    let prior = match next.get(key) {
                        Some(crate::StateValue::Int(count)) => count,
                        _ => 0,
                    };
                    next.set(key.as_str(), prior.saturating_add(delta));
                }
            }
        }

        next
    }
}
