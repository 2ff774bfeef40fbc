use crate::{Action, Plan, Result, State};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A visualizer for GOAP plans that generates Graphviz DOT files.
pub struct GoapVisualizer;

impl GoapVisualizer {
    /// Create a new GOAP visualizer.
    pub fn new() -> Self {
        Self
    }

    /// Generate a DOT file visualization of a GOAP plan.
    ///
    /// Renders the start and goal states, the whole action catalogue with
    /// costs, preconditions, and effects, and highlights the actions the
    /// plan selected.
    pub fn visualize_plan(
        &self,
        actions: &[Action],
        current_state: &State,
        goal_state: &State,
        plan: &Plan,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let mut file = File::create(path)?;

        writeln!(file, "digraph GOAP {{")?;
        writeln!(file, "    rankdir=LR;")?;
        writeln!(
            file,
            "    node [shape=box, style=filled, fillcolor=lightblue];"
        )?;
        writeln!(file, "    edge [fontsize=10];")?;

        writeln!(
            file,
            "    initial [label=\"Initial State\\n{}\", fillcolor=lightgreen];",
            Self::state_to_string(current_state)
        )?;

        writeln!(
            file,
            "    goal [label=\"Goal State\\n{}\\nPlan cost: {}\", fillcolor=lightpink];",
            Self::state_to_string(goal_state),
            plan.cost
        )?;

        for (i, action) in actions.iter().enumerate() {
            writeln!(
                file,
                "    action_{} [label=\"{}\\nCost: {}\\nPre: {}\\nEff: {}\"];",
                i,
                action.name,
                action.cost,
                Self::state_to_string(&action.preconditions),
                Self::state_to_string(&action.effects)
            )?;
        }

        // Edges from the initial state to immediately applicable actions
        for (i, action) in actions.iter().enumerate() {
            if action.is_doable(current_state) {
                writeln!(file, "    initial -> action_{} [label=\"doable\"];", i)?;
            }
        }

        // Edges from actions whose application satisfies the goal outright
        for (i, action) in actions.iter().enumerate() {
            if action.apply(current_state).satisfies(goal_state) {
                writeln!(file, "    action_{} -> goal [label=\"achieves\"];", i)?;
            }
        }

        // Highlight the chosen plan
        writeln!(file, "    edge [color=red, penwidth=2.0];")?;
        for action in &plan.actions {
            if let Some(idx) = actions.iter().position(|a| a.name == action.name) {
                writeln!(file, "    action_{} [fillcolor=lightcoral];", idx)?;
            }
        }

        writeln!(file, "}}")?;

        Ok(())
    }

    fn state_to_string(state: &State) -> String {
        state
            .values()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\\n")
    }
}

impl Default for GoapVisualizer {
    fn default() -> Self {
        Self::new()
    }
}
