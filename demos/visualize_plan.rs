//! Plans the campfire domain and writes the result as a Graphviz DOT file.
//!
//! Render it with `dot -Tpng plan.dot -o plan.png`.

use goalpath::{Action, GoapVisualizer, Planner, State};

fn main() {
    env_logger::init();

    let mut gather_wood = Action::new("gather_wood", 2).unwrap();
    gather_wood.effects.set("wood_count", 1u32);

    let mut build_fire = Action::new("build_fire", 1).unwrap();
    build_fire.preconditions.set("wood_count", 3u32);
    build_fire.effects.set("has_fire", true);

    let mut sit_by_fire = Action::new("sit_by_fire", 1).unwrap();
    sit_by_fire.preconditions.set("has_fire", true);
    sit_by_fire.effects.set("is_warm", true);

    let actions = vec![gather_wood, build_fire, sit_by_fire];
    let planner = Planner::new(actions.clone());

    let start = State::new();
    let mut goal = State::new();
    goal.set("is_warm", true);

    let Some(plan) = planner.plan(&start, &goal) else {
        println!("No plan found, nothing to visualize");
        return;
    };

    let visualizer = GoapVisualizer::new();
    if let Err(err) = visualizer.visualize_plan(&actions, &start, &goal, &plan, "plan.dot") {
        eprintln!("Failed to write plan.dot: {}", err);
        return;
    }

    println!(
        "Wrote plan.dot ({} actions, cost {})",
        plan.len(),
        plan.cost
    );
}
