//! A cold agent figures out how to get warm: gather enough wood, build a
//! fire, sit by it. The piano is available but never helps.
//!
//! Run with `RUST_LOG=debug` to watch the search.

use goalpath::{Action, Planner, State};

fn main() {
    env_logger::init();

    let mut play_the_piano = Action::new("play_the_piano", 3).unwrap();
    play_the_piano.effects.set("music_playing", true);

    let mut gather_wood = Action::new("gather_wood", 2).unwrap();
    gather_wood.effects.set("wood_count", 1u32);

    let mut build_fire = Action::new("build_fire", 1).unwrap();
    build_fire.preconditions.set("wood_count", 3u32);
    build_fire.effects.set("has_fire", true);

    let mut sit_by_fire = Action::new("sit_by_fire", 1).unwrap();
    sit_by_fire.preconditions.set("has_fire", true);
    sit_by_fire.effects.set("is_warm", true);

    let planner = Planner::new(vec![play_the_piano, gather_wood, build_fire, sit_by_fire]);

    // Empty world state: every flag false, every counter zero.
    let start = State::new();

    let mut goal = State::new();
    goal.set("is_warm", true);

    match planner.plan(&start, &goal) {
        Some(plan) => println!(
            "Plan found: {} | Total cost: {}",
            plan.action_names().join(" -> "),
            plan.cost
        ),
        None => println!("No plan found"),
    }
}
