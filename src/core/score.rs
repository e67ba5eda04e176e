//! Run score, fed by coin pickups.

use bevy::prelude::*;

use super::events::CoinCollectedEvent;

/// Points collected during the current run.
#[derive(Resource, Default, Debug)]
pub struct Score(pub u32);

pub(super) fn reset_score(mut score: ResMut<Score>) {
    score.0 = 0;
}

pub(super) fn accumulate_score(
    mut events: EventReader<CoinCollectedEvent>,
    mut score: ResMut<Score>,
) {
    for event in events.read() {
        score.0 += event.value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn coins_add_up_and_reset_clears() {
        let mut world = World::new();
        world.insert_resource(Score(0));
        world.insert_resource(Events::<CoinCollectedEvent>::default());

        world.send_event(CoinCollectedEvent { value: 10 });
        world.send_event(CoinCollectedEvent { value: 5 });
        world
            .run_system_once(accumulate_score)
            .expect("system run failed");
        assert_eq!(world.resource::<Score>().0, 15);

        world.run_system_once(reset_score).expect("system run failed");
        assert_eq!(world.resource::<Score>().0, 0);
    }
}
