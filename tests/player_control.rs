//! Player movement, combat and souls driven through the in-memory world.

use approx::assert_relative_eq;
use glam::Vec2;
use rstest::{fixture, rstest};
use ukemochi::{
    AttackKind, CombatEvent, EntityHandle, Key, MouseButton, Player, SoulAbility, SoulType,
    Tuning, WorldHandle, PLAYER_TAG,
};

struct Pilot {
    world: WorldHandle,
    player: Player,
}

impl Pilot {
    fn body(&self) -> EntityHandle {
        self.player.entity()
    }

    fn tick(&mut self) -> Vec<CombatEvent> {
        self.player.tick(&mut self.world);
        let events = self.player.last_events().to_vec();
        self.world.step();
        events
    }
}

#[fixture]
fn pilot() -> Pilot {
    let mut world = WorldHandle::default();
    let body = world.spawn_tagged(PLAYER_TAG, Vec2::ZERO);
    let player = Player::new(body, &Tuning::default());
    Pilot { world, player }
}

#[rstest]
#[case::up(&[Key::W], Vec2::new(0.0, 1500.0), 0.0)]
#[case::down(&[Key::S], Vec2::new(0.0, -1500.0), 0.0)]
#[case::left(&[Key::A], Vec2::new(-1500.0, 0.0), 0.0)]
#[case::right(&[Key::D], Vec2::new(1500.0, 0.0), 0.0)]
#[case::up_wins(&[Key::W, Key::S], Vec2::new(0.0, 1500.0), 0.0)]
#[case::left_wins(&[Key::D, Key::A], Vec2::new(-1500.0, 0.0), 0.0)]
#[case::diagonal(&[Key::W, Key::D], Vec2::new(1500.0, 1500.0), 0.0)]
#[case::spin_left(&[Key::R], Vec2::ZERO, -1500.0)]
#[case::spin_right(&[Key::T], Vec2::ZERO, 1500.0)]
#[case::idle(&[], Vec2::ZERO, 0.0)]
fn held_keys_set_force_and_torque(
    mut pilot: Pilot,
    #[case] keys: &[Key],
    #[case] force: Vec2,
    #[case] torque: f32,
) {
    for key in keys {
        pilot.world.press_key(*key);
    }
    pilot.player.tick(&mut pilot.world);
    let body = pilot.world.body(pilot.body()).cloned().unwrap_or_default();
    assert_eq!(body.force, force);
    assert_relative_eq!(body.torque, torque);
}

#[rstest]
fn force_accelerates_the_body(mut pilot: Pilot) {
    pilot.world.press_key(Key::D);
    pilot.tick();
    let velocity = pilot.world.velocity(pilot.body()).unwrap_or_default();
    assert_relative_eq!(velocity.x, 1500.0 / 60.0, epsilon = 1e-3);
    assert_relative_eq!(velocity.y, 0.0);
}

#[rstest]
fn held_attack_builds_a_combo(mut pilot: Pilot) {
    pilot.world.press_button(MouseButton::Left);
    let attacks: Vec<AttackKind> = (0..120)
        .flat_map(|_| pilot.tick())
        .filter_map(|event| match event {
            CombatEvent::Attack(kind) => Some(kind),
            _ => None,
        })
        .collect();
    assert!(attacks.len() >= 3, "only {attacks:?}");
    assert_eq!(
        attacks.get(..3),
        Some(&[AttackKind::Slash, AttackKind::Slash, AttackKind::Knockback][..])
    );
}

#[rstest]
fn cooldown_blocks_the_next_frame(mut pilot: Pilot) {
    pilot.world.press_button(MouseButton::Left);
    assert_eq!(pilot.tick(), vec![CombatEvent::Attack(AttackKind::Slash)]);
    assert!(pilot.tick().is_empty());
    assert!(!pilot.player.combat().can_attack());
}

#[rstest]
fn harvested_soul_powers_an_ability(mut pilot: Pilot) {
    pilot.player.harvest_soul(SoulType::Fish);

    pilot.world.press_key(Key::Q);
    assert_eq!(pilot.tick(), vec![CombatEvent::SoulSwitched(SoulType::Fish)]);
    pilot.world.release_key(Key::Q);

    pilot.world.press_button(MouseButton::Right);
    assert_eq!(
        pilot.tick(),
        vec![CombatEvent::Ability(SoulAbility::FishAoe)]
    );
    assert!(pilot.tick().is_empty());
    assert_eq!(pilot.player.souls().charges(SoulType::Fish), 0);
}

#[rstest]
fn souls_decay_while_the_player_acts(mut pilot: Pilot) {
    pilot.player.harvest_soul(SoulType::Worm);
    let before = pilot.player.souls().bar(SoulType::Worm);
    for _ in 0..60 {
        pilot.tick();
    }
    let after = pilot.player.souls().bar(SoulType::Worm);
    assert_relative_eq!(before - after, 1.0, epsilon = 1e-3);
}

#[rstest]
fn dead_player_stops_acting(mut pilot: Pilot) {
    pilot.player.take_damage(500.0);
    pilot.world.press_key(Key::W);
    pilot.world.press_button(MouseButton::Left);
    assert!(pilot.tick().is_empty());
    let body = pilot.world.body(pilot.body()).cloned().unwrap_or_default();
    assert_eq!(body.force, Vec2::ZERO);
}
