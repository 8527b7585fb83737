// SPDX-License-Identifier: MPL-2.0
use iced_tilt::card::{Phase, TiltCard};
use iced_tilt::domain::card::{CardConfig, CardPreset, Sensitivity, TiltState};
use iced_tilt::motion::SpringConfig;

const FRAME: f32 = 1.0 / 60.0;
/// Two seconds of simulated time.
const FRAME_BUDGET: usize = 120;

fn released_card(config: CardConfig, dx: f32, dy: f32) -> TiltCard {
    let mut card = TiltCard::new(config);
    card.on_drag_start();
    card.on_drag_update(dx, dy);
    card.on_drag_end();
    card
}

#[test]
fn default_spring_is_underdamped_but_close_to_critical() {
    let ratio = SpringConfig::default().damping_ratio();
    assert!(ratio > 0.7 && ratio < 1.0, "damping ratio {ratio}");
}

#[test]
fn pitch_released_at_max_angle_settles_within_two_seconds() {
    let config = CardConfig::default()
        .with_max_angle(12.0)
        .with_sensitivity(Sensitivity::uniform(0.3));
    // dy = -40 px at 0.3 deg/px puts the pitch on the +12 limit
    let mut card = released_card(config, 0.0, -40.0);
    assert!((card.tilt().pitch - 12.0).abs() < 1e-4);

    let mut frames = 0;
    while card.tick(FRAME) {
        frames += 1;
        assert!(frames < FRAME_BUDGET, "still settling after {frames} frames");
        let tilt = card.tilt();
        assert!(tilt.pitch.abs() <= config.max_angle, "overshoot: {tilt:?}");
        assert_eq!(tilt.yaw, 0.0);
    }

    assert_eq!(card.tilt(), TiltState::REST);
    assert_eq!(card.phase(), Phase::Resting);
}

#[test]
fn showcase_preset_settles_from_full_tilt() {
    let config = CardPreset::Showcase.config();
    let mut card = released_card(config, 150.0, 150.0);

    let mut frames = 0;
    while card.tick(FRAME) {
        frames += 1;
        assert!(frames < FRAME_BUDGET);
    }
    assert!(card.tilt().is_rest());
}

#[test]
fn new_drag_mid_flight_applies_formula_exactly() {
    let config = CardConfig::default().with_sensitivity(Sensitivity::uniform(0.3));
    let mut card = released_card(config, 40.0, -40.0);
    for _ in 0..4 {
        card.tick(FRAME);
    }
    assert_eq!(card.phase(), Phase::Settling);

    card.on_drag_start();
    card.on_drag_update(-20.0, 10.0);

    assert_eq!(card.tilt(), TiltState::new(10.0 * -0.3, -20.0 * 0.3));
    assert_eq!(card.phase(), Phase::Dragging);

    // Ticks no longer move the card
    assert!(!card.tick(FRAME));
    assert_eq!(card.tilt(), TiltState::new(10.0 * -0.3, -20.0 * 0.3));
}

#[test]
fn release_without_movement_needs_no_frames() {
    let mut card = released_card(CardConfig::default(), 0.0, 0.0);
    assert_eq!(card.phase(), Phase::Resting);
    assert!(!card.is_animating());
    assert!(!card.tick(FRAME));
}

#[test]
fn stiff_and_heavily_damped_springs_settle_without_diverging() {
    let springs = [
        SpringConfig::new(1.0, 100_000.0, 18.0),
        SpringConfig::new(1.0, 120.0, 300.0),
        SpringConfig::new(0.1, 120.0, 30.0),
    ];

    for spring in springs {
        let config = CardConfig::default()
            .with_max_angle(12.0)
            .with_sensitivity(Sensitivity::uniform(0.3))
            .with_spring(spring);
        assert_eq!(config.validate(), Ok(()));

        let mut card = released_card(config, 0.0, -40.0);
        let mut frames = 0;
        while card.tick(FRAME) {
            frames += 1;
            // 40 s covers the slow mode of the overdamped spring
            assert!(frames < 2400, "{spring:?} still settling: {:?}", card.tilt());
            let pitch = card.tilt().pitch;
            assert!(pitch.is_finite() && pitch.abs() < 24.0, "{spring:?}: {pitch}");
        }
        assert_eq!(card.tilt(), TiltState::REST);
    }
}
