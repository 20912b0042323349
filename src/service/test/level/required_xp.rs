use super::*;

/// Tests the XP thresholds of the default curve.
///
/// Verifies specific values of `floor(base_xp * level ^ multiplier)` with the
/// default base of 100 and multiplier of 1.5.
///
/// Expected: 100 at level 1, 282 at level 2, 519 at level 3, 800 at level 4
#[test]
fn matches_curve_for_known_levels() {
    let levels = LevelSystem::new(XpConfig::default());

    assert_eq!(levels.required_xp(1), 100);
    assert_eq!(levels.required_xp(2), 282);
    assert_eq!(levels.required_xp(3), 519);
    assert_eq!(levels.required_xp(4), 800);
}

/// Tests that the curve is strictly increasing.
///
/// A non-monotonic curve would let a user level up twice off the same XP, so
/// every threshold must exceed the previous one.
///
/// Expected: required_xp(n + 1) > required_xp(n) for levels 1 through 99
#[test]
fn thresholds_strictly_increase() {
    let levels = LevelSystem::new(XpConfig::default());

    for level in 1..100 {
        assert!(
            levels.required_xp(level + 1) > levels.required_xp(level),
            "threshold for level {} does not exceed level {}",
            level + 1,
            level
        );
    }
}

/// Tests the curve with custom configuration values.
///
/// Expected: thresholds computed from the configured base and multiplier
#[test]
fn respects_configured_base_and_multiplier() {
    let config = XpConfig {
        base_xp: 50,
        level_multiplier: 2.0,
        ..XpConfig::default()
    };
    let levels = LevelSystem::new(config);

    assert_eq!(levels.required_xp(1), 50);
    assert_eq!(levels.required_xp(2), 200);
    assert_eq!(levels.required_xp(3), 450);
}
