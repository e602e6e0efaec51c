//! Movement domain: debug-only gizmo rendering of the probe volumes.

use bevy::prelude::*;

use crate::config::ControllerConfig;
use crate::movement::Player;

pub(crate) fn draw_probe_gizmos(
    config: Res<ControllerConfig>,
    query: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    for transform in &query {
        // Jump detection area
        let ground_center = transform.translation + Vec3::from(config.probes.ground_offset);
        gizmos.cube(
            Transform::from_translation(ground_center)
                .with_scale(Vec3::from(config.probes.ground_half_extents) * 2.0),
            Color::srgb(0.9, 0.9, 0.2),
        );

        // Stand up check
        let stand_center = transform.translation + Vec3::from(config.probes.stand_offset);
        gizmos.cube(
            Transform::from_translation(stand_center)
                .with_scale(Vec3::from(config.probes.stand_half_extents) * 2.0),
            Color::srgb(0.9, 0.2, 0.2),
        );
    }
}
