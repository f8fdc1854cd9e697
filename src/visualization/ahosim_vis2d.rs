use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::params::Parameters;
use crate::simulation::playback::lookup_sample;
use crate::simulation::scenario::Scenario;

/// Component tagging each marker with its index into Scenario.trajectories
#[derive(Component)]
struct TrajectoryIndex(pub usize);

/// Logical canvas size the plot bounds are mapped onto, centered on the origin
const CANVAS_W: f32 = 900.0;
const CANVAS_H: f32 = 500.0;

/// Screen radius of the animated markers
const MARKER_RADIUS: f32 = 8.0;

/// Every n-th sample becomes a curve vertex; at dt = 0.01 the curves are far
/// denser than a pixel, so thinning them is invisible
const CURVE_STRIDE: usize = 4;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} trajectories ({:?} mode)",
        scenario.trajectories.len(),
        scenario.engine.mode,
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_markers_system)
        .add_systems(Update, (playback_tick_system, draw_curves_system, sync_markers_system))
        .run();
}

/// Map a domain point (t, q) to screen coordinates via the plot bounds
fn to_screen(params: &Parameters, t: f64, q: f64) -> Vec2 {
    let fx = ((t - params.x_min) / (params.x_max - params.x_min)) as f32;
    let fy = ((q - params.y_min) / (params.y_max - params.y_min)) as f32;
    Vec2::new((fx - 0.5) * CANVAS_W, (fy - 0.5) * CANVAS_H)
}

fn trajectory_color(hue: f32) -> Color {
    // Fixed saturation/lightness, hue from the trajectory index
    Color::hsl(hue, 0.7, 0.5)
}

fn setup_markers_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera on a white canvas
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            ..Default::default()
        },
        ..Default::default()
    });

    for (i, traj) in scenario.trajectories.iter().enumerate() {
        // Markers start at the first sample of their series
        let start = traj
            .series
            .samples
            .first()
            .map(|s| to_screen(&scenario.parameters, s.t, s.q))
            .unwrap_or(Vec2::ZERO);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
                material: materials.add(ColorMaterial::from(trajectory_color(traj.hue))),
                transform: Transform::from_xyz(start.x, start.y, 1.0),
                ..Default::default()
            },
            TrajectoryIndex(i),
        ));
    }
}

/// One clock tick per rendered frame. The tick runs to completion before the
/// lookup systems of the same frame read the clock, and becomes a no-op once
/// the horizon is passed.
fn playback_tick_system(mut scenario: ResMut<Scenario>) {
    let Scenario {
        parameters, clock, ..
    } = &mut *scenario;

    clock.tick(parameters.dt);
}

/// Static plot: redraw every precomputed curve as a gizmo polyline
fn draw_curves_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for traj in &scenario.trajectories {
        let color = trajectory_color(traj.hue);
        let points: Vec<Vec2> = traj
            .series
            .samples
            .iter()
            .step_by(CURVE_STRIDE)
            .map(|s| to_screen(&scenario.parameters, s.t, s.q))
            .collect();
        for pair in points.windows(2) {
            gizmos.line_2d(pair[0], pair[1], color);
        }
    }
}

/// Move each marker to the sample its series shows at the current virtual
/// time; hide it when the lookup lands outside the series
fn sync_markers_system(
    scenario: Res<Scenario>,
    mut query: Query<(&TrajectoryIndex, &mut Transform, &mut Visibility)>,
) {
    for (TrajectoryIndex(i), mut transform, mut visibility) in &mut query {
        let Some(traj) = scenario.trajectories.get(*i) else {
            continue;
        };
        match lookup_sample(&traj.series, scenario.clock.time, scenario.parameters.dt) {
            Some(sample) => {
                let pos = to_screen(&scenario.parameters, sample.t, sample.q);
                transform.translation.x = pos.x;
                transform.translation.y = pos.y;
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
