//! 3D scene management
//!
//! Spawns the rake scene and the independent detail view, and runs the
//! pointer systems: orbit cameras, hover picking, and click handling.
//! All hit-testing goes through the pick registries; bounds are
//! registered in world space at spawn time.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;
use bevy::camera::visibility::RenderLayers;
use bevy::camera::ClearColorConfig;
use bevy_egui::EguiContexts;
use tracing::{info, warn};

use railviz_core::types::Wagon;
use railviz_core::{order_tooltip, wagon_tooltip};
use railviz_scene::descriptor::{BAR_DEPTH, BAR_HEIGHT, BAR_WIDTH, BAR_Y};
use railviz_scene::{
    body_pick_entry, detail_layout, order_pick_entry, rake_layout, HoverChange, InteractionState,
    OrbitCamera, OrderGeometry, PickRay, PickRegistry, PickTarget, WagonDescriptor,
};

use crate::app::{
    ClickTracker, DetailHover, DetailOrbit, DetailRegistry, MainOrbit, MainRegistry,
    OrdersListExpanded, RakeData, TooltipState,
};

/// Pointer travel below this distance counts as a click, not a drag
const CLICK_SLOP: f32 = 5.0;
/// Thickness of the wagon corner-frame edges
const FRAME_THICKNESS: f32 = 0.15;
/// Scroll-wheel line to zoom-distance conversion
const WHEEL_STEP: f32 = 40.0;
/// Tooltip offset from the pointer, logical pixels
const TOOLTIP_OFFSET: Vec2 = Vec2::new(15.0, 15.0);

const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba::new(0.25, 0.25, 0.25, 1.0);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                spawn_rake,
                update_main_camera,
                update_detail_camera,
                handle_clicks,
                hover_main,
                hover_detail,
                sync_detail_view,
            ),
        );
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the detail view camera
#[derive(Component)]
pub struct DetailCamera;

/// Marker for the per-wagon root entities of the main rake scene
#[derive(Component)]
pub struct RakeRoot;

/// Marker for every root entity belonging to the detail view
#[derive(Component)]
pub struct DetailRoot;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    main_orbit: Res<MainOrbit>,
    detail_orbit: Res<DetailOrbit>,
) {
    // Main camera, posed from the orbit controller
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(main_orbit.0.position())
            .looking_at(main_orbit.0.target, Vec3::Y),
        MainCamera,
    ));

    // Detail camera renders layer 1 on top of everything, but only while
    // a detail view is open
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 1,
            is_active: false,
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            ..default()
        },
        RenderLayers::layer(1),
        Transform::from_translation(detail_orbit.0.position())
            .looking_at(detail_orbit.0.target, Vec3::Y),
        DetailCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 900.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(50.0, 80.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Static environment: ground, grid, two rails
    let env = commands
        .spawn((Transform::IDENTITY, Visibility::default()))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(150.0, 0.2, 60.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(224, 242, 254),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.6, 0.0),
        ChildOf(env),
    ));

    spawn_grid(
        &mut commands,
        &mut meshes,
        &mut materials,
        120.0,
        20,
        -0.4,
        Color::srgb_u8(203, 213, 225),
        RenderLayers::default(),
        env,
    );

    let track_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(100, 116, 139),
        unlit: true,
        ..default()
    });
    for z in [-3.0, 3.0] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(120.0, 0.3, 1.5))),
            MeshMaterial3d(track_material.clone()),
            Transform::from_xyz(0.0, 0.0, z),
            ChildOf(env),
        ));
    }
}

/// Square reference grid out of thin unlit cuboids
#[allow(clippy::too_many_arguments)]
fn spawn_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    extent: f32,
    divisions: u32,
    y: f32,
    color: Color,
    layers: RenderLayers,
    parent: Entity,
) {
    let material = materials.add(StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    });
    let along_x = meshes.add(Cuboid::new(extent, 0.05, 0.08));
    let along_z = meshes.add(Cuboid::new(0.08, 0.05, extent));
    let step = extent / divisions as f32;

    for i in 0..=divisions {
        let offset = -extent / 2.0 + i as f32 * step;
        commands.spawn((
            Mesh3d(along_x.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, y, offset),
            layers.clone(),
            ChildOf(parent),
        ));
        commands.spawn((
            Mesh3d(along_z.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(offset, y, 0.0),
            layers.clone(),
            ChildOf(parent),
        ));
    }
}

/// Spawn one wagon group from its descriptor and register its pickable
/// primitives. Every pickable gets its own material instance so the
/// hover highlight never leaks through a shared handle.
#[allow(clippy::too_many_arguments)]
fn spawn_wagon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut PickRegistry,
    wagon: &Wagon,
    desc: &WagonDescriptor,
    layers: RenderLayers,
    register_body: bool,
) -> Entity {
    let root = commands
        .spawn((Transform::from_translation(desc.position), Visibility::default()))
        .id();

    let [r, g, b] = desc.color;

    // Translucent body
    let body = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(desc.body.x, desc.body.y, desc.body.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(r, g, b, 0.2),
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                ..default()
            })),
            Transform::from_xyz(0.0, desc.body.y / 2.0, 0.0),
            layers.clone(),
            ChildOf(root),
        ))
        .id();
    if register_body {
        registry.register(body, body_pick_entry(wagon, desc));
    }

    // Corner frame rectangle on the near face
    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb(r, g, b),
        unlit: true,
        ..default()
    });
    let (l, h, w) = (desc.body.x, desc.body.y, desc.body.z);
    let edges = [
        (
            Vec3::new(l, FRAME_THICKNESS, FRAME_THICKNESS),
            Vec3::new(0.0, 0.0, -w / 2.0),
        ),
        (
            Vec3::new(l, FRAME_THICKNESS, FRAME_THICKNESS),
            Vec3::new(0.0, h, -w / 2.0),
        ),
        (
            Vec3::new(FRAME_THICKNESS, h, FRAME_THICKNESS),
            Vec3::new(-l / 2.0, h / 2.0, -w / 2.0),
        ),
        (
            Vec3::new(FRAME_THICKNESS, h, FRAME_THICKNESS),
            Vec3::new(l / 2.0, h / 2.0, -w / 2.0),
        ),
    ];
    for (size, offset) in edges {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(frame_material.clone()),
            Transform::from_translation(offset),
            layers.clone(),
            ChildOf(root),
        ));
    }

    // Capacity bar (absent in the detail view)
    if let Some(bar) = &desc.bar {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(BAR_WIDTH, BAR_HEIGHT, BAR_DEPTH))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(226, 232, 240),
                perceptual_roughness: 0.4,
                ..default()
            })),
            Transform::from_xyz(0.0, BAR_Y, 0.0),
            layers.clone(),
            ChildOf(root),
        ));
        if bar.fill_width > 0.0 {
            let [br, bg, bb] = bar.band.color();
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(bar.fill_width, BAR_HEIGHT, BAR_DEPTH))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(br, bg, bb),
                    emissive: LinearRgba::new(br * 0.3, bg * 0.3, bb * 0.3, 1.0),
                    perceptual_roughness: 0.3,
                    ..default()
                })),
                Transform::from_xyz(bar.fill_offset_x, BAR_Y, 0.0),
                layers.clone(),
                ChildOf(root),
            ));
        }
    }

    // Order primitives
    for placement in &desc.orders {
        let mesh = match placement.geometry {
            OrderGeometry::Box { x, y, z } => meshes.add(Cuboid::new(x, y, z)),
            OrderGeometry::Cylinder { radius, height } => meshes.add(Cylinder::new(radius, height)),
            OrderGeometry::Sphere { radius } => meshes.add(Sphere::new(radius)),
        };
        let [pr, pg, pb] = placement.color;
        let mut transform = Transform::from_translation(placement.offset);
        if placement.lying {
            transform.rotation = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        }
        let entity = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(pr, pg, pb),
                    ..default()
                })),
                transform,
                layers.clone(),
                ChildOf(root),
            ))
            .id();

        registry.register(entity, order_pick_entry(wagon, desc, placement));
    }

    root
}

/// Rebuild the rake scene whenever the rake data is replaced. The
/// previous build is despawned and the registry cleared first.
fn spawn_rake(
    mut commands: Commands,
    rake: Res<RakeData>,
    mut registry: ResMut<MainRegistry>,
    roots: Query<Entity, With<RakeRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !rake.is_changed() {
        return;
    }

    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
    registry.0.clear();

    let layout = rake_layout(&rake.0);
    for desc in &layout {
        let wagon = &rake.0.wagons[desc.index];
        let root = spawn_wagon(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut registry.0,
            wagon,
            desc,
            RenderLayers::default(),
            true,
        );
        commands.entity(root).insert(RakeRoot);
    }

    info!(rake = %rake.0.id, wagons = layout.len(), "Rake scene built");
}

fn update_main_camera(
    mut cameras: Query<&mut Transform, With<MainCamera>>,
    mut orbit: ResMut<MainOrbit>,
    state: Res<InteractionState>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let egui_wants_pointer = ctx.wants_pointer_input();

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    if state.detail_wagon().is_none() {
        if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
            orbit.0.dragging = true;
            orbit.0.apply_drag(total_motion.x, total_motion.y);
        } else {
            orbit.0.dragging = false;
        }

        if !egui_wants_pointer {
            for scroll in mouse_wheel.read() {
                orbit.0.apply_zoom(scroll.y * WHEEL_STEP);
            }
        }
    }
    // Drain whatever is left so stale scroll doesn't apply later
    for _ in mouse_wheel.read() {}

    if let Ok(mut transform) = cameras.single_mut() {
        transform.translation = orbit.0.position();
        transform.look_at(orbit.0.target, Vec3::Y);
    }
}

fn update_detail_camera(
    mut cameras: Query<&mut Transform, With<DetailCamera>>,
    mut orbit: ResMut<DetailOrbit>,
    state: Res<InteractionState>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
) {
    if state.detail_wagon().is_none() {
        mouse_motion.clear();
        mouse_wheel.clear();
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else { return };
    let egui_wants_pointer = ctx.wants_pointer_input();

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        orbit.0.dragging = true;
        orbit.0.apply_drag(total_motion.x, total_motion.y);
    } else {
        orbit.0.dragging = false;
    }

    if !egui_wants_pointer {
        for scroll in mouse_wheel.read() {
            orbit.0.apply_zoom(scroll.y * WHEEL_STEP);
        }
    }
    for _ in mouse_wheel.read() {}

    if let Ok(mut transform) = cameras.single_mut() {
        transform.translation = orbit.0.position();
        transform.look_at(orbit.0.target, Vec3::Y);
    }
}

/// Clear and set the emissive highlight according to a hover transition
fn apply_hover_change(
    change: HoverChange,
    material_query: &Query<&MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    if let Some(entity) = change.cleared {
        if let Ok(handle) = material_query.get(entity) {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.emissive = LinearRgba::BLACK;
            }
        }
    }
    if let Some(entity) = change.set {
        if let Ok(handle) = material_query.get(entity) {
            if let Some(material) = materials.get_mut(&handle.0) {
                material.emissive = HIGHLIGHT_EMISSIVE;
            }
        }
    }
}

fn cursor_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<PickRay> {
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    Some(PickRay::new(ray.origin, *ray.direction))
}

/// Hover picking in the main view: nearest registered bounds under the
/// cursor wins, at most one highlight at a time.
#[allow(clippy::too_many_arguments)]
fn hover_main(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<MainRegistry>,
    mut state: ResMut<InteractionState>,
    mut tooltip: ResMut<TooltipState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut contexts: EguiContexts,
) {
    if state.detail_wagon().is_some() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let Ok(window) = windows.single() else { return };

    let cursor = if ctx.wants_pointer_input() {
        None
    } else {
        window.cursor_position()
    };
    let hit = cursor.and_then(|pos| {
        let (camera, camera_transform) = cameras.single().ok()?;
        let ray = cursor_ray(camera, camera_transform, pos)?;
        registry.0.cast(&ray).map(|(entity, _)| entity)
    });

    let change = state.hover(hit);
    apply_hover_change(change, &material_query, &mut materials);

    match (state.hovered().and_then(|e| registry.0.lookup(e)), cursor) {
        (Some(entry), Some(pos)) => {
            tooltip.content = Some(match &entry.target {
                PickTarget::Wagon(wagon) => wagon_tooltip(wagon),
                PickTarget::Order { order, wagon } => order_tooltip(order, &wagon.id),
            });
            tooltip.position = pos + TOOLTIP_OFFSET;
        }
        _ => tooltip.content = None,
    }
}

/// Hover picking in the detail view. Only order primitives are
/// registered there, so the wagon envelope never captures the pointer.
#[allow(clippy::too_many_arguments)]
fn hover_detail(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<DetailCamera>>,
    registry: Res<DetailRegistry>,
    state: Res<InteractionState>,
    mut hover: ResMut<DetailHover>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut tooltip: ResMut<TooltipState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut contexts: EguiContexts,
) {
    if state.detail_wagon().is_none() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let Ok(window) = windows.single() else { return };

    if mouse_button.pressed(MouseButton::Left) {
        let change = hover.0.clear();
        apply_hover_change(change, &material_query, &mut materials);
        tooltip.content = None;
        return;
    }

    let cursor = if ctx.wants_pointer_input() {
        None
    } else {
        window.cursor_position()
    };
    let hit = cursor.and_then(|pos| {
        let (camera, camera_transform) = cameras.single().ok()?;
        let ray = cursor_ray(camera, camera_transform, pos)?;
        registry.0.cast(&ray).map(|(entity, _)| entity)
    });

    let change = hover.0.update(hit);
    apply_hover_change(change, &material_query, &mut materials);

    match (hover.0.current().and_then(|e| registry.0.lookup(e)), cursor) {
        (Some(entry), Some(pos)) => {
            if let PickTarget::Order { order, wagon } = &entry.target {
                tooltip.content = Some(order_tooltip(order, &wagon.id));
                tooltip.position = pos + TOOLTIP_OFFSET;
            }
        }
        _ => tooltip.content = None,
    }
}

/// Press/release handling: presses start a drag, short releases resolve
/// to clicks, and a click on a wagon opens its detail view. Wagon
/// clicks while a detail view is open are ignored.
#[allow(clippy::too_many_arguments)]
fn handle_clicks(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    registry: Res<MainRegistry>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut tracker: ResMut<ClickTracker>,
    mut state: ResMut<InteractionState>,
    mut tooltip: ResMut<TooltipState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    material_query: Query<&MeshMaterial3d<StandardMaterial>>,
    mut contexts: EguiContexts,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let egui_wants_pointer = ctx.wants_pointer_input();
    let Ok(window) = windows.single() else { return };

    if mouse_button.just_pressed(MouseButton::Left) && !egui_wants_pointer {
        tracker.press_position = window.cursor_position();
        let change = state.pointer_down();
        apply_hover_change(change, &material_query, &mut materials);
        if !change.is_noop() {
            tooltip.content = None;
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        let press = tracker.press_position.take();
        state.pointer_up();

        let (Some(press), Some(cursor)) = (press, window.cursor_position()) else {
            return;
        };
        if press.distance(cursor) > CLICK_SLOP {
            return;
        }

        let Ok((camera, camera_transform)) = cameras.single() else {
            return;
        };
        let Some(ray) = cursor_ray(camera, camera_transform, cursor) else {
            return;
        };
        let Some((entity, _)) = registry.0.cast(&ray) else {
            return;
        };
        let Some(entry) = registry.0.lookup(entity) else {
            return;
        };
        // Only wagon hits change state; orders and empty space do nothing
        if let PickTarget::Wagon(wagon) = &entry.target {
            if let Some(change) = state.click_wagon(&wagon.id) {
                apply_hover_change(change, &material_query, &mut materials);
                tooltip.content = None;
                info!(wagon = %wagon.id, "Opening wagon detail view");
            }
        }
    }
}

/// Build and tear down the detail view as the interaction state enters
/// and leaves `DetailOpen`. Teardown despawns every detail entity,
/// clears the detail registry, and resets the order-list flag; the main
/// view's registry is never touched.
#[allow(clippy::too_many_arguments)]
fn sync_detail_view(
    mut commands: Commands,
    state: Res<InteractionState>,
    rake: Res<RakeData>,
    mut detail_registry: ResMut<DetailRegistry>,
    mut detail_orbit: ResMut<DetailOrbit>,
    mut detail_hover: ResMut<DetailHover>,
    mut expanded: ResMut<OrdersListExpanded>,
    mut tooltip: ResMut<TooltipState>,
    mut cameras: Query<&mut Camera, With<DetailCamera>>,
    roots: Query<Entity, With<DetailRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !state.is_changed() {
        return;
    }

    match state.detail_wagon() {
        Some(wagon_id) if roots.is_empty() => {
            let Some(wagon) = rake.0.wagons.iter().find(|w| w.id == wagon_id) else {
                warn!(wagon = wagon_id, "Detail view requested for unknown wagon");
                return;
            };
            let layers = RenderLayers::layer(1);

            // Environment: light, ground, grid
            let env = commands
                .spawn((Transform::IDENTITY, Visibility::default(), DetailRoot))
                .id();
            commands.spawn((
                DirectionalLight {
                    illuminance: 4000.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(30.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
                layers.clone(),
                ChildOf(env),
            ));
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(50.0, 0.2, 40.0))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(241, 245, 249),
                    unlit: true,
                    ..default()
                })),
                Transform::from_xyz(0.0, -0.6, 0.0),
                layers.clone(),
                ChildOf(env),
            ));
            spawn_grid(
                &mut commands,
                &mut meshes,
                &mut materials,
                40.0,
                15,
                -0.4,
                Color::srgb_u8(226, 232, 240),
                layers.clone(),
                env,
            );

            // Reduced single-wagon build: no capacity bar, orders only
            // are pickable
            let desc = detail_layout(wagon);
            let root = spawn_wagon(
                &mut commands,
                &mut meshes,
                &mut materials,
                &mut detail_registry.0,
                wagon,
                &desc,
                layers,
                false,
            );
            commands.entity(root).insert(DetailRoot);

            detail_orbit.0 = OrbitCamera::detail_view();
            for mut camera in cameras.iter_mut() {
                camera.is_active = true;
            }
            info!(wagon = %wagon.id, orders = wagon.orders.len(), "Detail view opened");
        }
        None if !roots.is_empty() => {
            for entity in roots.iter() {
                commands.entity(entity).despawn();
            }
            detail_registry.0.clear();
            // Entities are gone with their materials, nothing to restore
            let _ = detail_hover.0.clear();
            tooltip.content = None;
            expanded.0 = true;
            for mut camera in cameras.iter_mut() {
                camera.is_active = false;
            }
            info!("Detail view closed");
        }
        _ => {}
    }
}
