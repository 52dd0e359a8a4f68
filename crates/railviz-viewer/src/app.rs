//! Bevy application setup

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use railviz_core::types::Rake;
use railviz_core::TooltipContent;
use railviz_scene::{HoverSlot, InteractionState, OrbitCamera, PickRegistry};

use crate::scene::ScenePlugin;
use crate::ui::UiPlugin;

/// The rake currently on display. Replacing it triggers a scene rebuild.
#[derive(Debug, Clone, Resource)]
pub struct RakeData(pub Rake);

/// Orbit controller for the main view camera
#[derive(Debug, Clone, Resource)]
pub struct MainOrbit(pub OrbitCamera);

impl Default for MainOrbit {
    fn default() -> Self {
        Self(OrbitCamera::main_view())
    }
}

/// Orbit controller for the detail view camera
#[derive(Debug, Clone, Resource)]
pub struct DetailOrbit(pub OrbitCamera);

impl Default for DetailOrbit {
    fn default() -> Self {
        Self(OrbitCamera::detail_view())
    }
}

/// Pick registry for the main view
#[derive(Debug, Default, Resource)]
pub struct MainRegistry(pub PickRegistry);

/// Pick registry for the detail view, torn down with it
#[derive(Debug, Default, Resource)]
pub struct DetailRegistry(pub PickRegistry);

/// Hover tracking for the detail view
#[derive(Debug, Default, Resource)]
pub struct DetailHover(pub HoverSlot);

/// Tooltip overlay state, recomputed on every pointer move
#[derive(Debug, Clone, Default, Resource)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    /// Screen-space anchor in logical pixels
    pub position: Vec2,
}

/// Whether the detail modal's order list is expanded.
/// Reset to the default (expanded) whenever the detail view closes.
#[derive(Debug, Clone, Resource)]
pub struct OrdersListExpanded(pub bool);

impl Default for OrdersListExpanded {
    fn default() -> Self {
        Self(true)
    }
}

/// Distinguishes clicks from orbit drags by the distance the pointer
/// traveled while pressed
#[derive(Debug, Clone, Default, Resource)]
pub struct ClickTracker {
    pub press_position: Option<Vec2>,
}

/// Run the Bevy application
pub fn run(rake: Rake) {
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(248, 250, 252)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Railviz Rake Viewer".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(RakeData(rake))
        .init_resource::<MainOrbit>()
        .init_resource::<DetailOrbit>()
        .init_resource::<MainRegistry>()
        .init_resource::<DetailRegistry>()
        .init_resource::<InteractionState>()
        .init_resource::<DetailHover>()
        .init_resource::<TooltipState>()
        .init_resource::<OrdersListExpanded>()
        .init_resource::<ClickTracker>()
        .add_plugins(ScenePlugin)
        .add_plugins(UiPlugin)
        .run();
}
