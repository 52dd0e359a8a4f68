//! UI overlays using bevy_egui
//!
//! Info bar, priority legend, controls hint, the hover tooltip, and the
//! wagon detail modal. All overlay state lives in resources; this
//! module only draws it.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use railviz_core::tooltip::format_kg;
use railviz_core::types::{Priority, Wagon};
use railviz_scene::InteractionState;

use crate::app::{OrdersListExpanded, RakeData, TooltipState};

/// Grouped system parameters for the overlay system
#[derive(SystemParam)]
pub struct UiParams<'w, 's> {
    pub contexts: EguiContexts<'w, 's>,
    pub rake: Res<'w, RakeData>,
    pub state: ResMut<'w, InteractionState>,
    pub tooltip: Res<'w, TooltipState>,
    pub expanded: ResMut<'w, OrdersListExpanded>,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

fn color32(rgb: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8,
    )
}

fn ui_system(mut params: UiParams) {
    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    info_overlay(ctx, &params.rake);
    legend_overlay(ctx);
    controls_overlay(ctx, params.state.detail_wagon().is_some());
    tooltip_overlay(ctx, &params.tooltip);

    let mut close_clicked = false;
    if let Some(wagon_id) = params.state.detail_wagon().map(str::to_string) {
        detail_modal(
            ctx,
            &params.rake,
            &wagon_id,
            &mut params.expanded,
            &mut close_clicked,
        );
    }
    if close_clicked {
        params.state.close_detail();
    }
}

/// Rake id and wagon count, top left
fn info_overlay(ctx: &egui::Context, rake: &RakeData) {
    egui::Area::new(egui::Id::new("rake_info"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Rake ID:").weak().size(11.0));
                    ui.label(egui::RichText::new(&rake.0.id).strong());
                    ui.separator();
                    ui.label(egui::RichText::new("Wagons:").weak().size(11.0));
                    ui.label(egui::RichText::new(rake.0.wagons.len().to_string()).strong());
                });
            });
        });
}

/// Priority color legend, bottom left
fn legend_overlay(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("priority_legend"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new("Priority").strong().size(11.0));
                for priority in [Priority::High, Priority::Medium, Priority::Low] {
                    ui.horizontal(|ui| {
                        ui.colored_label(color32(priority.color()), "\u{25a0}");
                        ui.label(egui::RichText::new(priority.label()).size(11.0));
                    });
                }
            });
        });
}

/// Pointer controls hint, bottom right
fn controls_overlay(ctx: &egui::Context, detail_open: bool) {
    egui::Area::new(egui::Id::new("controls_hint"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new("Drag to rotate").size(11.0));
                ui.label(egui::RichText::new("Scroll to zoom").size(11.0));
                if detail_open {
                    ui.label(egui::RichText::new("Hover for info").size(11.0));
                } else {
                    ui.label(egui::RichText::new("Click wagon for details").size(11.0));
                }
            });
        });
}

/// Hover tooltip at the pointer position
fn tooltip_overlay(ctx: &egui::Context, tooltip: &TooltipState) {
    let Some(content) = &tooltip.content else {
        return;
    };
    egui::Area::new(egui::Id::new("hover_tooltip"))
        .fixed_pos(egui::pos2(tooltip.position.x, tooltip.position.y))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&content.title).strong());
                for line in &content.lines {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(line.label).strong().size(11.0));
                        ui.label(egui::RichText::new(&line.value).size(11.0));
                    });
                }
                if let Some(hint) = content.hint {
                    ui.label(egui::RichText::new(hint).weak().italics().size(10.0));
                }
            });
        });
}

/// Title row of the collapsible order list: count plus the wagon's
/// total load
fn orders_header(wagon: &Wagon) -> String {
    format!(
        "Orders in Wagon ({}) \u{2022} Total: {}",
        wagon.orders.len(),
        format_kg(wagon.current_load)
    )
}

/// Modal for the open detail view: wagon header, close button, and the
/// collapsible order list
fn detail_modal(
    ctx: &egui::Context,
    rake: &RakeData,
    wagon_id: &str,
    expanded: &mut OrdersListExpanded,
    close_clicked: &mut bool,
) {
    let Some(wagon) = rake.0.wagons.iter().find(|w| w.id == wagon_id) else {
        return;
    };

    egui::Window::new(format!("{} - Detailed View", wagon.id))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Load:").weak());
                ui.label(
                    egui::RichText::new(format!(
                        "{} / {}",
                        format_kg(wagon.current_load),
                        format_kg(wagon.capacity)
                    ))
                    .strong(),
                );
                ui.colored_label(
                    color32(wagon.band().color()),
                    format!("({:.1}%)", wagon.utilization() * 100.0),
                );
            });
            ui.separator();

            let header = egui::CollapsingHeader::new(orders_header(wagon))
                .open(Some(expanded.0))
                .show(ui, |ui| {
                    for order in &wagon.orders {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&order.id).strong().size(11.0));
                            ui.colored_label(
                                color32(order.priority.color()),
                                egui::RichText::new(order.priority.label()).size(11.0),
                            );
                        });
                        ui.label(
                            egui::RichText::new(format!("Destination: {}", order.destination))
                                .size(11.0),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Quantity: {}",
                                format_kg(order.quantity)
                            ))
                            .size(11.0),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Shape: {} \u{2022} {}\u{d7}{}\u{d7}{}m",
                                order.shape.label(),
                                order.dimensions.length,
                                order.dimensions.width,
                                order.dimensions.height
                            ))
                            .size(11.0),
                        );
                        ui.add_space(4.0);
                    }
                });
            if header.header_response.clicked() {
                expanded.0 = !expanded.0;
            }

            ui.separator();
            if ui.button("Close").clicked() {
                *close_clicked = true;
            }
        });
}
