//! Pointer interaction state machine
//!
//! Pure transitions over pointer events. The viewer feeds it device
//! input and acts on the returned [`HoverChange`]; nothing in here
//! touches entities, materials, or domain records.

use bevy::ecs::entity::Entity;
use bevy::prelude::Resource;

/// Highlight delta produced by a hover transition. `cleared` must lose
/// its highlight before `set` gains one; at most one entity is
/// highlighted at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverChange {
    pub cleared: Option<Entity>,
    pub set: Option<Entity>,
}

impl HoverChange {
    pub const NONE: Self = Self {
        cleared: None,
        set: None,
    };

    pub fn is_noop(&self) -> bool {
        self.cleared.is_none() && self.set.is_none()
    }

    fn diff(prev: Option<Entity>, next: Option<Entity>) -> Self {
        if prev == next {
            Self::NONE
        } else {
            Self {
                cleared: prev,
                set: next,
            }
        }
    }
}

/// Main-view interaction state
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Pointer is pressed; orbit drag in progress, hover suppressed
    Dragging,
    HoverActive(Entity),
    /// The detail view for this wagon is open; main-view picking is
    /// suspended until it closes
    DetailOpen(String),
}

impl InteractionState {
    pub fn hovered(&self) -> Option<Entity> {
        match self {
            InteractionState::HoverActive(entity) => Some(*entity),
            _ => None,
        }
    }

    pub fn detail_wagon(&self) -> Option<&str> {
        match self {
            InteractionState::DetailOpen(id) => Some(id),
            _ => None,
        }
    }

    /// Pointer press. Any active highlight is dropped for the duration
    /// of the drag.
    pub fn pointer_down(&mut self) -> HoverChange {
        match std::mem::replace(self, InteractionState::Dragging) {
            InteractionState::Idle => HoverChange::NONE,
            InteractionState::HoverActive(prev) => HoverChange::diff(Some(prev), None),
            other @ InteractionState::DetailOpen(_) => {
                *self = other;
                HoverChange::NONE
            }
            InteractionState::Dragging => HoverChange::NONE,
        }
    }

    /// Pointer release ends a drag; the next pointer move re-resolves hover.
    pub fn pointer_up(&mut self) {
        if *self == InteractionState::Dragging {
            *self = InteractionState::Idle;
        }
    }

    /// Pointer move with the current hit-test result. No-op while
    /// dragging or while the detail view is open.
    pub fn hover(&mut self, hit: Option<Entity>) -> HoverChange {
        let prev = match self {
            InteractionState::Idle => None,
            InteractionState::HoverActive(entity) => Some(*entity),
            InteractionState::Dragging | InteractionState::DetailOpen(_) => {
                return HoverChange::NONE
            }
        };
        let change = HoverChange::diff(prev, hit);
        if !change.is_noop() {
            *self = match hit {
                Some(entity) => InteractionState::HoverActive(entity),
                None => InteractionState::Idle,
            };
        }
        change
    }

    /// A completed click resolved to a wagon. Returns the highlight to
    /// clear when the detail view opens, or `None` when the click is
    /// ignored because a detail view is already open.
    pub fn click_wagon(&mut self, wagon_id: &str) -> Option<HoverChange> {
        match std::mem::replace(self, InteractionState::DetailOpen(wagon_id.to_string())) {
            InteractionState::Idle => Some(HoverChange::NONE),
            InteractionState::HoverActive(prev) => Some(HoverChange::diff(Some(prev), None)),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Close the detail view. Returns false when none is open.
    pub fn close_detail(&mut self) -> bool {
        if matches!(self, InteractionState::DetailOpen(_)) {
            *self = InteractionState::Idle;
            true
        } else {
            false
        }
    }
}

/// Hover tracking for the detail view, which stays pickable while the
/// main-view machine is parked in `DetailOpen`.
#[derive(Resource, Debug, Default)]
pub struct HoverSlot {
    current: Option<Entity>,
}

impl HoverSlot {
    pub fn current(&self) -> Option<Entity> {
        self.current
    }

    pub fn update(&mut self, hit: Option<Entity>) -> HoverChange {
        let change = HoverChange::diff(self.current, hit);
        self.current = hit;
        change
    }

    pub fn clear(&mut self) -> HoverChange {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::World;

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_drag_cycle() {
        let mut state = InteractionState::default();
        assert!(state.pointer_down().is_noop());
        assert_eq!(state, InteractionState::Dragging);
        assert!(state.hover(entities(1).first().copied()).is_noop());
        state.pointer_up();
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn test_hover_swaps_at_most_one_highlight() {
        let ents = entities(2);
        let mut state = InteractionState::default();

        let change = state.hover(Some(ents[0]));
        assert_eq!(change.cleared, None);
        assert_eq!(change.set, Some(ents[0]));

        // Same hit again is a no-op
        assert!(state.hover(Some(ents[0])).is_noop());

        // Moving to a different primitive clears the old one first
        let change = state.hover(Some(ents[1]));
        assert_eq!(change.cleared, Some(ents[0]));
        assert_eq!(change.set, Some(ents[1]));

        // Moving off into empty space clears without setting
        let change = state.hover(None);
        assert_eq!(change.cleared, Some(ents[1]));
        assert_eq!(change.set, None);
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn test_pointer_down_drops_active_highlight() {
        let ents = entities(1);
        let mut state = InteractionState::default();
        state.hover(Some(ents[0]));
        let change = state.pointer_down();
        assert_eq!(change.cleared, Some(ents[0]));
        assert_eq!(change.set, None);
    }

    #[test]
    fn test_click_opens_detail_and_clears_hover() {
        let ents = entities(1);
        let mut state = InteractionState::default();
        state.hover(Some(ents[0]));
        let change = state.click_wagon("W02").unwrap();
        assert_eq!(change.cleared, Some(ents[0]));
        assert_eq!(state.detail_wagon(), Some("W02"));
    }

    #[test]
    fn test_click_ignored_while_detail_open() {
        let mut state = InteractionState::default();
        assert!(state.click_wagon("W01").is_some());
        // A second wagon click while the detail view is open is ignored
        assert!(state.click_wagon("W03").is_none());
        assert_eq!(state.detail_wagon(), Some("W01"));
    }

    #[test]
    fn test_close_detail_returns_to_idle() {
        let mut state = InteractionState::default();
        state.click_wagon("W04");
        assert!(state.close_detail());
        assert_eq!(state, InteractionState::Idle);
        assert!(!state.close_detail());
    }

    #[test]
    fn test_hover_suppressed_while_detail_open() {
        let ents = entities(1);
        let mut state = InteractionState::default();
        state.click_wagon("W01");
        assert!(state.hover(Some(ents[0])).is_noop());
        assert_eq!(state.detail_wagon(), Some("W01"));
    }

    #[test]
    fn test_hover_slot_tracks_detail_view() {
        let ents = entities(2);
        let mut slot = HoverSlot::default();
        let change = slot.update(Some(ents[0]));
        assert_eq!(change.set, Some(ents[0]));
        let change = slot.update(Some(ents[1]));
        assert_eq!(change.cleared, Some(ents[0]));
        assert_eq!(change.set, Some(ents[1]));
        let change = slot.clear();
        assert_eq!(change.cleared, Some(ents[1]));
        assert_eq!(slot.current(), None);
    }
}
