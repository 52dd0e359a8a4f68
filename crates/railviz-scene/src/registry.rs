//! Object registry - maps scene entities back to their domain records
//!
//! One registry per view. The main view and the detail view each own an
//! independent instance; entries never outlive their scene and never
//! cross between views.

use bevy::ecs::entity::Entity;
use bevy::math::Vec3;
use std::collections::HashMap;

use railviz_core::types::{Order, Wagon};

use crate::descriptor::{OrderGeometry, OrderPlacement, WagonDescriptor};
use crate::picking::{ray_aabb, ray_sphere, PickRay};

/// Reference to the wagon an order primitive belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct ParentWagon {
    pub id: String,
    pub color: [f32; 3],
}

/// What a pickable primitive stands for
#[derive(Debug, Clone, PartialEq)]
pub enum PickTarget {
    Wagon(Wagon),
    Order { order: Order, wagon: ParentWagon },
}

/// World-space bounds used for ray hit-testing a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickBounds {
    Aabb { center: Vec3, half: Vec3 },
    Sphere { center: Vec3, radius: f32 },
}

impl PickBounds {
    pub fn center(&self) -> Vec3 {
        match self {
            PickBounds::Aabb { center, .. } => *center,
            PickBounds::Sphere { center, .. } => *center,
        }
    }

    fn intersect(&self, ray: &PickRay) -> Option<f32> {
        match *self {
            PickBounds::Aabb { center, half } => ray_aabb(ray, center, half),
            PickBounds::Sphere { center, radius } => ray_sphere(ray, center, radius),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickEntry {
    pub target: PickTarget,
    pub bounds: PickBounds,
}

/// Pick entry for a wagon body, bounds in world space
pub fn body_pick_entry(wagon: &Wagon, desc: &WagonDescriptor) -> PickEntry {
    PickEntry {
        target: PickTarget::Wagon(wagon.clone()),
        bounds: PickBounds::Aabb {
            center: desc.position + Vec3::new(0.0, desc.body.y / 2.0, 0.0),
            half: desc.body / 2.0,
        },
    }
}

/// Pick entry for one placed order primitive
pub fn order_pick_entry(
    wagon: &Wagon,
    desc: &WagonDescriptor,
    placement: &OrderPlacement,
) -> PickEntry {
    let center = desc.position + placement.offset;
    let bounds = match placement.geometry {
        OrderGeometry::Box { x, y, z } => PickBounds::Aabb {
            center,
            half: Vec3::new(x, y, z) / 2.0,
        },
        // Lying on its side, so the cylinder axis runs along Z
        OrderGeometry::Cylinder { radius, height } => PickBounds::Aabb {
            center,
            half: Vec3::new(radius, radius, height / 2.0),
        },
        OrderGeometry::Sphere { radius } => PickBounds::Sphere { center, radius },
    };
    PickEntry {
        target: PickTarget::Order {
            order: wagon.orders[placement.order_index].clone(),
            wagon: ParentWagon {
                id: wagon.id.clone(),
                color: wagon.color,
            },
        },
        bounds,
    }
}

/// Every pick entry for one wagon build, body first when `with_body`.
/// Pure over the descriptor, so rebuilding a scene from the same rake
/// registers the same kinds and bounds.
pub fn wagon_pick_entries(
    wagon: &Wagon,
    desc: &WagonDescriptor,
    with_body: bool,
) -> Vec<PickEntry> {
    let mut entries = Vec::with_capacity(desc.orders.len() + 1);
    if with_body {
        entries.push(body_pick_entry(wagon, desc));
    }
    for placement in &desc.orders {
        entries.push(order_pick_entry(wagon, desc, placement));
    }
    entries
}

/// Entity-keyed registry of pickable primitives for one scene instance
#[derive(Debug, Default)]
pub struct PickRegistry {
    entries: HashMap<Entity, PickEntry>,
}

impl PickRegistry {
    pub fn register(&mut self, entity: Entity, entry: PickEntry) {
        self.entries.insert(entity, entry);
    }

    pub fn lookup(&self, entity: Entity) -> Option<&PickEntry> {
        self.entries.get(&entity)
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(entries = self.entries.len(), "Pick registry cleared");
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entity, &PickEntry)> {
        self.entries.iter()
    }

    /// Nearest registered primitive hit by the ray, if any
    pub fn cast(&self, ray: &PickRay) -> Option<(Entity, f32)> {
        let mut nearest: Option<(Entity, f32)> = None;
        for (&entity, entry) in &self.entries {
            if let Some(t) = entry.bounds.intersect(ray) {
                if nearest.map_or(true, |(_, best)| t < best) {
                    nearest = Some((entity, t));
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::World;
    use railviz_core::fixture::sample_rake;

    use crate::descriptor::{detail_layout, rake_layout};

    fn all_entries(with_body: bool) -> Vec<PickEntry> {
        let rake = sample_rake();
        rake_layout(&rake)
            .iter()
            .flat_map(|desc| wagon_pick_entries(&rake.wagons[desc.index], desc, with_body))
            .collect()
    }

    #[test]
    fn test_rebuild_derives_identical_pick_entries() {
        let a = all_entries(true);
        let b = all_entries(true);
        assert_eq!(a, b);
        // 4 wagon bodies plus 9 order primitives
        assert_eq!(a.len(), 13);
        let wagons = a
            .iter()
            .filter(|e| matches!(e.target, PickTarget::Wagon(_)))
            .count();
        assert_eq!(wagons, 4);
        assert_eq!(a.len() - wagons, 9);
    }

    #[test]
    fn test_detail_entries_are_orders_only() {
        let rake = sample_rake();
        let desc = detail_layout(&rake.wagons[1]);
        let entries = wagon_pick_entries(&rake.wagons[1], &desc, false);
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| matches!(e.target, PickTarget::Order { .. })));
    }

    #[test]
    fn test_body_bounds_sit_on_the_wagon_center() {
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let entry = body_pick_entry(&rake.wagons[0], &layout[0]);
        let PickBounds::Aabb { center, half } = entry.bounds else {
            panic!("wagon body should carry box bounds");
        };
        assert_eq!(center, layout[0].position + Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(half, Vec3::new(15.0, 4.0, 5.0));
    }

    #[test]
    fn test_lying_cylinder_bounds_swap_axes() {
        // ORD-2403 is a 4m wide, 2.5m tall cylinder resting on its side,
        // so its length runs along Z and the radius spans X and Y
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let entries = wagon_pick_entries(&rake.wagons[0], &layout[0], true);
        let cylinder = &entries[3];
        assert!(matches!(
            &cylinder.target,
            PickTarget::Order { order, .. } if order.id == "ORD-2403"
        ));
        let PickBounds::Aabb { center, half } = cylinder.bounds else {
            panic!("lying cylinder should carry box bounds");
        };
        assert_eq!(half, Vec3::new(2.0, 2.0, 1.25));
        assert_eq!(center, layout[0].position + layout[0].orders[2].offset);
    }

    #[test]
    fn test_sphere_order_gets_sphere_bounds() {
        // ORD-2405 in W02 renders as a sphere
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let entries = wagon_pick_entries(&rake.wagons[1], &layout[1], true);
        let sphere = &entries[2];
        assert!(matches!(
            &sphere.target,
            PickTarget::Order { order, wagon } if order.id == "ORD-2405" && wagon.id == "W02"
        ));
        assert!(matches!(
            sphere.bounds,
            PickBounds::Sphere { radius, .. } if radius == 2.0
        ));
    }

    fn wagon_entry(center: Vec3) -> PickEntry {
        PickEntry {
            target: PickTarget::Wagon(sample_rake().wagons[0].clone()),
            bounds: PickBounds::Aabb {
                center,
                half: Vec3::new(15.0, 4.0, 5.0),
            },
        }
    }

    #[test]
    fn test_register_lookup_clear() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut reg = PickRegistry::default();
        reg.register(e, wagon_entry(Vec3::ZERO));
        assert_eq!(reg.len(), 1);
        assert!(matches!(
            reg.lookup(e).map(|entry| &entry.target),
            Some(PickTarget::Wagon(_))
        ));
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.lookup(e).is_none());
    }

    #[test]
    fn test_cast_hits_centroid_and_misses_background() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let mut reg = PickRegistry::default();
        let center = Vec3::new(10.0, 4.0, 0.0);
        reg.register(e, wagon_entry(center));

        // Ray aimed straight at the primitive's center
        let origin = Vec3::new(10.0, 4.0, 100.0);
        let hit_ray = PickRay::new(origin, center - origin);
        assert_eq!(reg.cast(&hit_ray).map(|(entity, _)| entity), Some(e));

        // Ray off into empty space
        let miss_ray = PickRay::new(origin, Vec3::new(0.0, 1.0, 0.0));
        assert!(reg.cast(&miss_ray).is_none());
    }

    #[test]
    fn test_detail_lifecycle_leaves_other_registry_untouched() {
        let mut world = World::new();
        let main_entities: Vec<_> = (0..3).map(|_| world.spawn_empty().id()).collect();
        let mut main = PickRegistry::default();
        for (i, &e) in main_entities.iter().enumerate() {
            main.register(e, wagon_entry(Vec3::new(i as f32 * 35.0, 4.0, 0.0)));
        }
        let before: std::collections::HashSet<Entity> =
            main.iter().map(|(&entity, _)| entity).collect();

        // A detail view populates and tears down its own registry
        let mut detail = PickRegistry::default();
        let detail_entity = world.spawn_empty().id();
        detail.register(detail_entity, wagon_entry(Vec3::ZERO));
        detail.clear();
        assert!(detail.is_empty());

        let after: std::collections::HashSet<Entity> =
            main.iter().map(|(&entity, _)| entity).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cast_prefers_nearest_hit() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let mut reg = PickRegistry::default();
        reg.register(near, wagon_entry(Vec3::new(0.0, 0.0, 20.0)));
        reg.register(far, wagon_entry(Vec3::new(0.0, 0.0, -20.0)));

        let ray = PickRay::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(reg.cast(&ray).map(|(entity, _)| entity), Some(near));
    }
}
