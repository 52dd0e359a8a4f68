//! Domain data adapter - maps rake records into renderable descriptors
//!
//! Pure transformation: identical input produces identical output, which
//! is what makes scene rebuilds stable.

use bevy::math::Vec3;

use railviz_core::types::{Order, OrderShape, Rake, UtilizationBand, Wagon};

/// Wagon body extents (x = along track, y = up, z = across track)
pub const WAGON_LENGTH: f32 = 30.0;
pub const WAGON_HEIGHT: f32 = 8.0;
pub const WAGON_WIDTH: f32 = 10.0;
/// Gap between adjacent wagons along the track
pub const WAGON_GAP: f32 = 5.0;

/// Fill bar footprint relative to the wagon body
pub const BAR_WIDTH: f32 = WAGON_LENGTH * 0.9;
pub const BAR_HEIGHT: f32 = 0.5;
pub const BAR_DEPTH: f32 = WAGON_WIDTH * 0.3;
pub const BAR_Y: f32 = 0.3;

/// Order packing along the wagon floor
const ORDER_MARGIN: f32 = 2.0;
const ORDER_SPACING: f32 = 0.5;
const ORDER_BASE_Y: f32 = 1.0;
const ORDER_LATERAL_OFFSET: f32 = 2.0;

/// Geometry primitive chosen for one order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderGeometry {
    /// Full extents (x, y, z)
    Box { x: f32, y: f32, z: f32 },
    Cylinder { radius: f32, height: f32 },
    Sphere { radius: f32 },
}

impl OrderGeometry {
    /// Box maps (length, height, width) onto (x, y, z); cylinder takes its
    /// radius from width and its height from height; sphere takes its
    /// radius from the larger of width and height.
    pub fn for_order(order: &Order) -> Self {
        let d = order.dimensions;
        match order.shape {
            OrderShape::Cylinder => OrderGeometry::Cylinder {
                radius: d.width / 2.0,
                height: d.height,
            },
            OrderShape::Sphere => OrderGeometry::Sphere {
                radius: d.width.max(d.height) / 2.0,
            },
            OrderShape::Box => OrderGeometry::Box {
                x: d.length,
                y: d.height,
                z: d.width,
            },
        }
    }
}

/// One order primitive placed inside its wagon group
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPlacement {
    pub order_index: usize,
    /// Offset from the wagon group origin
    pub offset: Vec3,
    pub geometry: OrderGeometry,
    /// Cylinders lie on their side (rotated a quarter turn about X)
    pub lying: bool,
    pub color: [f32; 3],
}

/// Capacity bar split into a background and a band-colored filled segment
#[derive(Debug, Clone, PartialEq)]
pub struct FillBar {
    /// Display ratio, clamped to [0, 1]
    pub ratio: f32,
    pub band: UtilizationBand,
    /// Width of the filled segment
    pub fill_width: f32,
    /// X offset of the filled segment's center from the group origin
    pub fill_offset_x: f32,
}

/// Renderable description of one wagon group
#[derive(Debug, Clone, PartialEq)]
pub struct WagonDescriptor {
    pub index: usize,
    /// Group origin in world space
    pub position: Vec3,
    /// Body extents (x, y, z)
    pub body: Vec3,
    pub color: [f32; 3],
    /// Absent in the reduced detail view
    pub bar: Option<FillBar>,
    pub orders: Vec<OrderPlacement>,
}

fn fill_bar(wagon: &Wagon) -> FillBar {
    let ratio = wagon.display_utilization();
    let fill_width = BAR_WIDTH * ratio;
    FillBar {
        ratio,
        band: wagon.band(),
        fill_width,
        fill_offset_x: -BAR_WIDTH / 2.0 + fill_width / 2.0,
    }
}

fn order_placements(wagon: &Wagon) -> Vec<OrderPlacement> {
    let mut placements = Vec::with_capacity(wagon.orders.len());
    let mut cursor_x = -WAGON_LENGTH / 2.0 + ORDER_MARGIN;

    for (index, order) in wagon.orders.iter().enumerate() {
        let d = order.dimensions;
        let geometry = OrderGeometry::for_order(order);
        let y = match order.shape {
            OrderShape::Sphere => ORDER_BASE_Y + d.width.max(d.height) / 2.0,
            _ => ORDER_BASE_Y + d.height / 2.0,
        };
        // Alternate the lateral offset so neighbors don't visually overlap
        let z = if index % 2 == 0 {
            -ORDER_LATERAL_OFFSET
        } else {
            ORDER_LATERAL_OFFSET
        };

        placements.push(OrderPlacement {
            order_index: index,
            offset: Vec3::new(cursor_x + d.length / 2.0, y, z),
            geometry,
            lying: order.shape == OrderShape::Cylinder,
            color: order.priority.color(),
        });

        cursor_x += d.length + ORDER_SPACING;
    }

    placements
}

fn wagon_descriptor(wagon: &Wagon, index: usize, position: Vec3, with_bar: bool) -> WagonDescriptor {
    WagonDescriptor {
        index,
        position,
        body: Vec3::new(WAGON_LENGTH, WAGON_HEIGHT, WAGON_WIDTH),
        color: wagon.color,
        bar: with_bar.then(|| fill_bar(wagon)),
        orders: order_placements(wagon),
    }
}

/// X position of wagon `index` in a rake of `count` wagons, centered on the origin
pub fn wagon_x(index: usize, count: usize) -> f32 {
    (index as f32 - count as f32 / 2.0) * (WAGON_LENGTH + WAGON_GAP) + WAGON_LENGTH / 2.0
}

/// Lay out a full rake: one descriptor per wagon, left to right, with
/// fill bars. An empty rake yields an empty layout (not an error).
pub fn rake_layout(rake: &Rake) -> Vec<WagonDescriptor> {
    let count = rake.wagons.len();
    rake.wagons
        .iter()
        .enumerate()
        .map(|(i, wagon)| {
            wagon_descriptor(wagon, i, Vec3::new(wagon_x(i, count), 0.0, 0.0), true)
        })
        .collect()
}

/// Reduced single-wagon layout for the detail view: centered, no fill bar
pub fn detail_layout(wagon: &Wagon) -> WagonDescriptor {
    wagon_descriptor(wagon, 0, Vec3::ZERO, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use railviz_core::fixture::sample_rake;
    use railviz_core::types::{Dimensions, Priority};

    fn order(shape: OrderShape, length: f32, width: f32, height: f32) -> Order {
        Order {
            id: "ORD-T".to_string(),
            quantity: 1000.0,
            destination: "Test".to_string(),
            priority: Priority::Low,
            dimensions: Dimensions::new(length, width, height),
            shape,
        }
    }

    #[test]
    fn test_box_geometry_extent_order() {
        let g = OrderGeometry::for_order(&order(OrderShape::Box, 8.0, 4.0, 3.0));
        assert_eq!(g, OrderGeometry::Box { x: 8.0, y: 3.0, z: 4.0 });
    }

    #[test]
    fn test_cylinder_geometry() {
        let g = OrderGeometry::for_order(&order(OrderShape::Cylinder, 7.0, 4.0, 2.5));
        assert_eq!(
            g,
            OrderGeometry::Cylinder {
                radius: 2.0,
                height: 2.5
            }
        );
    }

    #[test]
    fn test_sphere_radius_is_half_max_of_width_height() {
        let g = OrderGeometry::for_order(&order(OrderShape::Sphere, 8.0, 4.0, 3.5));
        assert_eq!(g, OrderGeometry::Sphere { radius: 2.0 });
    }

    #[test]
    fn test_layout_is_deterministic() {
        let rake = sample_rake();
        let a = rake_layout(&rake);
        let b = rake_layout(&rake);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_empty_rake_layout() {
        let rake = Rake {
            id: "R0".to_string(),
            wagons: Vec::new(),
        };
        assert!(rake_layout(&rake).is_empty());
    }

    #[test]
    fn test_orders_advance_along_x_and_alternate_z() {
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let w01 = &layout[0];
        assert_eq!(w01.orders.len(), 3);
        // First order: 8m long, starts at the left margin
        let first = &w01.orders[0];
        assert_eq!(first.offset.x, -WAGON_LENGTH / 2.0 + 2.0 + 4.0);
        assert_eq!(first.offset.z, -2.0);
        assert_eq!(w01.orders[1].offset.z, 2.0);
        assert_eq!(w01.orders[2].offset.z, -2.0);
        // Each order advances by its own length plus the spacing
        assert!(w01.orders[1].offset.x > first.offset.x);
    }

    #[test]
    fn test_fill_bar_band_colors_for_scenario() {
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let w01 = layout[0].bar.as_ref().unwrap();
        let w04 = layout[3].bar.as_ref().unwrap();
        assert_eq!(w01.band, UtilizationBand::Warning);
        assert_eq!(w04.band, UtilizationBand::Critical);
        assert!((w01.ratio - 53000.0 / 60000.0).abs() < 1e-6);
    }

    #[test]
    fn test_overloaded_wagon_bar_clamps() {
        let mut rake = sample_rake();
        rake.wagons[0].current_load = 90000.0;
        let layout = rake_layout(&rake);
        let bar = layout[0].bar.as_ref().unwrap();
        assert_eq!(bar.ratio, 1.0);
        assert_eq!(bar.fill_width, BAR_WIDTH);
        assert_eq!(bar.fill_offset_x, 0.0);
    }

    #[test]
    fn test_detail_layout_has_no_bar_and_is_centered() {
        let rake = sample_rake();
        let d = detail_layout(&rake.wagons[1]);
        assert!(d.bar.is_none());
        assert_eq!(d.position, Vec3::ZERO);
        assert_eq!(d.orders.len(), 2);
    }

    #[test]
    fn test_wagon_positions_are_spaced_by_length_plus_gap() {
        let rake = sample_rake();
        let layout = rake_layout(&rake);
        let dx = layout[1].position.x - layout[0].position.x;
        assert_eq!(dx, WAGON_LENGTH + WAGON_GAP);
    }
}
