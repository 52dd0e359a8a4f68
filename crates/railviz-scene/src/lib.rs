//! Railviz Scene - Deterministic scene logic shared by viewer frontends
//!
//! Everything here is pure state and math: the domain-to-descriptor
//! adapter, the pick registry and ray tests, the orbit camera
//! controller, and the pointer interaction state machine. Spawning
//! entities and reading input devices is the viewer's job.

pub mod camera;
pub mod descriptor;
pub mod interact;
pub mod picking;
pub mod registry;

pub use camera::OrbitCamera;
pub use descriptor::{
    detail_layout, rake_layout, FillBar, OrderGeometry, OrderPlacement, WagonDescriptor,
};
pub use interact::{HoverChange, HoverSlot, InteractionState};
pub use picking::{ray_aabb, ray_sphere, PickRay};
pub use registry::{
    body_pick_entry, order_pick_entry, wagon_pick_entries, ParentWagon, PickBounds, PickEntry,
    PickRegistry, PickTarget,
};
