//! Built-in sample rake used when no input data is provided

use crate::types::{Dimensions, Order, OrderShape, Priority, Rake, Wagon};

fn order(
    id: &str,
    quantity: f64,
    destination: &str,
    priority: Priority,
    dims: (f32, f32, f32),
    shape: OrderShape,
) -> Order {
    Order {
        id: id.to_string(),
        quantity,
        destination: destination.to_string(),
        priority,
        dimensions: Dimensions::new(dims.0, dims.1, dims.2),
        shape,
    }
}

/// The default four-wagon express rake
pub fn sample_rake() -> Rake {
    Rake {
        id: "R123-Express".to_string(),
        wagons: vec![
            Wagon {
                id: "W01".to_string(),
                capacity: 60000.0,
                current_load: 53000.0,
                color: [0.231, 0.51, 0.965],
                orders: vec![
                    order(
                        "ORD-2401",
                        20000.0,
                        "Mumbai",
                        Priority::High,
                        (8.0, 4.0, 3.0),
                        OrderShape::Box,
                    ),
                    order(
                        "ORD-2402",
                        15000.0,
                        "Delhi",
                        Priority::Medium,
                        (6.0, 4.0, 3.0),
                        OrderShape::Box,
                    ),
                    order(
                        "ORD-2403",
                        18000.0,
                        "Bangalore",
                        Priority::High,
                        (7.0, 4.0, 2.5),
                        OrderShape::Cylinder,
                    ),
                ],
            },
            Wagon {
                id: "W02".to_string(),
                capacity: 60000.0,
                current_load: 47000.0,
                color: [0.545, 0.361, 0.965],
                orders: vec![
                    order(
                        "ORD-2404",
                        25000.0,
                        "Chennai",
                        Priority::Low,
                        (10.0, 4.0, 3.0),
                        OrderShape::Box,
                    ),
                    order(
                        "ORD-2405",
                        22000.0,
                        "Kolkata",
                        Priority::Medium,
                        (8.0, 4.0, 3.5),
                        OrderShape::Sphere,
                    ),
                ],
            },
            Wagon {
                id: "W03".to_string(),
                capacity: 60000.0,
                current_load: 50000.0,
                color: [0.024, 0.714, 0.831],
                orders: vec![
                    order(
                        "ORD-2406",
                        30000.0,
                        "Hyderabad",
                        Priority::High,
                        (11.0, 4.0, 3.0),
                        OrderShape::Box,
                    ),
                    order(
                        "ORD-2407",
                        12000.0,
                        "Pune",
                        Priority::Low,
                        (5.0, 3.0, 2.0),
                        OrderShape::Box,
                    ),
                    order(
                        "ORD-2408",
                        8000.0,
                        "Ahmedabad",
                        Priority::Medium,
                        (4.0, 3.0, 2.5),
                        OrderShape::Box,
                    ),
                ],
            },
            Wagon {
                id: "W04".to_string(),
                capacity: 60000.0,
                current_load: 55000.0,
                color: [0.961, 0.62, 0.043],
                orders: vec![order(
                    "ORD-2409",
                    35000.0,
                    "Jaipur",
                    Priority::High,
                    (12.0, 4.0, 3.5),
                    OrderShape::Box,
                )],
            },
        ],
    }
}
