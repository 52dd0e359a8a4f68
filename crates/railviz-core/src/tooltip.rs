//! Structured tooltip content synthesized from domain records
//!
//! Tooltips are plain field lists; rendering them is the UI layer's job.
//! These functions never build markup.

use crate::types::{Order, Wagon};

/// One labeled line of a tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub label: &'static str,
    pub value: String,
}

/// Tooltip title, labeled lines, and an optional trailing action hint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<TooltipLine>,
    pub hint: Option<&'static str>,
}

impl TooltipContent {
    fn line(mut self, label: &'static str, value: String) -> Self {
        self.lines.push(TooltipLine { label, value });
        self
    }
}

/// Format a kg quantity with thousands separators, e.g. "53,000 kg"
pub fn format_kg(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{}{} kg", if negative { "-" } else { "" }, out)
}

/// Hover content for a wagon: true load numbers, even when overloaded,
/// plus the click affordance hint
pub fn wagon_tooltip(wagon: &Wagon) -> TooltipContent {
    TooltipContent {
        title: wagon.id.clone(),
        lines: Vec::new(),
        hint: Some("Click to view details"),
    }
    .line("Current Load", format_kg(wagon.current_load))
    .line("Capacity", format_kg(wagon.capacity))
    .line("Available", format_kg(wagon.remaining()))
    .line(
        "Utilization",
        format!("{:.1}%", wagon.utilization() * 100.0),
    )
    .line("Orders", wagon.orders.len().to_string())
}

/// Hover content for an order, including its parent wagon id
pub fn order_tooltip(order: &Order, parent_wagon_id: &str) -> TooltipContent {
    let d = order.dimensions;
    TooltipContent {
        title: order.id.clone(),
        lines: Vec::new(),
        hint: None,
    }
    .line("Destination", order.destination.clone())
    .line("Quantity", format_kg(order.quantity))
    .line("Priority", order.priority.label().to_string())
    .line("Shape", order.shape.label().to_string())
    .line(
        "Dimensions",
        format!("{}x{}x{}m", d.length, d.width, d.height),
    )
    .line("Wagon", parent_wagon_id.to_string())
}
