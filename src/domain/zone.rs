use serde::{Deserialize, Serialize};

/// Price band of current interest.
/// `top >= bottom` is the caller's business; an inverted zone simply never contains a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicZone {
    pub top: f64,
    pub bottom: f64,
}

impl DynamicZone {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive at both ends
    pub fn contains(&self, price: f64) -> bool {
        self.bottom <= price && price <= self.top
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn is_inverted(&self) -> bool {
        self.bottom > self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    Inside,
    Outside,
}

impl ZoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Inside => "Inside",
            ZoneStatus::Outside => "Outside",
        }
    }
}
