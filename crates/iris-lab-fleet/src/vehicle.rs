use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity and capabilities shared by every vehicle kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub id: String,
    pub model: String,
    /// km/h
    pub max_speed: u32,
    /// kg
    pub load_capacity: u32,
}

impl VehicleSpec {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        max_speed: u32,
        load_capacity: u32,
    ) -> Self {
        VehicleSpec {
            id: id.into(),
            model: model.into(),
            max_speed,
            load_capacity,
        }
    }
}

/// Common behaviour of all vehicles.
pub trait Vehicle {
    fn spec(&self) -> &VehicleSpec;
    fn accelerate(&self) -> String;
    fn brake(&self) -> String;

    fn status_report(&self) -> String {
        let spec = self.spec();
        format!("{} (ID: {}) - Max speed: {} km/h", spec.model, spec.id, spec.max_speed)
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    spec: VehicleSpec,
}

impl Car {
    pub fn new(spec: VehicleSpec) -> Self {
        Car { spec }
    }
}

impl Vehicle for Car {
    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn accelerate(&self) -> String {
        format!("{} accelerates smoothly.", self.spec.model)
    }

    fn brake(&self) -> String {
        format!("{} brakes with ABS.", self.spec.model)
    }
}

#[derive(Debug, Clone)]
pub struct Truck {
    spec: VehicleSpec,
    trailer_attached: bool,
}

impl Truck {
    pub fn new(spec: VehicleSpec) -> Self {
        Truck {
            spec,
            trailer_attached: false,
        }
    }

    pub fn hitch_trailer(&mut self) -> String {
        self.trailer_attached = true;
        debug!(id = %self.spec.id, "trailer hitched");
        format!("{} has hitched a trailer.", self.spec.model)
    }

    pub fn trailer_attached(&self) -> bool {
        self.trailer_attached
    }
}

impl Vehicle for Truck {
    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn accelerate(&self) -> String {
        format!("{} accelerates slowly under a heavy load.", self.spec.model)
    }

    fn brake(&self) -> String {
        format!("{} brakes with air brakes.", self.spec.model)
    }
}

#[derive(Debug, Clone)]
pub struct Motorcycle {
    spec: VehicleSpec,
}

impl Motorcycle {
    pub fn new(spec: VehicleSpec) -> Self {
        Motorcycle { spec }
    }

    pub fn evasive_maneuver(&self) -> String {
        format!("{} performed an evasive maneuver.", self.spec.model)
    }
}

impl Vehicle for Motorcycle {
    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn accelerate(&self) -> String {
        format!("{} accelerates quickly.", self.spec.model)
    }

    fn brake(&self) -> String {
        format!("{} brakes with disc brakes.", self.spec.model)
    }
}
