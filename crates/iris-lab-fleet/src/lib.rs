pub mod vehicle;

pub use vehicle::{Car, Motorcycle, Truck, Vehicle, VehicleSpec};
