pub mod dtype;
pub mod error;
pub mod record;
pub mod algebra;

pub use dtype::Float;
pub use error::{LabError, LabResult};
pub use record::{FlowerRecord, Measurement};
pub use algebra::{average, scale, AVERAGE_LABEL};
