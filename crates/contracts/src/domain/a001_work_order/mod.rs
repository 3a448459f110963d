pub mod aggregate;

pub use aggregate::{WorkOrder, DIGITAL_STATUSES, PHYSICAL_STATUSES, PRODUCT_TYPES};
