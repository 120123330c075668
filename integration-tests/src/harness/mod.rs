pub mod tracing;
pub mod view;

pub use tracing::{CapturedEvent, init_test_tracing};
pub use view::{plain_config, serial, wait_until};
