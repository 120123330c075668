pub mod cli;
pub mod color;
pub mod conf;
pub mod ingest;
pub mod listener;
pub mod logging;
pub mod record;
pub mod render;
pub mod sink;
pub mod surface;
pub mod view;
