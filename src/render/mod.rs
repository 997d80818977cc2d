pub(crate) mod batch;
pub mod composite;
pub mod cpu;
pub(crate) mod painter;
pub mod recording;
pub mod surface;
