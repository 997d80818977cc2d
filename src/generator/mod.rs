pub mod buffer;
pub mod protocol;
pub mod stepper;
