pub mod clock;
pub mod draw_engine;
pub mod scheduler;
pub mod timing;
