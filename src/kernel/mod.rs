pub mod cancel;
pub mod controller;
pub mod driver;
pub mod event;
pub mod rate;
pub mod resolver;
pub mod scheduler;
pub mod state;
pub mod telemetry;
pub mod time;
pub mod transport;
