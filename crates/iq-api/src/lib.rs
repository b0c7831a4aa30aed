pub mod http;
pub mod schema;
pub mod telemetry;
