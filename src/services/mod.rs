pub mod backend;
pub mod circuit_breaker;
pub mod pricing;
pub mod seat_map;
pub mod selector;
