pub mod chart_service;
pub mod fetch_service;
pub mod logstats_service;
pub mod synthetic_service;
