pub mod pricing;
pub mod repository;
pub mod routes;
pub mod service;
