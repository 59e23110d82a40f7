pub mod auth;
pub mod calculo;
pub mod registro_service;
