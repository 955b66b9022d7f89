pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;
pub mod view;

#[cfg(test)]
mod test;
