pub mod admission;
pub mod catalog;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod debounce;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod normalize;
pub mod runtime;
pub mod search;
pub mod selection;
pub mod similarity;
pub mod transport;
