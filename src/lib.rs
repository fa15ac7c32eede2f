// Bannersmith - Conecta Libras banner batch generator

pub mod cli;
pub mod encode;
pub mod error;
pub mod logging;
pub mod output;
pub mod preset;
pub mod render;
pub mod request;
