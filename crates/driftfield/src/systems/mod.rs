pub mod update;
pub mod render;
pub mod frame;
