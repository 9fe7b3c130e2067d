pub mod assets;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod display;
pub mod entities;
pub mod game;
pub mod input;
pub mod motion;
pub mod power_up;
pub mod render;
pub mod settings;
pub mod spawn;
