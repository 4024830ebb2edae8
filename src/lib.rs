//! Wavescape library - animated ocean surface beneath a cubemap skybox

pub mod camera;
pub mod cli;
pub mod mesh;
pub mod params;
pub mod rendering;
pub mod sky;
pub mod waves;
