pub mod canvas;
pub mod composite;
pub mod placement;
pub mod text;
