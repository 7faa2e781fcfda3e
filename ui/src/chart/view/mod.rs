mod interactions;
mod overlay;
mod render;
mod state;

pub(crate) use state::ScatterView;
