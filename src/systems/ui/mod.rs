pub mod overlay;

pub use overlay::OverlayPlugin;
