pub mod draw;
mod events;

pub use events::EventHandler;
