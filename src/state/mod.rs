pub mod contacts;
pub mod geometry;
pub mod session;
pub mod view;

pub use contacts::ContactRegistry;
pub use geometry::{measure, Geometry};
pub use session::Session;
pub use view::ViewState;
