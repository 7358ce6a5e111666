mod login_view;
mod register_sides;
mod register_steps;
mod register_view;

pub use login_view::*;
pub use register_sides::*;
pub use register_steps::*;
pub use register_view::*;
