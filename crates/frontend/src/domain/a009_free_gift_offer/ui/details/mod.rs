mod model;
mod view;
mod view_model;

pub use view::FreeGiftDetails;
pub use view_model::FreeGiftViewModel;
