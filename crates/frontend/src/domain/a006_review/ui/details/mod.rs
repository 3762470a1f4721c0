mod model;
mod view;
mod view_model;

pub use view::ReviewDetails;
pub use view_model::ReviewDetailsViewModel;
