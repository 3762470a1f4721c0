mod model;
mod view;
mod view_model;

pub use view::BannerDetails;
pub use view_model::BannerDetailsViewModel;
