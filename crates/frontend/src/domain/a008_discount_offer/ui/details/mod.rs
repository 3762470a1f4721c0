mod model;
mod view;
mod view_model;

pub use view::DiscountOfferDetails;
pub use view_model::DiscountOfferViewModel;
