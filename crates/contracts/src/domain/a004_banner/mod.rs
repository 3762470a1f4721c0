pub mod aggregate;

pub use aggregate::{toggle_patch, Banner, BannerAsset, BannerDto, BannerType};
