pub mod a001_brand;
pub mod a002_category;
pub mod a003_product;
pub mod a004_banner;
pub mod a005_order;
pub mod a006_review;
pub mod a007_combo_offer;
pub mod a008_discount_offer;
pub mod a009_free_gift_offer;
pub mod common;
