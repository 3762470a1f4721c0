pub mod entity_table;
pub mod image_picker;
pub mod pagination_controls;
pub mod product_picker;
pub mod ui;
