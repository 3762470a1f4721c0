pub mod aggregate;
pub mod composite;

pub use aggregate::{ComboOffer, ComboPayload};
pub use composite::{derive_composite, ComboDraft, ComboMember, ComboOverrides, DerivedCombo};
