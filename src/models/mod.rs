pub mod bbox;
pub mod feature;
pub mod lnglat;
