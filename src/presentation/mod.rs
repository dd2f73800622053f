//! Static data and cosmetic helpers consumed by the presentation layer.

pub(crate) mod layout;
pub(crate) mod legend;
