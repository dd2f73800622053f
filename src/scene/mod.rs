//! Scene identity, boundary tables and the `t -> SceneFrame` resolver.

pub(crate) mod boundary;
pub(crate) mod formulas;
pub(crate) mod frame;
pub(crate) mod id;
pub(crate) mod resolver;
