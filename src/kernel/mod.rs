//! Headless application core (state/action/effect).

pub mod codearea;
pub mod effect;
pub mod services;

pub use codearea::{CodeArea, CodeAreaAction, CodeAreaError, DocId, Document};
pub use effect::Effect;
