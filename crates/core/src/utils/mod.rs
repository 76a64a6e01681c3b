//! Text utilities used by the classifier

pub mod markup;
