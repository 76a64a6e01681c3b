//! Pure string helpers shared by classification and presentation

pub mod title;
