//! Error: Enum derive requires a primitive integer field.
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
pub struct Ratio(f64);

fn main() {}
