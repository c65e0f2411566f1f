//! Error: unsupported key inside #[numenum(...)].
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
#[numenum(name = "status")]
pub struct Status(u8);

fn main() {}
