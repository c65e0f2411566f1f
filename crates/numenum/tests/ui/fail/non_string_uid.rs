//! Error: uid must be a string literal.
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
#[numenum(uid = 5)]
pub struct Status(u8);

fn main() {}
