//! Error: uid must not be empty.
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
#[numenum(uid = "")]
pub struct Status(u8);

fn main() {}
