//! Error: uid given twice.
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
#[numenum(uid = "a", uid = "b")]
pub struct Status(u8);

fn main() {}
