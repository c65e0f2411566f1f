//! Error: a user type named like an integer is not an integer.
#![allow(dead_code, non_camel_case_types)]

use numenum::Enum;

mod my {
    #[derive(Clone, Copy)]
    pub struct u8;
}

#[derive(Clone, Copy, Enum)]
pub struct Status(my::u8);

fn main() {}
