//! Error: Enum derive does not support generic types.
#![allow(dead_code)]

use numenum::Enum;

#[derive(Clone, Copy, Enum)]
pub struct Tagged<T>(u8, core::marker::PhantomData<T>);

fn main() {}
