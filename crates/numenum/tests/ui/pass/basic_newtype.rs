//! Plain integer newtype.

use numenum::Enum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
pub struct Status(u8);

fn main() {
    assert!(Status::enum_uid().ends_with("::Status"));
    assert_eq!(Status::from_repr(1).to_repr(), 1u8);
}
