//! The repr may be written with a path.

use numenum::Enum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
struct Port(pub core::primitive::u16);

fn main() {
    let registry = numenum::EnumRegistry::new();
    registry.register([(Port(80), "http"), (Port(443), "https")]);
    assert_eq!(registry.parse::<Port>("https"), Ok(Port(443)));
}
