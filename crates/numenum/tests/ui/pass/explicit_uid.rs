//! `#[numenum(uid = "...")]` overrides the derived uid.

use numenum::Enum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
#[numenum(uid = "billing.invoice.state")]
struct InvoiceState(i64);

fn main() {
    assert_eq!(InvoiceState::enum_uid(), "billing.invoice.state");
    assert_eq!(InvoiceState(-3).to_repr(), -3);
}
