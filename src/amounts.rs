use rust_decimal::Decimal;

pub type Figure = Decimal;
