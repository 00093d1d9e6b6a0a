mod display;
mod domain_type;
mod pauli;
mod range;
mod result_value;
mod value;

pub use domain_type::DomainType;
pub use num_bigint::BigInt;
pub use pauli::Pauli;
pub use range::{RangeIter, RangeValue};
pub use result_value::ResultValue;
pub use value::Value;
