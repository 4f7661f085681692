mod enums;
mod errors;
mod phone_number_value;

pub use enums::{NumberCategory, NumberTypes, PhoneNumberFormat};
pub use errors::{InvalidArgumentError, ParseFailure, PhoneNumberError};
pub use phone_number_value::{PhoneNumberValue, Result};
