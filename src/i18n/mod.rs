//! Region metadata: known territories, locale parsing and the process
//! default locale.

mod region_code;
pub mod locale;
pub mod territories;

pub use region_code::RegionCode;
pub use locale::{default_locale, region_subtag, set_default_locale};
pub use territories::{display_region, is_known_territory};
