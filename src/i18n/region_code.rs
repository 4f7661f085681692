pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region code used by numbering-plan metadata for non-geographical
    /// entities such as international freephone (+800).
    pub fn non_geo_entity() -> &'static str {
        return "001";
    }

    /// Whether a region string is usable as a region at all, i.e. neither
    /// empty nor the unknown sentinel.
    pub fn is_determined(region: &str) -> bool {
        !region.is_empty() && region != Self::get_unknown()
    }
}
