/// ISO 3166-1 alpha-2 codes of the regions with a built-in rule-set.
pub struct RegionCode {
}

impl RegionCode {
    pub fn ch() -> &'static str {
        "CH"
    }

    pub fn dk() -> &'static str {
        "DK"
    }

    pub fn es() -> &'static str {
        "ES"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn mc() -> &'static str {
        "MC"
    }
}
