pub mod cmd {
    pub const REGIONS: &str = "dodona regions";
    pub const PROFILE: &str = "dodona profile";
    pub const VOWELS: &str = "dodona vowels";
    pub const INSCRIPTIONS_CSV: &str = "dodona inscriptions --export csv";
    pub const DASHBOARD: &str = "dodona dashboard";
    pub const CONFIG_INIT: &str = "dodona config init";
    pub const CONFIG_SHOW: &str = "dodona config show";
}

pub mod fmt {
    pub fn region(id: &str) -> String {
        format!("dodona region {}", id)
    }

    pub fn inscriptions_in_region(id: &str) -> String {
        format!("dodona inscriptions --region {}", id)
    }

    pub fn vowels_category(number: u8) -> String {
        format!("dodona vowels --category {} --verbose", number)
    }
}
