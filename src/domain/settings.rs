use serde::Serialize;

/// Site-level settings shown by the templates. Stored as key/value rows in
/// `site_settings`; anything missing keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Imóveis".to_string(),
            phone: None,
            whatsapp: None,
            hero_title: "Find your next home".to_string(),
            hero_subtitle: "Houses, apartments and land to buy or rent.".to_string(),
        }
    }
}

impl SiteSettings {
    /// Apply one `site_settings` row. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: String) -> bool {
        let value_opt = Some(value.clone()).filter(|v| !v.trim().is_empty());
        match key {
            "site_name" => self.site_name = value,
            "phone" => self.phone = value_opt,
            "whatsapp" => self.whatsapp = value_opt,
            "hero_title" => self.hero_title = value,
            "hero_subtitle" => self.hero_subtitle = value,
            _ => return false,
        }
        true
    }

    /// wa.me link built from the digits of the WhatsApp number.
    pub fn whatsapp_link(&self) -> Option<String> {
        let digits: String = self
            .whatsapp
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{digits}"))
        }
    }
}
