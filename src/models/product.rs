use crate::vendor::types::{VendorName, VendorProduct};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: LocalizedName,
    pub price_new: Option<f64>,
    pub price_old: Option<f64>,
}

impl From<VendorProduct> for Product {
    fn from(vp: VendorProduct) -> Self {
        Product {
            id: vp.id,
            name: vp.name.unwrap_or_default().into(),
            price_new: vp.price_new,
            price_old: vp.price_old,
        }
    }
}

/// Product name in the storefront's three locales. Empty strings are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedName {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
}

impl LocalizedName {
    /// Secondary locale wins, then primary, then tertiary.
    pub fn display_title(&self) -> Option<&str> {
        self.secondary
            .as_deref()
            .or(self.primary.as_deref())
            .or(self.tertiary.as_deref())
    }
}

impl From<VendorName> for LocalizedName {
    fn from(vn: VendorName) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        LocalizedName {
            primary: non_empty(vn.ru),
            secondary: non_empty(vn.uk),
            tertiary: non_empty(vn.en),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn name(primary: &str, secondary: &str, tertiary: &str) -> LocalizedName {
        VendorName {
            ru: Some(primary.to_string()),
            uk: Some(secondary.to_string()),
            en: Some(tertiary.to_string()),
        }
        .into()
    }

    #[test]
    fn test_display_title_prefers_secondary() {
        assert_eq!(name("Дрель", "Дриль", "Drill").display_title(), Some("Дриль"));
    }

    #[test]
    fn test_display_title_falls_back_to_primary() {
        assert_eq!(name("Дрель", "", "Drill").display_title(), Some("Дрель"));
    }

    #[test]
    fn test_display_title_falls_back_to_tertiary() {
        assert_eq!(name("", "", "Drill").display_title(), Some("Drill"));
    }

    #[test]
    fn test_display_title_all_empty() {
        assert_eq!(name("", "", "").display_title(), None);
        assert_eq!(LocalizedName::default().display_title(), None);
    }
}
