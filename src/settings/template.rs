/// Product template variants.
///
/// A template selects directory-product-specific default values for settings;
/// every setting must produce a sane default under every template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Standard,
    ActiveDirectory,
    OpenLdap,
    OracleDirectory,
}

impl Template {
    /// Every supported template, in declaration order.
    pub const ALL: &'static [Template] = &[
        Template::Standard,
        Template::ActiveDirectory,
        Template::OpenLdap,
        Template::OracleDirectory,
    ];

    /// Stable identifier used in reports and serialized forms.
    pub fn id(&self) -> &'static str {
        match self {
            Template::Standard => "standard",
            Template::ActiveDirectory => "ad",
            Template::OpenLdap => "openldap",
            Template::OracleDirectory => "oracleds",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_listed_once() {
        assert_eq!(Template::ALL.len(), 4);
        let mut ids: Vec<_> = Template::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
