//! Setting registry: the static catalog of every configurable setting.
//!
//! Consistency of this data is enforced by the checks in
//! [`crate::settings::check`], re-run whenever the catalog changes.

use std::sync::OnceLock;

use crate::settings::setting::{PropertyKey, RawDefault, Setting, SettingFlag, SettingSyntax};
use crate::settings::template::Template;

/// Registry of every known setting.
pub struct SettingRegistry {
    settings: Vec<Setting>,
}

static REGISTRY: OnceLock<SettingRegistry> = OnceLock::new();

impl SettingRegistry {
    /// The process-wide registry instance.
    pub fn get() -> &'static SettingRegistry {
        REGISTRY.get_or_init(|| SettingRegistry {
            settings: default_settings(),
        })
    }

    /// Every registered setting, in declaration order.
    pub fn all(&self) -> &[Setting] {
        &self.settings
    }

    /// Look up a setting by its registry key.
    pub fn by_key(&self, key: &str) -> Option<&Setting> {
        self.settings.iter().find(|setting| setting.key == key)
    }
}

const NO_PROPERTIES: &[(PropertyKey, &str)] = &[];
const NO_OPTIONS: &[(&str, &str)] = &[];
const NO_FLAGS: &[SettingFlag] = &[];
const NO_TEMPLATE_DEFAULTS: &[(Template, RawDefault)] = &[];

const COUNT_RANGE: &[(PropertyKey, &str)] =
    &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "256")];

fn default_settings() -> Vec<Setting> {
    vec![
        Setting {
            key: "password.policy.caseSensitivity",
            syntax: SettingSyntax::Boolean,
            labels: &[("en", "Case sensitivity"), ("es", "Distinción de mayúsculas")],
            descriptions: &[
                ("en", "Whether passwords are treated as case sensitive."),
                ("es", "Indica si las contraseñas distinguen entre mayúsculas y minúsculas."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Boolean(true),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.minimumLength",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Minimum length"), ("es", "Longitud mínima")],
            descriptions: &[
                ("en", "Minimum number of characters a password must contain."),
                ("es", "Número mínimo de caracteres que debe contener una contraseña."),
            ],
            flags: NO_FLAGS,
            properties: &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "512")],
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(8),
            template_defaults: &[(Template::ActiveDirectory, RawDefault::Numeric(6))],
        },
        Setting {
            key: "password.policy.maximumLength",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Maximum length"), ("es", "Longitud máxima")],
            descriptions: &[
                ("en", "Maximum number of characters a password may contain; 0 for no limit."),
                ("es", "Número máximo de caracteres que puede contener una contraseña; 0 para sin límite."),
            ],
            flags: NO_FLAGS,
            properties: &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "512")],
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(64),
            template_defaults: &[(Template::OracleDirectory, RawDefault::Numeric(30))],
        },
        Setting {
            key: "password.policy.minimumUpperCase",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Minimum uppercase"), ("es", "Mínimo de mayúsculas")],
            descriptions: &[
                ("en", "Minimum number of uppercase letters required."),
                ("es", "Número mínimo de letras mayúsculas requerido."),
            ],
            flags: NO_FLAGS,
            properties: COUNT_RANGE,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.minimumLowerCase",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Minimum lowercase"), ("es", "Mínimo de minúsculas")],
            descriptions: &[
                ("en", "Minimum number of lowercase letters required."),
                ("es", "Número mínimo de letras minúsculas requerido."),
            ],
            flags: NO_FLAGS,
            properties: COUNT_RANGE,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.allowNumeric",
            syntax: SettingSyntax::Boolean,
            labels: &[("en", "Allow numbers"), ("es", "Permitir números")],
            descriptions: &[
                ("en", "Whether passwords may contain numeric characters."),
                ("es", "Indica si las contraseñas pueden contener caracteres numéricos."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Boolean(true),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.minimumNumeric",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Minimum numeric"), ("es", "Mínimo de números")],
            descriptions: &[
                ("en", "Minimum number of numeric characters required."),
                ("es", "Número mínimo de caracteres numéricos requerido."),
            ],
            flags: NO_FLAGS,
            properties: COUNT_RANGE,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.allowSpecial",
            syntax: SettingSyntax::Boolean,
            labels: &[("en", "Allow symbols"), ("es", "Permitir símbolos")],
            descriptions: &[
                ("en", "Whether passwords may contain symbol characters."),
                ("es", "Indica si las contraseñas pueden contener símbolos."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Boolean(true),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.minimumSpecial",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Minimum symbols"), ("es", "Mínimo de símbolos")],
            descriptions: &[
                ("en", "Minimum number of symbol characters required."),
                ("es", "Número mínimo de símbolos requerido."),
            ],
            flags: NO_FLAGS,
            properties: COUNT_RANGE,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.maximumRepeat",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Maximum repeated characters"), ("es", "Máximo de caracteres repetidos")],
            descriptions: &[
                ("en", "Maximum number of times any character may repeat; 0 for no limit."),
                ("es", "Número máximo de repeticiones de un carácter; 0 para sin límite."),
            ],
            flags: NO_FLAGS,
            properties: &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "64")],
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.minimumLifetime",
            syntax: SettingSyntax::Duration,
            labels: &[("en", "Minimum lifetime"), ("es", "Vigencia mínima")],
            descriptions: &[
                ("en", "Seconds a password must exist before it can be changed again."),
                ("es", "Segundos que debe existir una contraseña antes de poder cambiarla."),
            ],
            flags: NO_FLAGS,
            properties: &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "2592000")],
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(0),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.complexityMode",
            syntax: SettingSyntax::Select,
            labels: &[("en", "Vendor complexity mode"), ("es", "Modo de complejidad del proveedor")],
            descriptions: &[
                ("en", "Directory-vendor complexity mode applied on top of the configured rules."),
                ("es", "Modo de complejidad del proveedor de directorio aplicado sobre las reglas configuradas."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: &[
                ("none", "Disabled"),
                ("legacy", "Legacy complexity"),
                ("modern", "Modern complexity"),
            ],
            pattern: None,
            default: RawDefault::Text("none"),
            template_defaults: &[(Template::ActiveDirectory, RawDefault::Text("modern"))],
        },
        Setting {
            key: "password.policy.complexityMaxViolations",
            syntax: SettingSyntax::Numeric,
            labels: &[("en", "Complexity violations allowed"), ("es", "Incumplimientos de complejidad permitidos")],
            descriptions: &[
                ("en", "Number of complexity categories a password may violate in modern mode."),
                ("es", "Número de categorías de complejidad que una contraseña puede incumplir en modo moderno."),
            ],
            flags: NO_FLAGS,
            properties: &[(PropertyKey::Minimum, "0"), (PropertyKey::Maximum, "10")],
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Numeric(2),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.disallowedValues",
            syntax: SettingSyntax::TextList,
            labels: &[("en", "Disallowed values"), ("es", "Valores no permitidos")],
            descriptions: &[
                ("en", "Literal values a password must not contain."),
                ("es", "Valores literales que una contraseña no debe contener."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::TextList(&["password", "test"]),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.disallowedAttributes",
            syntax: SettingSyntax::TextList,
            labels: &[("en", "Disallowed attributes"), ("es", "Atributos no permitidos")],
            descriptions: &[
                ("en", "Directory attribute names whose values a password must not contain."),
                ("es", "Nombres de atributos de directorio cuyos valores no debe contener una contraseña."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::TextList(&[]),
            template_defaults: &[(
                Template::ActiveDirectory,
                RawDefault::TextList(&["cn", "givenName", "sn"]),
            )],
        },
        Setting {
            key: "password.policy.checkWordlist",
            syntax: SettingSyntax::Boolean,
            labels: &[("en", "Wordlist check"), ("es", "Comprobación de lista de palabras")],
            descriptions: &[
                ("en", "Whether candidate passwords are checked against the common-word list."),
                ("es", "Indica si las contraseñas se comprueban contra la lista de palabras comunes."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Boolean(false),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "password.policy.ruleText",
            syntax: SettingSyntax::Text,
            labels: &[("en", "Override rule text"), ("es", "Texto de reglas personalizado")],
            descriptions: &[
                ("en", "Free-form requirement text that replaces all generated statements."),
                ("es", "Texto libre de requisitos que reemplaza todas las frases generadas."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Text(""),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "display.requirements.prefix",
            syntax: SettingSyntax::Text,
            labels: &[("en", "Statement prefix"), ("es", "Prefijo de frase")],
            descriptions: &[
                ("en", "Text prepended to every rendered requirement statement."),
                ("es", "Texto antepuesto a cada frase de requisito mostrada."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Text(""),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "display.requirements.separator",
            syntax: SettingSyntax::Text,
            labels: &[("en", "Statement separator"), ("es", "Separador de frases")],
            descriptions: &[
                ("en", "Text appended to every rendered requirement statement."),
                ("es", "Texto añadido después de cada frase de requisito mostrada."),
            ],
            flags: NO_FLAGS,
            properties: NO_PROPERTIES,
            options: NO_OPTIONS,
            pattern: None,
            default: RawDefault::Text("<br/>"),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "locale.default",
            syntax: SettingSyntax::Select,
            labels: &[("en", "Default locale"), ("es", "Idioma predeterminado")],
            descriptions: &[
                ("en", "Locale used when no user preference is available."),
                ("es", "Idioma utilizado cuando no hay preferencia del usuario."),
            ],
            flags: &[SettingFlag::Required],
            properties: NO_PROPERTIES,
            options: &[("en", "English"), ("es", "Español")],
            pattern: None,
            default: RawDefault::Text("en"),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
        Setting {
            key: "app.instanceName",
            syntax: SettingSyntax::Text,
            labels: &[("en", "Instance name"), ("es", "Nombre de instancia")],
            descriptions: &[
                ("en", "Identifier for this deployment, shown in logs and debug output."),
                ("es", "Identificador de esta instalación, mostrado en registros y depuración."),
            ],
            flags: &[SettingFlag::Required],
            properties: &[(PropertyKey::Placeholder, "PasswordService")],
            options: NO_OPTIONS,
            pattern: Some("^[A-Za-z0-9][A-Za-z0-9_-]*$"),
            default: RawDefault::Text("PasswordService"),
            template_defaults: NO_TEMPLATE_DEFAULTS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_singleton() {
        assert!(std::ptr::eq(SettingRegistry::get(), SettingRegistry::get()));
    }

    #[test]
    fn test_by_key_known() {
        let setting = SettingRegistry::get()
            .by_key("password.policy.minimumLength")
            .expect("registered");
        assert_eq!(setting.syntax, SettingSyntax::Numeric);
    }

    #[test]
    fn test_by_key_unknown() {
        assert!(SettingRegistry::get().by_key("no.such.setting").is_none());
    }

    #[test]
    fn test_registry_not_empty() {
        assert!(SettingRegistry::get().all().len() >= 20);
    }
}
