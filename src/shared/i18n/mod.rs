mod locale;
mod resolver;
mod translations;

pub use locale::{Locale, UnsupportedLocale, LOCALE_COOKIE};
pub(crate) use resolver::translatable;
pub use resolver::{AsFieldValue, FieldValue, Localized, Translatable};
pub use translations::{translate, translations};
