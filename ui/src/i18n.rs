//! Localized UI strings.
//!
//! Bundles live in `i18n/<locale>/liferhythm-ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback and the reference for `fl!`'s
//! compile-time id check; `ko-KR` mirrors it id for id. Components look
//! strings up with [`t!`](crate::t) after [`init`] has picked the OS / browser
//! locale. The header's picker calls [`set_language`].
//!
//! Only UI chrome is localized. The judge prompt is fixed and the judge's
//! advice is whatever the endpoint returns.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("id")` / `t!("id", var = value)` through the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Bundle file stem, shared by every locale folder.
const DOMAIN: &str = "liferhythm-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, fallback_language())
});

static INIT: Once = Once::new();

fn fallback_language() -> LanguageIdentifier {
    FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier")
}

/// Load the bundles for the requested system locales. Safe to call from
/// every component; only the first call does work.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "ui languages selected"),
            Err(err) => {
                tracing::warn!(%err, fallback = FALLBACK_LANGUAGE, "language selection failed")
            }
        }
    });
}

/// Switch the UI language. Unparseable tags are ignored; tags without a
/// bundle leave the loader on the fallback.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language strings currently resolve in, e.g. `ko-KR`.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Locale folders embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
