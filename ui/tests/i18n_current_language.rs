//! Language switching touches the global loader, so it runs alone in this
//! binary instead of racing the lookups in the unit tests.

use ui::i18n::{self, FALLBACK_LANGUAGE};

#[test]
fn current_language_tracks_negotiation_and_switches() {
    i18n::init();
    let negotiated = i18n::current_language();
    assert!(
        i18n::available_languages().contains(&negotiated),
        "startup language `{negotiated}` is not an embedded locale"
    );

    i18n::set_language("es-ES").expect("embedded locale");
    assert_eq!(i18n::current_language(), "es-ES");

    // Unparsable tags are ignored and keep the active language.
    i18n::set_language("!!").expect("ignored tag");
    assert_eq!(i18n::current_language(), "es-ES");

    i18n::set_language("fr-FR").expect("embedded locale");
    assert_eq!(i18n::current_language(), "fr-FR");

    i18n::set_language(FALLBACK_LANGUAGE).expect("fallback locale");
    assert_eq!(i18n::current_language(), FALLBACK_LANGUAGE);
}
