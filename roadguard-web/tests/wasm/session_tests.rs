use wasm_bindgen_test::*;

use roadguard_core::{SessionStore, SessionUser, Theme};
use roadguard_web::dom;
use roadguard_web::platform::WebSessionStore;
use roadguard_web::theme::apply_theme;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    let storage = dom::local_storage().expect("localStorage");
    storage.clear().expect("clear storage");
}

#[wasm_bindgen_test]
fn session_record_roundtrips_through_local_storage() {
    clear_storage();
    let store = WebSessionStore;
    assert!(store.load_session().expect("load").is_none());

    let user = SessionUser {
        phone: "+919876543210".to_string(),
    };
    store.save_session(&user).expect("save");
    assert_eq!(store.load_session().expect("load"), Some(user));

    store.clear_session().expect("clear");
    assert!(store.load_session().expect("load").is_none());
}

#[wasm_bindgen_test]
fn theme_preference_is_light_or_absent() {
    clear_storage();
    let store = WebSessionStore;
    assert!(store.load_theme().expect("load").is_none());

    store.save_theme(Theme::Light).expect("save");
    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(
        storage.get_item("theme-preference").expect("get"),
        Some("light".to_string())
    );

    // Dark is the default, stored by removing the key.
    store.save_theme(Theme::Dark).expect("save");
    assert_eq!(storage.get_item("theme-preference").expect("get"), None);
}

#[wasm_bindgen_test]
fn apply_theme_toggles_the_root_class() {
    let html = dom::document().document_element().expect("root element");
    apply_theme(Theme::Light);
    assert!(html.class_list().contains("light"));
    apply_theme(Theme::Dark);
    assert!(!html.class_list().contains("light"));
}
