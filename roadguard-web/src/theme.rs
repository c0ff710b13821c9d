use roadguard_core::Theme;

/// Apply a theme by toggling the `light` class on the root element.
///
/// Dark is the base stylesheet; persistence is handled by the session store,
/// not here.
pub fn apply_theme(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    let _ = if theme.is_light() {
        html.class_list().add_1("light")
    } else {
        html.class_list().remove_1("light")
    };
}
