use roadguard_core::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub logged_in: bool,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_login_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let login_click = {
        let cb = p.on_login_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="header-content">
                <span class="brand">{"RoadGuard"}</span>
                <nav class="header-right" aria-label="Account">
                    <button
                        id="theme-toggle"
                        onclick={toggle_theme}
                        aria-pressed={p.theme.is_light().to_string()}
                    >
                        { if p.theme.is_light() { "Dark mode" } else { "Light mode" } }
                    </button>
                    <button id="login-btn" onclick={login_click}>
                        { if p.logged_in { "Logout" } else { "Login" } }
                    </button>
                </nav>
            </div>
        </header>
    }
}
