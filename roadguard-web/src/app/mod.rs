pub mod bootstrap;
pub mod handlers;
pub mod state;

use roadguard_core::{ServiceKind, nearby};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::login_modal::LoginModal;
use crate::components::services::ServicesGrid;
use crate::components::sos_panel::SosPanel;
use handlers::AppHandlers;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    #[cfg(target_arch = "wasm32")]
    {
        bootstrap::use_bootstrap(&app_state);
    }

    let handlers = AppHandlers::new(&app_state);
    let nearby_links = app_state.session.coords().map(nearby::links_for);
    // The hero CTA is a shortcut into the most common request.
    let get_help = handlers.request_service.reform(|()| ServiceKind::Refuel);

    html! {
        <>
            <Header
                logged_in={app_state.session.logged_in()}
                theme={*app_state.theme}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_login_click={handlers.login_click.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="sr-status" class="sr-only" aria-live="polite"></div>
                <Hero on_get_help={get_help} on_browse={handlers.browse_services.clone()} />
                <ServicesGrid on_request={handlers.request_service.clone()} />
                <LoginModal
                    open={*app_state.show_login}
                    stage={(*app_state.login).stage().clone()}
                    on_send_otp={handlers.send_otp.clone()}
                    on_verify_otp={handlers.verify_otp.clone()}
                    on_close={handlers.close_login.clone()}
                />
                <SosPanel
                    open={*app_state.show_sos}
                    links={nearby_links}
                    on_toggle={handlers.sos_toggle.clone()}
                    on_call={handlers.sos_call.clone()}
                    on_allow_location={handlers.allow_location.clone()}
                />
                <Footer />
            </main>
        </>
    }
}
