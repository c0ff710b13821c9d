use roadguard_core::{NearbyCategory, NearbyLinks};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    /// Present once a position fix has been stored for the session.
    pub links: Option<NearbyLinks>,
    pub on_toggle: Callback<()>,
    pub on_call: Callback<()>,
    pub on_allow_location: Callback<()>,
}

fn link_item(href: &str, label: &str) -> Html {
    html! {
        <li>
            <a href={href.to_string()} target="_blank" rel="noopener">{ label }</a>
        </li>
    }
}

fn placeholder_item() -> Html {
    html! { <li class="placeholder">{"Location not available"}</li> }
}

#[function_component(SosPanel)]
pub fn sos_panel(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let call = {
        let cb = p.on_call.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let allow_location = {
        let cb = p.on_allow_location.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let police = p.links.as_ref().map_or_else(placeholder_item, |links| {
        link_item(&links.police, NearbyCategory::Police.link_label())
    });
    let hospitals = p.links.as_ref().map_or_else(placeholder_item, |links| {
        link_item(&links.hospitals, NearbyCategory::Hospital.link_label())
    });

    html! {
        <>
            <button
                id="sos-btn"
                class="sos-button"
                aria-expanded={p.open.to_string()}
                aria-controls="sos-panel"
                onclick={toggle}
            >
                {"SOS"}
            </button>
            if p.open {
                <aside id="sos-panel" class="sos-panel" role="dialog" aria-label="Emergency help">
                    <button id="sos-call" class="sos-call" onclick={call}>
                        {"Call the emergency line"}
                    </button>
                    if p.links.is_none() {
                        <button id="sos-allow-location" onclick={allow_location}>
                            {"Allow location for nearby help"}
                        </button>
                    }
                    <h3>{"Nearby police"}</h3>
                    <ul id="sos-police">{ police }</ul>
                    <h3>{"Nearby hospitals"}</h3>
                    <ul id="sos-hospitals">{ hospitals }</ul>
                </aside>
            }
        </>
    }
}
