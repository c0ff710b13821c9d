use roadguard_core::ServiceKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_request: Callback<ServiceKind>,
}

#[function_component(ServicesGrid)]
pub fn services_grid(p: &Props) -> Html {
    html! {
        <section id="services" class="services" aria-label="Services">
            <h2>{"Services"}</h2>
            <div class="service-grid">
                { for ServiceKind::ALL.iter().copied().map(|kind| {
                    let on_request = p.on_request.clone();
                    let onclick = Callback::from(move |_| on_request.emit(kind));
                    html! {
                        <button class="service-card" data-service={kind.as_str()} {onclick}>
                            <h3>{ kind.label() }</h3>
                            <p>{ kind.blurb() }</p>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
