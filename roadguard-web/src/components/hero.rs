use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_get_help: Callback<()>,
    pub on_browse: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(p: &Props) -> Html {
    let get_help = {
        let cb = p.on_get_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let browse = {
        let cb = p.on_browse.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="hero" aria-label="Roadside assistance">
            <h1>{"Stranded? Help is minutes away."}</h1>
            <p>{"Fuel, tyres, batteries and towing, wherever the road left you."}</p>
            <div class="hero-actions">
                <button id="cta-help" class="cta" onclick={get_help}>{"Get help now"}</button>
                <button id="cta-browse" class="cta-secondary" onclick={browse}>{"Browse services"}</button>
            </div>
        </section>
    }
}
