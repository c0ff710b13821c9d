use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{"RoadGuard concept demo. Requests are acknowledged locally and never dispatched."}</footer>
    }
}
