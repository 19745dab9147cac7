use yew::prelude::*;
use home::Home;

mod home;
mod lead_store;
mod quote_form;
mod style;

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! { <Home /> }
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
