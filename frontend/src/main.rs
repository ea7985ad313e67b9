use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ConsultarVoucher, RegistrarVoucher};

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="container">
            <RegistrarVoucher />
            <ConsultarVoucher />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
