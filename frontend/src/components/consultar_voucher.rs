use yew::prelude::*;

use crate::components::forms::SearchVoucherForm;
use crate::components::voucher_detail::VoucherDetail;
use crate::hooks::use_voucher_search::use_voucher_search;
use crate::services::api::ApiClient;

/// Lookup pane: search by operation number and entity, then show the single
/// match or the not-found message.
#[function_component(ConsultarVoucher)]
pub fn consultar_voucher() -> Html {
    let api_client = ApiClient::new();
    let search = use_voucher_search(&api_client);

    html! {
        <section class="consultar-voucher">
            <h1>{"Consultar Voucher"}</h1>

            <SearchVoucherForm
                numero_operacion={search.state.numero_operacion.clone()}
                entidad={search.state.entidad}
                loading={search.state.loading}
                on_numero_operacion_change={search.actions.on_numero_operacion_change.clone()}
                on_entidad_change={search.actions.on_entidad_change.clone()}
                on_submit={search.actions.submit.clone()}
            />

            {if let Some(error) = search.state.error.as_ref() {
                html! { <p class="search-error">{error}</p> }
            } else { html! {} }}

            {if let Some(voucher) = search.state.voucher.as_ref() {
                html! { <VoucherDetail voucher={voucher.clone()} /> }
            } else { html! {} }}
        </section>
    }
}
