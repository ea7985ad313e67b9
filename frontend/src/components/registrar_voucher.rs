use yew::prelude::*;

use crate::components::forms::RegisterVoucherForm;
use crate::components::voucher_list::VoucherList;
use crate::hooks::use_register_voucher::use_register_voucher;
use crate::hooks::use_voucher_list::use_voucher_list;
use crate::services::api::ApiClient;

/// Register pane: the create form plus the day-grouped voucher listing it
/// feeds. A successful registration triggers a list refetch.
#[function_component(RegistrarVoucher)]
pub fn registrar_voucher() -> Html {
    let api_client = ApiClient::new();
    let list = use_voucher_list(&api_client);
    let register = use_register_voucher(&api_client, list.refresh.clone());

    html! {
        <section class="registrar-voucher">
            <h1>{"Registro de Vouchers"}</h1>

            <RegisterVoucherForm
                numero_operacion={register.state.numero_operacion.clone()}
                entidad={register.state.entidad}
                cliente_dni_ruc={register.state.cliente_dni_ruc.clone()}
                fecha={register.state.fecha.clone()}
                hora={register.state.hora.clone()}
                submitting={register.state.submitting}
                form_error={register.state.form_error.clone()}
                form_success={register.state.form_success.clone()}
                on_numero_operacion_change={register.actions.on_numero_operacion_change.clone()}
                on_entidad_change={register.actions.on_entidad_change.clone()}
                on_cliente_dni_ruc_change={register.actions.on_cliente_dni_ruc_change.clone()}
                on_fecha_change={register.actions.on_fecha_change.clone()}
                on_hora_change={register.actions.on_hora_change.clone()}
                on_submit={register.actions.submit.clone()}
            />

            <VoucherList
                vouchers={list.state.vouchers.clone()}
                loading={list.state.loading}
            />
        </section>
    }
}
