use shared::{format_datetime_es_pe, Voucher};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoucherDetailProps {
    pub voucher: Voucher,
}

/// A single found voucher. Timestamps are formatted for display only; the
/// entity value stays the transmitted one.
#[function_component(VoucherDetail)]
pub fn voucher_detail(props: &VoucherDetailProps) -> Html {
    let voucher = &props.voucher;

    html! {
        <div class="voucher-detail">
            <p>
                <strong>{"Número de Operación: "}</strong>
                {&voucher.numero_operacion}
            </p>
            <p>
                <strong>{"Entidad: "}</strong>
                {voucher.entidad.label()}
            </p>
            <p>
                <strong>{"DNI/RUC Cliente: "}</strong>
                {&voucher.cliente_dni_ruc}
            </p>
            <p>
                <strong>{"Fecha/Hora: "}</strong>
                {format_datetime_es_pe(&voucher.fecha_hora)}
            </p>
            {if let Some(created_at) = voucher.created_at.as_ref() {
                html! {
                    <p>
                        <strong>{"Se registró el: "}</strong>
                        {format_datetime_es_pe(created_at)}
                    </p>
                }
            } else { html! {} }}
        </div>
    }
}
