use shared::{format_hora, group_by_calendar_day, Voucher};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoucherListProps {
    /// Already sorted descending by `fecha_hora`.
    pub vouchers: Vec<Voucher>,
    pub loading: bool,
}

/// Grouped listing: one section per calendar day, most recent day first,
/// rows keeping the descending time order within the day.
#[function_component(VoucherList)]
pub fn voucher_list(props: &VoucherListProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Cargando vouchers..."}</div> };
    }

    let groups = group_by_calendar_day(&props.vouchers);

    html! {
        <div class="voucher-list">
            {for groups.into_iter().map(|(dia, vouchers)| html! {
                <section class="voucher-day-group">
                    <h3 class="voucher-day-heading">{dia}</h3>
                    <table class="voucher-table">
                        <thead>
                            <tr>
                                <th>{"Hora"}</th>
                                <th>{"Entidad"}</th>
                                <th>{"N° Operación"}</th>
                                <th>{"DNI/RUC"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for vouchers.iter().map(|voucher| html! {
                                <tr key={voucher.id.clone()}>
                                    <td class="hora">{format_hora(&voucher.fecha_hora)}</td>
                                    <td class="entidad">{voucher.entidad.label()}</td>
                                    <td class="numero-operacion">{&voucher.numero_operacion}</td>
                                    <td class="cliente">{&voucher.cliente_dni_ruc}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </section>
            })}
        </div>
    }
}
