use shared::Entidad;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchVoucherFormProps {
    // Form state
    pub numero_operacion: String,
    pub entidad: Entidad,
    pub loading: bool,

    // Event handlers
    pub on_numero_operacion_change: Callback<Event>,
    pub on_entidad_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(SearchVoucherForm)]
pub fn search_voucher_form(props: &SearchVoucherFormProps) -> Html {
    html! {
        <form class="voucher-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            <div class="form-row">
                <input
                    type="text"
                    name="numeroOperacion"
                    placeholder="Número de Operación"
                    value={props.numero_operacion.clone()}
                    onchange={props.on_numero_operacion_change.clone()}
                    required=true
                />
                <select
                    name="entidad"
                    onchange={props.on_entidad_change.clone()}
                    required=true
                >
                    {for Entidad::ALL.iter().map(|e| html! {
                        <option value={e.as_str()} selected={*e == props.entidad}>
                            {e.label()}
                        </option>
                    })}
                </select>
            </div>

            <button type="submit" class="btn btn-primary">
                {if props.loading {
                    "Buscando Voucher..."
                } else {
                    "Buscar Voucher"
                }}
            </button>
        </form>
    }
}
