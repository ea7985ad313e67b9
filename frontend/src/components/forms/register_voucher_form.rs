use shared::Entidad;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterVoucherFormProps {
    // Form state
    pub numero_operacion: String,
    pub entidad: Entidad,
    pub cliente_dni_ruc: String,
    pub fecha: String,
    pub hora: String,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: Option<String>,

    // Event handlers
    pub on_numero_operacion_change: Callback<Event>,
    pub on_entidad_change: Callback<Event>,
    pub on_cliente_dni_ruc_change: Callback<Event>,
    pub on_fecha_change: Callback<Event>,
    pub on_hora_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(RegisterVoucherForm)]
pub fn register_voucher_form(props: &RegisterVoucherFormProps) -> Html {
    html! {
        <form class="voucher-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            {if let Some(success) = props.form_success.as_ref() {
                html! {
                    <div class="form-message success">
                        {success}
                    </div>
                }
            } else { html! {} }}

            <div class="form-row">
                <input
                    type="text"
                    name="numeroOperacion"
                    placeholder="Número de Operación"
                    value={props.numero_operacion.clone()}
                    onchange={props.on_numero_operacion_change.clone()}
                    disabled={props.submitting}
                    required=true
                    autofocus=true
                />
                <input
                    type="text"
                    name="clienteDniRuc"
                    placeholder="DNI o RUC"
                    value={props.cliente_dni_ruc.clone()}
                    onchange={props.on_cliente_dni_ruc_change.clone()}
                    disabled={props.submitting}
                    required=true
                />
            </div>

            <div class="form-row">
                <select
                    name="entidad"
                    onchange={props.on_entidad_change.clone()}
                    disabled={props.submitting}
                    required=true
                >
                    {for Entidad::ALL.iter().map(|e| html! {
                        <option value={e.as_str()} selected={*e == props.entidad}>
                            {e.label()}
                        </option>
                    })}
                </select>
                <input
                    type="date"
                    value={props.fecha.clone()}
                    onchange={props.on_fecha_change.clone()}
                    disabled={props.submitting}
                />
                <input
                    type="time"
                    value={props.hora.clone()}
                    onchange={props.on_hora_change.clone()}
                    disabled={props.submitting}
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                disabled={props.submitting}
            >
                {if props.submitting {
                    "Registrando Voucher..."
                } else {
                    "Registrar Voucher"
                }}
            </button>
        </form>
    }
}
