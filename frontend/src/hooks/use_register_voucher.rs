use shared::{
    compose_fecha_hora, register_outcome, sanitize_numeric, Entidad, RegisterOutcome,
    RegisterVoucherRequest, StoreError,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::{get_current_date, get_current_time};

/// Snapshot of the register form for rendering.
#[derive(Clone, PartialEq)]
pub struct RegisterVoucherState {
    pub numero_operacion: String,
    pub entidad: Entidad,
    pub cliente_dni_ruc: String,
    pub fecha: String,
    pub hora: String,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: Option<String>,
}

#[derive(Clone)]
pub struct RegisterVoucherActions {
    pub on_numero_operacion_change: Callback<Event>,
    pub on_entidad_change: Callback<Event>,
    pub on_cliente_dni_ruc_change: Callback<Event>,
    pub on_fecha_change: Callback<Event>,
    pub on_hora_change: Callback<Event>,
    pub submit: Callback<()>,
}

pub struct UseRegisterVoucherResult {
    pub state: RegisterVoucherState,
    pub actions: RegisterVoucherActions,
}

/// Create-voucher workflow: field state, numeric sanitization, date+time
/// composition, a re-entrant submit guard, and result handling.
///
/// `on_registered` fires after every accepted registration so the list can
/// refetch.
#[hook]
pub fn use_register_voucher(
    api_client: &ApiClient,
    on_registered: Callback<()>,
) -> UseRegisterVoucherResult {
    let numero_operacion = use_state(String::new);
    let entidad = use_state(Entidad::default);
    let cliente_dni_ruc = use_state(String::new);
    let fecha = use_state(get_current_date);
    let hora = use_state(get_current_time);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| None::<String>);
    // `submitting` drives the button label; the guard checks this flag,
    // because state snapshots lag behind rapid re-entry.
    let in_flight = use_mut_ref(|| false);

    let on_numero_operacion_change = {
        let numero_operacion = numero_operacion.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            numero_operacion.set(sanitize_numeric(&input.value()));
        })
    };

    let on_cliente_dni_ruc_change = {
        let cliente_dni_ruc = cliente_dni_ruc.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cliente_dni_ruc.set(sanitize_numeric(&input.value()));
        })
    };

    let on_entidad_change = {
        let entidad = entidad.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(value) = Entidad::from_value(&select.value()) {
                entidad.set(value);
            }
        })
    };

    let on_fecha_change = {
        let fecha = fecha.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fecha.set(input.value());
        })
    };

    let on_hora_change = {
        let hora = hora.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            hora.set(input.value());
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let numero_operacion = numero_operacion.clone();
        let entidad = entidad.clone();
        let cliente_dni_ruc = cliente_dni_ruc.clone();
        let fecha = fecha.clone();
        let hora = hora.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let in_flight = in_flight.clone();
        let on_registered = on_registered.clone();

        Callback::from(move |_| {
            // Re-entrant submission while a request is outstanding is a no-op.
            if *in_flight.borrow() {
                return;
            }
            *in_flight.borrow_mut() = true;

            let api_client = api_client.clone();
            let numero_operacion = numero_operacion.clone();
            let entidad = entidad.clone();
            let cliente_dni_ruc = cliente_dni_ruc.clone();
            let fecha = fecha.clone();
            let hora = hora.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let in_flight = in_flight.clone();
            let on_registered = on_registered.clone();

            spawn_local(async move {
                form_error.set(None);
                form_success.set(None);
                submitting.set(true);

                let request = RegisterVoucherRequest {
                    numero_operacion: (*numero_operacion).clone(),
                    entidad: *entidad,
                    cliente_dni_ruc: (*cliente_dni_ruc).clone(),
                    fecha_hora: compose_fecha_hora(&fecha, &hora),
                };

                let result = api_client.register_voucher(request).await;
                if let Err(StoreError::Unreachable(detail)) = &result {
                    gloo::console::error!("Voucher store unreachable:", detail.clone());
                }

                match register_outcome(result) {
                    RegisterOutcome::Saved { message } => {
                        // Back to defaults, with date/time recomputed "now".
                        numero_operacion.set(String::new());
                        entidad.set(Entidad::default());
                        cliente_dni_ruc.set(String::new());
                        fecha.set(get_current_date());
                        hora.set(get_current_time());
                        form_success.set(Some(message));
                        on_registered.emit(());

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(None);
                        });
                    }
                    RegisterOutcome::Rejected { message } => {
                        // Fields stay as typed so the user can retry.
                        form_error.set(Some(message));
                    }
                }

                submitting.set(false);
                *in_flight.borrow_mut() = false;
            });
        })
    };

    let state = RegisterVoucherState {
        numero_operacion: (*numero_operacion).clone(),
        entidad: *entidad,
        cliente_dni_ruc: (*cliente_dni_ruc).clone(),
        fecha: (*fecha).clone(),
        hora: (*hora).clone(),
        submitting: *submitting,
        form_error: (*form_error).clone(),
        form_success: (*form_success).clone(),
    };

    let actions = RegisterVoucherActions {
        on_numero_operacion_change,
        on_entidad_change,
        on_cliente_dni_ruc_change,
        on_fecha_change,
        on_hora_change,
        submit,
    };

    UseRegisterVoucherResult { state, actions }
}
