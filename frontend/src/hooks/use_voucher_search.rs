use shared::{sanitize_numeric, search_outcome, Entidad, SearchVoucherRequest, StoreError, Voucher};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Snapshot of the lookup form and its current result.
#[derive(Clone, PartialEq)]
pub struct VoucherSearchState {
    pub numero_operacion: String,
    pub entidad: Entidad,
    pub voucher: Option<Voucher>,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Clone)]
pub struct VoucherSearchActions {
    pub on_numero_operacion_change: Callback<Event>,
    pub on_entidad_change: Callback<Event>,
    pub submit: Callback<()>,
}

pub struct UseVoucherSearchResult {
    pub state: VoucherSearchState,
    pub actions: VoucherSearchActions,
}

/// Lookup workflow keyed by `(numero_operacion, entidad)`.
#[hook]
pub fn use_voucher_search(api_client: &ApiClient) -> UseVoucherSearchResult {
    let numero_operacion = use_state(String::new);
    let entidad = use_state(Entidad::default);
    let voucher = use_state(|| None::<Voucher>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    // Rapid lookups may resolve out of order; only the answer to the most
    // recently issued request is applied.
    let latest_request = use_mut_ref(|| 0u64);

    let on_numero_operacion_change = {
        let numero_operacion = numero_operacion.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            numero_operacion.set(sanitize_numeric(&input.value()));
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

    let submit = {
        let api_client = api_client.clone();
        let numero_operacion = numero_operacion.clone();
        let entidad = entidad.clone();
        let voucher = voucher.clone();
        let error = error.clone();
        let loading = loading.clone();
        let latest_request = latest_request.clone();

        Callback::from(move |_| {
            let request_id = {
                let mut latest = latest_request.borrow_mut();
                *latest += 1;
                *latest
            };

            let api_client = api_client.clone();
            let numero_operacion = numero_operacion.clone();
            let entidad = entidad.clone();
            let voucher = voucher.clone();
            let error = error.clone();
            let loading = loading.clone();
            let latest_request = latest_request.clone();

            spawn_local(async move {
                loading.set(true);
                error.set(None);

                let request = SearchVoucherRequest {
                    numero_operacion: (*numero_operacion).clone(),
                    entidad: *entidad,
                };

                let result = api_client.search_voucher(request).await;
                if let Err(StoreError::Unreachable(detail)) = &result {
                    gloo::console::error!("Voucher store unreachable:", detail.clone());
                }

                // A newer lookup owns the result slot now.
                if *latest_request.borrow() != request_id {
                    return;
                }

                match search_outcome(result) {
                    Ok(found) => {
                        voucher.set(Some(found));
                        error.set(None);
                    }
                    Err(message) => {
                        voucher.set(None);
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    let state = VoucherSearchState {
        numero_operacion: (*numero_operacion).clone(),
        entidad: *entidad,
        voucher: (*voucher).clone(),
        error: (*error).clone(),
        loading: *loading,
    };

    let actions = VoucherSearchActions {
        on_numero_operacion_change,
        on_entidad_change,
        submit,
    };

    UseVoucherSearchResult { state, actions }
}
