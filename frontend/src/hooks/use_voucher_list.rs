use shared::{sort_descending, Voucher};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Read side of the voucher board.
#[derive(Clone, PartialEq)]
pub struct VoucherListState {
    /// Descending by `fecha_hora`; grouping happens at render time.
    pub vouchers: Vec<Voucher>,
    pub loading: bool,
}

pub struct UseVoucherListResult {
    pub state: VoucherListState,
    pub refresh: Callback<()>,
}

/// Fetches the collection once at mount. No polling and no push channel;
/// `refresh` is the only way the list updates afterwards, wired to the
/// register workflow's success signal.
#[hook]
pub fn use_voucher_list(api_client: &ApiClient) -> UseVoucherListResult {
    let vouchers = use_state(Vec::<Voucher>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let vouchers = vouchers.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let vouchers = vouchers.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_vouchers().await {
                    Ok(data) => {
                        vouchers.set(sort_descending(data));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch vouchers:", e.to_string());
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());

            || ()
        });
    }

    UseVoucherListResult {
        state: VoucherListState {
            vouchers: (*vouchers).clone(),
            loading: *loading,
        },
        refresh,
    }
}
